//! List records command handler

use crate::config::Config;
use crate::constants::limits;
use crate::db::Store;

pub async fn cmd_list(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let records = store.list_recent_generations(limits::CLI_LIST_LIMIT).await?;

    if records.is_empty() {
        println!("No generation records stored.");
        println!();
        println!("Generate one with: sitedraft generate \"a bakery in Cairo\"");
        return Ok(());
    }

    println!("Recent generations ({} shown, newest first)", records.len());
    println!("{:-<70}", "");

    for record in records {
        println!("• {}", record.prompt);
        println!(
            "  ID: {} | Created: {} | Sections: {}",
            record.id, record.created_at, record.metadata.sections_generated
        );
    }

    Ok(())
}
