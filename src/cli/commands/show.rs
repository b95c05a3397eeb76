//! Show record command handler

use crate::config::Config;
use crate::db::Store;
use crate::domain::RecordId;

pub async fn cmd_show(config: &Config, id_str: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let id = RecordId::new(id_str);

    let Some(record) = store.get_generation(&id).await? else {
        println!("Record {id_str} not found.");
        println!("Use 'sitedraft list' to see stored records.");
        return Ok(());
    };

    println!("Prompt: {}", record.prompt);
    println!(
        "ID: {} | Created: {} | Source: {}",
        record.id, record.created_at, record.metadata.source
    );
    println!("{:-<70}", "");

    for section in &record.sections {
        println!("{}", section.title);
        println!("  {}", section.content);
    }

    Ok(())
}
