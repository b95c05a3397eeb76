use crate::config::Config;
use crate::db::Store;
use crate::domain::RecordId;

pub async fn cmd_remove(config: &Config, id_str: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let id = RecordId::new(id_str);

    let Some(record) = store.get_generation(&id).await? else {
        println!("Record {id_str} not found.");
        println!("Use 'sitedraft list' to see stored records.");
        return Ok(());
    };

    println!("Delete the generation for '{}' (ID: {})?", record.prompt, record.id);
    println!("Enter 'y' to confirm, anything else to cancel:");

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim().eq_ignore_ascii_case("y") {
        if store.delete_generation(&id).await? {
            println!("✓ Deleted record {}", record.id);
        } else {
            println!("Failed to delete record.");
        }
    } else {
        println!("Cancelled.");
    }

    Ok(())
}
