//! Generate command handler

use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{GenerationService, SeaOrmGenerationService};

pub async fn cmd_generate(config: &Config, prompt: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmGenerationService::new(Arc::new(store));

    let outcome = service.handle_generation(prompt).await?;

    println!("Sections for: {prompt}");
    println!("{:-<70}", "");

    for section in &outcome.sections {
        println!("{}", section.title);
        println!("  {}", section.content);
    }

    println!();
    println!("✓ Stored as record {}", outcome.id);
    println!("View it with: sitedraft show {}", outcome.id);

    Ok(())
}
