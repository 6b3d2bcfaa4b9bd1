//! Import reading events from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use reading_sync_core::{ImportRecord, TableClient};
use reading_sync_importer::import_records;

/// Run the sync command. Per-record errors are printed, not fatal.
pub(crate) async fn run(client: &dyn TableClient, user_id: &str, json_file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(json_file)
        .with_context(|| format!("Failed to read file: {}", json_file.display()))?;
    let records: Vec<ImportRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON array: {}", json_file.display()))?;

    let stats = import_records(client, user_id, &records).await;

    println!("\nSync complete:");
    println!("  Books created: {}", stats.books_created);
    println!("  Events created: {}", stats.events_created);
    if !stats.errors.is_empty() {
        println!("  Errors: {}", stats.errors.len());
        for error in &stats.errors {
            println!("    - {error}");
        }
    }

    Ok(())
}
