//! Print per-user aggregate counts.

use anyhow::Result;
use reading_sync_core::TableClient;
use reading_sync_importer::user_stats;

pub(crate) async fn run(client: &dyn TableClient, user_id: &str) -> Result<()> {
    let stats = user_stats(client, user_id).await?;

    println!("Statistics for user {user_id}:");
    println!("  Total books: {}", stats.total_books);
    println!("  Total events: {}", stats.total_events);
    println!("  Finished: {}", stats.finished);
    println!("  Ended: {}", stats.ended);

    Ok(())
}
