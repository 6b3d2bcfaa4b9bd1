use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use reading_sync_supabase::SupabaseClient;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "reading-sync")]
#[command(about = "Sync offline reading events to Supabase", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import events from a JSON file
    Sync {
        user_id: String,
        json_file: PathBuf,
    },
    /// Show user statistics
    Stats {
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems go to stdout with exit code 1; help and
            // version keep clap's success code.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            println!("{err}");
            std::process::exit(code);
        },
    };

    let config = config::SyncConfig::from_env()?;
    tracing::debug!(url = %config.supabase_url, "connecting to Supabase");
    let client = SupabaseClient::new(config.supabase_url, config.service_key)?;

    match cli.command {
        Commands::Sync { user_id, json_file } => {
            commands::sync::run(&client, &user_id, &json_file).await
        },
        Commands::Stats { user_id } => commands::stats::run(&client, &user_id).await,
    }
}
