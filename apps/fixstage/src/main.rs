//! fixstage - test-fixture staging tool
//!
//! This is the CLI that stands in for the host test-runner lifecycle: it
//! invokes the copy hook before a test run and the remove hook after.

mod cli;
mod error;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use clap::Parser;
use fixstage_config::Config;
use fixstage_staging::{MappingEntry, StagingManager};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.debug);

    // Run the application and handle errors
    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting fixstage v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration: explicit path, then file lookup, then defaults
    let mut config = Config::load_or_default(&cli.global.config).await?;

    // Environment variables take precedence over the file
    config.merge_env()?;

    match cli.command {
        Commands::Copy => {
            let manager = StagingManager::new(&config.staging.files).await?;
            manager.copy_files().await?;
        }
        Commands::Remove => {
            let manager = StagingManager::new(&config.staging.files).await?;
            manager.remove_files().await?;
        }
        Commands::List => {
            // Parse only; listing must not touch the filesystem
            for raw in &config.staging.files {
                let entry = MappingEntry::parse(raw)?;
                println!(
                    "{} -> {}",
                    entry.source().display(),
                    entry.destination().display()
                );
            }
        }
    }

    info!("Command completed successfully");
    Ok(())
}

/// Initialize the tracing subscriber
fn init_tracing(debug_enabled_flag: bool) {
    use tracing_subscriber::EnvFilter;

    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    let filter = if debug_enabled {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
