//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fixstage - test-fixture staging tool
#[derive(Parser)]
#[command(name = "fixstage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Copy configured fixture files into place before a test run and remove them after")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Copy every configured mapping into place (pre-test phase)
    #[command(alias = "c")]
    Copy,

    /// Remove every configured destination (post-test phase)
    #[command(alias = "rm")]
    Remove,

    /// Print the parsed mappings without touching the filesystem
    #[command(alias = "ls")]
    List,
}
