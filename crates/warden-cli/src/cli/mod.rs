//! CLI entry point and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;

/// Parse arguments, initialize logging and execute the chosen command.
pub async fn run() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    commands::execute(cli).await
}
