//! Command implementations.

mod once;
mod run;

use crate::cli::args::{Cli, Commands};
use anyhow::{Context as _, Result};
use std::time::Duration;
use warden::{Classifier, DomainCache, NetifyClient, PiholeClient};

/// Collaborators shared by every command.
pub struct Context {
    pub pihole: PiholeClient,
    pub classifier: Classifier<NetifyClient>,
    pub cache: DomainCache,
    pub window_secs: i64,
    pub interval: Duration,
}

impl Context {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let pihole = PiholeClient::builder(cli.password.clone())
            .base_url(cli.url.clone())
            .timeout(Duration::from_secs(cli.timeout_secs))
            .session_path(&cli.session_file)
            .build();

        let classifier = Classifier::new(NetifyClient::with_base_url(cli.oracle_url.clone()));

        let cache = DomainCache::load(&cli.cache_file)
            .with_context(|| format!("failed to load cache from {}", cli.cache_file.display()))?;

        Ok(Self {
            pihole,
            classifier,
            cache,
            window_secs: cli.window_secs,
            interval: Duration::from_secs(cli.interval_secs),
        })
    }
}

/// Dispatch the parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Run => run::execute(ctx).await,
        Commands::Once => once::execute(ctx).await,
    }
}
