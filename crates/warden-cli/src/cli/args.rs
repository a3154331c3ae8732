//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pi-hole domain categorizer and auto-blocker.
#[derive(Debug, Parser)]
#[command(name = "pihole-warden", version, about)]
pub struct Cli {
    /// Pi-hole API base URL
    #[arg(long, env = "PIHOLE_URL", default_value = "http://pi.hole/api/")]
    pub url: String,

    /// Pi-hole API password (required)
    #[arg(long, env = "PIHOLE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Netify Informatics base URL
    #[arg(long, env = "NETIFY_URL", default_value = "https://informatics.netify.ai")]
    pub oracle_url: String,

    /// Query-log fetch window in seconds
    #[arg(long, default_value_t = 3600)]
    pub window_secs: i64,

    /// Seconds between polling cycles; keep below the fetch window
    #[arg(long, default_value_t = 3540)]
    pub interval_secs: u64,

    /// Checked-domain cache file
    #[arg(long, default_value = "checked_domains.json")]
    pub cache_file: PathBuf,

    /// Session file
    #[arg(long, default_value = "session.json")]
    pub session_file: PathBuf,

    /// Appliance request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Poll and block on a fixed interval, forever
    Run,

    /// Run a single cycle and exit (non-zero on a fatal error)
    Once,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn password_is_required() {
        let result = Cli::try_parse_from(["pihole-warden", "once"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults() {
        let cli =
            Cli::try_parse_from(["pihole-warden", "--password", "hunter2", "once"]).unwrap();
        assert_eq!(cli.url, "http://pi.hole/api/");
        assert_eq!(cli.window_secs, 3600);
        assert_eq!(cli.interval_secs, 3540);
    }
}
