//! pihole-warden - Pi-hole domain categorizer and auto-blocker.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    warden_cli::run().await
}
