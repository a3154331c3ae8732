//! `pihole-warden once` - a single cycle, for cron jobs and smoke tests.

use super::Context;
use anyhow::Result;
use tracing::info;
use warden::run_cycle;

pub async fn execute(mut ctx: Context) -> Result<()> {
    let report = run_cycle(
        &ctx.pihole,
        &ctx.classifier,
        &mut ctx.cache,
        ctx.window_secs,
    )
    .await?;

    info!(
        fetched = report.fetched,
        unique = report.unique,
        cached_skips = report.cached_skips,
        blocked = report.blocked,
        allowed = report.allowed,
        unknown = report.unknown,
        submitted_ok = report.submitted_ok,
        submitted_err = report.submitted_err,
        "cycle complete"
    );

    Ok(())
}
