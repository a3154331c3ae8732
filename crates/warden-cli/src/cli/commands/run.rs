//! `pihole-warden run` - poll and block forever.

use super::Context;
use anyhow::Result;
use tracing::info;
use warden::Scheduler;

pub async fn execute(mut ctx: Context) -> Result<()> {
    info!(
        interval_secs = ctx.interval.as_secs(),
        window_secs = ctx.window_secs,
        cached = ctx.cache.len(),
        "starting scheduler"
    );

    Scheduler::new(ctx.interval)
        .run(&ctx.pihole, &ctx.classifier, &mut ctx.cache, ctx.window_secs)
        .await;

    Ok(())
}
