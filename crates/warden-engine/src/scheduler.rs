//! Fixed-interval cycle scheduler.

use crate::cache::DomainCache;
use crate::classify::Classifier;
use crate::cycle::run_cycle;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};
use warden_core::{Appliance, ReputationOracle};

/// Default interval between cycles: 59 minutes, deliberately shorter than
/// both the one-hour fetch window (no log gaps) and the appliance session
/// validity (no re-auth thrashing).
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(59 * 60);

/// Drives [`run_cycle`] on a fixed tokio interval.
///
/// Fatal cycle errors (auth, fetch) are logged and the schedule keeps
/// going; the process only stops with the process manager. Tests bypass
/// this type and call [`run_cycle`] directly.
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    /// Create a scheduler with the given interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run cycles forever; the first cycle starts immediately.
    pub async fn run<A, O>(
        &self,
        appliance: &A,
        classifier: &Classifier<O>,
        cache: &mut DomainCache,
        window_secs: i64,
    ) where
        A: Appliance + ?Sized,
        O: ReputationOracle,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match run_cycle(appliance, classifier, cache, window_secs).await {
                Ok(report) => info!(?report, "cycle finished"),
                Err(e) if e.is_fatal() => {
                    error!(error = %e, "cycle aborted, retrying next interval");
                }
                Err(e) => error!(error = %e, "cycle failed"),
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
