//! One polling cycle: fetch, deduplicate, classify, submit, persist.

use crate::apex::apex_domain;
use crate::cache::DomainCache;
use crate::classify::Classifier;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};
use warden_core::{Appliance, Decision, ReputationOracle, Result};

/// Default fetch window: the last hour
pub const DEFAULT_WINDOW_SECS: i64 = 3600;

/// Counters for one completed cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Query-log entries fetched (before filtering)
    pub fetched: usize,
    /// Unique apex domains after GRAVITY filtering and deduplication
    pub unique: usize,
    /// Domains skipped via the checked-domain cache
    pub cached_skips: usize,
    /// Domains that produced a deny pattern
    pub blocked: usize,
    /// Domains in an allow-tier category
    pub allowed: usize,
    /// Domains with an unrecognized category or failed lookup
    pub unknown: usize,
    /// Deny patterns accepted by the appliance
    pub submitted_ok: usize,
    /// Deny patterns rejected by the appliance
    pub submitted_err: usize,
}

/// Run one polling cycle over the window ending now.
///
/// Fetch failures abort the cycle; per-domain lookup failures and
/// partially-rejected deny batches are contained and logged. The cache is
/// saved before returning regardless of submission outcome, so
/// classification work already done survives a bad batch.
pub async fn run_cycle<A, O>(
    appliance: &A,
    classifier: &Classifier<O>,
    cache: &mut DomainCache,
    window_secs: i64,
) -> Result<CycleReport>
where
    A: Appliance + ?Sized,
    O: ReputationOracle,
{
    let until = chrono::Utc::now().timestamp();
    let from = until - window_secs;

    let entries = appliance.recent_queries(from, until).await?;
    let mut report = CycleReport {
        fetched: entries.len(),
        ..CycleReport::default()
    };

    // GRAVITY entries were answered from the appliance's own list and
    // never produced a real resolution
    let domains: BTreeSet<String> = entries
        .iter()
        .filter(|entry| !entry.status.is_gravity())
        .map(|entry| apex_domain(&entry.domain))
        .collect();
    report.unique = domains.len();
    info!(fetched = report.fetched, unique = report.unique, "fetched query log");

    let mut batches: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
    for domain in &domains {
        match classifier.classify(cache, domain).await {
            Decision::SkipCached => report.cached_skips += 1,
            Decision::Block { pattern, category } => {
                info!(domain = %domain, category, "domain marked for blocking");
                batches.entry(category).or_default().push(pattern);
                report.blocked += 1;
            }
            Decision::Allow { category } => {
                info!(domain = %domain, category, "domain allowed");
                report.allowed += 1;
            }
            Decision::Unknown => report.unknown += 1,
        }
    }

    for (category, patterns) in &batches {
        info!(category, count = patterns.len(), "submitting deny batch");
        let comment = format!("Auto-blocked: {category}");

        match appliance.add_deny_regex(patterns, &comment).await {
            Ok(processed) => {
                for item in &processed.success {
                    info!(category, item = %item.item, "deny entry added");
                }
                for rejected in &processed.errors {
                    warn!(category, item = %rejected.item, error = %rejected.error, "deny entry rejected");
                }
                report.submitted_ok += processed.success.len();
                report.submitted_err += processed.errors.len();
            }
            Err(e) => {
                // rejected batches are not retried this cycle
                warn!(category, error = %e, "deny batch failed");
                report.submitted_err += patterns.len();
            }
        }
    }

    cache.save()?;
    info!(
        cached = cache.len(),
        blocked = report.blocked,
        unknown = report.unknown,
        "cycle complete"
    );

    Ok(report)
}
