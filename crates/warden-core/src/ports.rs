//! Collaborator ports.
//!
//! The engine talks to the appliance and the reputation oracle through
//! these traits so a cycle can be driven in tests with recording fakes
//! instead of a network.

use crate::types::{ProcessedDomains, QueryEntry};
use crate::Result;
use async_trait::async_trait;

/// The DNS-filtering appliance: query-log source and deny-list sink.
#[async_trait]
pub trait Appliance: Send + Sync {
    /// Fetch all query-log entries with unix timestamps in `[from, until]`.
    async fn recent_queries(&self, from: i64, until: i64) -> Result<Vec<QueryEntry>>;

    /// Add a batch of regex deny entries under one comment.
    async fn add_deny_regex(
        &self,
        patterns: &[String],
        comment: &str,
    ) -> Result<ProcessedDomains>;
}

/// The external domain-reputation service.
#[async_trait]
pub trait ReputationOracle: Send + Sync {
    /// Look up the category id for a domain.
    ///
    /// Returns `Ok(None)` when the oracle answered but carries no id for
    /// the domain; transport and parse failures are `Err`.
    async fn category_id(&self, domain: &str) -> Result<Option<String>>;
}
