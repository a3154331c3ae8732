//! Per-domain classification against the reputation oracle.

use crate::cache::DomainCache;
use tracing::{debug, warn};
use warden_core::{CategoryClass, CategoryTable, Decision, ReputationOracle};

/// Classifies apex domains using the oracle and the two-tier category
/// table, consulting the checked-domain cache first.
///
/// Cache retention policy: both block and allow outcomes are cached (the
/// appliance stores the deny pattern durably, so a blocked domain never
/// needs a second lookup); Unknown is never retained, so transient oracle
/// failures self-heal on the next cycle.
pub struct Classifier<O> {
    oracle: O,
    table: CategoryTable,
}

impl<O: ReputationOracle> Classifier<O> {
    /// Build a classifier around an oracle with the built-in table.
    #[must_use]
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            table: CategoryTable::new(),
        }
    }

    /// The wrapped oracle.
    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Classify one apex domain.
    ///
    /// Never fails: oracle errors are logged and downgraded to
    /// [`Decision::Unknown`] so a flaky lookup cannot abort the cycle.
    pub async fn classify(&self, cache: &mut DomainCache, domain: &str) -> Decision {
        if cache.contains(domain) {
            return Decision::SkipCached;
        }

        let id = match self.oracle.category_id(domain).await {
            Ok(id) => id,
            Err(e) => {
                warn!(domain, error = %e, "reputation lookup failed");
                return Decision::Unknown;
            }
        };

        match self.table.classify_id(id.as_deref()) {
            CategoryClass::Block(category) => {
                cache.insert(domain);
                Decision::Block {
                    pattern: deny_pattern(domain),
                    category,
                }
            }
            CategoryClass::Allow(category) => {
                debug!(domain, category, "domain allowed");
                cache.insert(domain);
                Decision::Allow { category }
            }
            CategoryClass::Unknown => {
                // a stale entry must not suppress the next re-check
                cache.remove(domain);
                debug!(domain, ?id, "category unknown, not cached");
                Decision::Unknown
            }
        }
    }
}

/// Build the deny-list regex for a domain: matches the domain itself and
/// any subdomain, with literal characters escaped.
#[must_use]
pub fn deny_pattern(domain: &str) -> String {
    format!(r"(.+\.|^){}$", regex::escape(domain))
}
