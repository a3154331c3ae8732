//! Cycle tests driven through recording fakes for both collaborators.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use warden_core::{
    Appliance, ProcessedDomains, ProcessedError, ProcessedItem, QueryEntry, QueryStatus,
    ReputationOracle, Result, WardenError,
};
use warden_engine::{run_cycle, Classifier, DomainCache, DEFAULT_WINDOW_SECS};

struct FakeAppliance {
    entries: Vec<QueryEntry>,
    fetch_fails: bool,
    reject: Vec<String>,
    batches: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeAppliance {
    fn with_entries(entries: Vec<QueryEntry>) -> Self {
        Self {
            entries,
            fetch_fails: false,
            reject: Vec::new(),
            batches: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            entries: Vec::new(),
            fetch_fails: true,
            reject: Vec::new(),
            batches: Mutex::new(Vec::new()),
        }
    }

    fn submitted(&self) -> Vec<(String, Vec<String>)> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl Appliance for FakeAppliance {
    async fn recent_queries(&self, _from: i64, _until: i64) -> Result<Vec<QueryEntry>> {
        if self.fetch_fails {
            return Err(WardenError::Fetch("connection refused".into()));
        }
        Ok(self.entries.clone())
    }

    async fn add_deny_regex(
        &self,
        patterns: &[String],
        comment: &str,
    ) -> Result<ProcessedDomains> {
        self.batches
            .lock()
            .unwrap()
            .push((comment.to_string(), patterns.to_vec()));

        let mut processed = ProcessedDomains::default();
        for pattern in patterns {
            if self.reject.contains(pattern) {
                processed.errors.push(ProcessedError {
                    item: pattern.clone(),
                    error: "database error".into(),
                });
            } else {
                processed.success.push(ProcessedItem {
                    item: pattern.clone(),
                });
            }
        }
        Ok(processed)
    }
}

struct FakeOracle {
    ids: HashMap<String, String>,
    calls: AtomicUsize,
}

impl FakeOracle {
    fn with_ids(pairs: &[(&str, &str)]) -> Self {
        Self {
            ids: pairs
                .iter()
                .map(|(d, id)| ((*d).to_string(), (*id).to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReputationOracle for FakeOracle {
    async fn category_id(&self, domain: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.ids.get(domain).cloned())
    }
}

fn entry(domain: &str, status: &str) -> QueryEntry {
    QueryEntry {
        domain: domain.to_string(),
        status: QueryStatus::from(status.to_string()),
    }
}

fn fresh_cache(dir: &tempfile::TempDir) -> DomainCache {
    DomainCache::load(dir.path().join("cache.json")).unwrap()
}

#[tokio::test]
async fn end_to_end_block_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = fresh_cache(&dir);

    let appliance = FakeAppliance::with_entries(vec![
        entry("ads.example.com", "OK"),
        entry("a.b.example.com", "GRAVITY"),
    ]);
    let classifier = Classifier::new(FakeOracle::with_ids(&[("example.com", "3")]));

    let report = run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap();

    // GRAVITY entry excluded, both names reduce to one apex domain
    assert_eq!(report.fetched, 2);
    assert_eq!(report.unique, 1);
    assert_eq!(report.blocked, 1);
    assert_eq!(report.submitted_ok, 1);

    let batches = appliance.submitted();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].0, "Auto-blocked: Ads");
    assert_eq!(batches[0].1, vec![r"(.+\.|^)example\.com$".to_string()]);

    // blocked domains are cached, and the cache hit the disk
    assert!(cache.contains("example.com"));
    let persisted = fresh_cache(&dir);
    assert!(persisted.contains("example.com"));
}

#[tokio::test]
async fn second_cycle_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = fresh_cache(&dir);

    let appliance = FakeAppliance::with_entries(vec![
        entry("ads.example.com", "OK"),
        entry("news.site.net", "FORWARDED"),
    ]);
    let classifier = Classifier::new(FakeOracle::with_ids(&[
        ("example.com", "3"),
        ("site.net", "18"),
    ]));

    run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap();
    assert_eq!(appliance.submitted().len(), 1);
    assert_eq!(classifier_calls(&classifier), 2);

    let report = run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap();

    // unchanged log and oracle: everything cached, nothing submitted
    assert_eq!(report.cached_skips, 2);
    assert_eq!(report.blocked, 0);
    assert_eq!(appliance.submitted().len(), 1);
    assert_eq!(classifier_calls(&classifier), 2);
}

fn classifier_calls(classifier: &Classifier<FakeOracle>) -> usize {
    classifier.oracle().call_count()
}

#[tokio::test]
async fn unknown_domains_are_rechecked_next_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = fresh_cache(&dir);

    let appliance = FakeAppliance::with_entries(vec![entry("mystery.example", "OK")]);
    let classifier = Classifier::new(FakeOracle::with_ids(&[]));

    let report = run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap();
    assert_eq!(report.unknown, 1);
    assert!(!cache.contains("mystery.example"));

    run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap();
    assert_eq!(classifier.oracle().call_count(), 2);
}

#[tokio::test]
async fn partial_rejection_still_persists_cache() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = fresh_cache(&dir);

    let mut appliance = FakeAppliance::with_entries(vec![
        entry("ads.example.com", "OK"),
        entry("tracker.bad.net", "OK"),
    ]);
    appliance.reject = vec![r"(.+\.|^)bad\.net$".to_string()];

    let classifier = Classifier::new(FakeOracle::with_ids(&[
        ("example.com", "3"),
        ("bad.net", "3"),
    ]));

    let report = run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap();

    assert_eq!(report.submitted_ok, 1);
    assert_eq!(report.submitted_err, 1);

    // classification progress is not lost on partial failure
    let persisted = fresh_cache(&dir);
    assert!(persisted.contains("example.com"));
    assert!(persisted.contains("bad.net"));
}

#[tokio::test]
async fn fetch_failure_aborts_the_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = fresh_cache(&dir);

    let appliance = FakeAppliance::failing();
    let classifier = Classifier::new(FakeOracle::with_ids(&[]));

    let err = run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(classifier.oracle().call_count(), 0);
}

#[tokio::test]
async fn domains_are_processed_in_lexicographic_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = fresh_cache(&dir);

    let appliance = FakeAppliance::with_entries(vec![
        entry("zeta.net", "OK"),
        entry("alpha.org", "OK"),
        entry("mid.com", "OK"),
    ]);
    let classifier = Classifier::new(FakeOracle::with_ids(&[
        ("zeta.net", "3"),
        ("alpha.org", "3"),
        ("mid.com", "3"),
    ]));

    run_cycle(&appliance, &classifier, &mut cache, DEFAULT_WINDOW_SECS)
        .await
        .unwrap();

    let batches = appliance.submitted();
    assert_eq!(
        batches[0].1,
        vec![
            r"(.+\.|^)alpha\.org$".to_string(),
            r"(.+\.|^)mid\.com$".to_string(),
            r"(.+\.|^)zeta\.net$".to_string(),
        ]
    );
}
