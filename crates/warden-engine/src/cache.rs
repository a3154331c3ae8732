//! Checked-domain cache.
//!
//! Holds the set of apex domains already classified to a known category so
//! later cycles skip the oracle entirely. Persisted as a JSON array; loaded
//! once at startup, saved at the end of every cycle.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use warden_core::Result;

/// Default cache file path, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = "checked_domains.json";

/// Persistent set of already-classified apex domains.
#[derive(Debug)]
pub struct DomainCache {
    path: PathBuf,
    domains: HashSet<String>,
}

impl DomainCache {
    /// Load the cache from `path`; a missing file yields an empty cache.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let domains = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, domains })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set membership.
    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// Record a domain as checked.
    pub fn insert(&mut self, domain: &str) {
        self.domains.insert(domain.to_string());
    }

    /// Forget a domain so it is re-checked next cycle.
    pub fn remove(&mut self, domain: &str) {
        self.domains.remove(domain);
    }

    /// Number of cached domains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// True when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Persist the cache.
    ///
    /// Writes to a sibling temp file, flushes, then renames over the real
    /// path, so a crash mid-write leaves the previous state intact.
    pub fn save(&self) -> Result<()> {
        let mut sorted: Vec<&str> = self.domains.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)?;
            serde_json::to_writer(&mut file, &sorted)?;
            file.flush()?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DomainCache::load(dir.path().join("cache.json")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = DomainCache::load(&path).unwrap();
        cache.insert("example.com");
        cache.insert("other.net");
        cache.save().unwrap();

        let reloaded = DomainCache::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("example.com"));
        assert!(reloaded.contains("other.net"));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = DomainCache::load(&path).unwrap();
        cache.insert("example.com");
        cache.save().unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["cache.json"]);
    }

    #[test]
    fn remove_forgets() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DomainCache::load(dir.path().join("cache.json")).unwrap();
        cache.insert("example.com");
        cache.remove("example.com");
        assert!(!cache.contains("example.com"));
    }
}
