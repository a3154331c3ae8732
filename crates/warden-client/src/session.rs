//! File-backed session persistence.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use warden_core::{Result, Session};

/// Stores the appliance session on disk so a restart inside the validity
/// window does not force a fresh authentication exchange.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session.
    ///
    /// A missing file yields `None`. An unreadable or malformed file is
    /// treated the same as an expired session: `None`, with a warning, so
    /// the caller re-authenticates instead of failing.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read session file");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed session file, re-authenticating");
                None
            }
        }
    }

    /// Persist a session, replacing any previous one wholesale.
    pub fn save(&self, session: &Session) -> Result<()> {
        let content = serde_json::to_string(session)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn round_trip_exact() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let session = Session::new("sid-42".into(), 1_700_000_000, 1800);
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json {").unwrap();
        let store = SessionStore::new(path);
        assert!(store.load().is_none());
    }
}
