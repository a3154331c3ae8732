use serde::{Deserialize, Serialize};

/// A bearer-token session for the appliance API.
///
/// Created on a successful authentication exchange and replaced wholesale
/// whenever it is absent or expired; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session id, sent as the `X-FTL-SID` header
    pub sid: String,

    /// Absolute expiry as unix seconds
    pub expires_at: i64,
}

impl Session {
    /// Build a session expiring `validity` seconds after `now`.
    #[must_use]
    pub const fn new(sid: String, now: i64, validity: i64) -> Self {
        Self {
            sid,
            expires_at: now + validity,
        }
    }

    /// A session is usable iff the current time is strictly before expiry.
    #[must_use]
    pub const fn is_valid_at(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

/// Wire shape of `POST {base}auth`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Session envelope; absent when authentication failed
    #[serde(default)]
    pub session: Option<AuthSession>,
}

/// Session envelope inside an [`AuthResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    /// Session id; absent when the password was rejected
    #[serde(default)]
    pub sid: Option<String>,

    /// Validity duration in seconds
    #[serde(default)]
    pub validity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_boundary() {
        let s = Session::new("abc".into(), 1000, 1800);
        assert_eq!(s.expires_at, 2800);
        assert!(s.is_valid_at(2799));
        assert!(!s.is_valid_at(2800));
        assert!(!s.is_valid_at(3000));
    }

    #[test]
    fn session_round_trip() {
        let s = Session::new("sid-1".into(), 42, 60);
        let json = serde_json::to_string(&s).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn auth_response_without_sid() {
        let r: AuthResponse = serde_json::from_str(r#"{"session":{"validity":300}}"#).unwrap();
        assert!(r.session.unwrap().sid.is_none());
    }
}
