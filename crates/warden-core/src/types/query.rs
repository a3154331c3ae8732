use serde::{Deserialize, Serialize};

/// Query status reported by the appliance for a log entry.
///
/// Only `GRAVITY` matters to us: it marks a query answered from the
/// appliance's own block list without a real upstream resolution, so those
/// entries are excluded from classification. Every other status string is
/// carried through as [`QueryStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryStatus {
    /// Answered from the appliance's gravity (deny) list
    Gravity,
    /// Any other appliance status (FORWARDED, CACHE, OK, ...)
    Other(String),
}

impl QueryStatus {
    /// True when the entry never produced a real external resolution.
    #[must_use]
    pub const fn is_gravity(&self) -> bool {
        matches!(self, Self::Gravity)
    }
}

impl From<String> for QueryStatus {
    fn from(s: String) -> Self {
        if s == "GRAVITY" {
            Self::Gravity
        } else {
            Self::Other(s)
        }
    }
}

impl From<QueryStatus> for String {
    fn from(status: QueryStatus) -> Self {
        match status {
            QueryStatus::Gravity => "GRAVITY".to_string(),
            QueryStatus::Other(s) => s,
        }
    }
}

/// One entry of the appliance query log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryEntry {
    /// Queried DNS name as logged
    pub domain: String,

    /// Appliance status for this entry
    pub status: QueryStatus,
}

/// Wire shape of `GET {base}queries`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryLogPage {
    /// Log entries inside the requested window
    #[serde(default)]
    pub queries: Vec<QueryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_wire() {
        let page: QueryLogPage = serde_json::from_str(
            r#"{"queries":[{"domain":"a.example.com","status":"GRAVITY"},
                           {"domain":"b.example.com","status":"FORWARDED"}]}"#,
        )
        .unwrap();
        assert!(page.queries[0].status.is_gravity());
        assert_eq!(
            page.queries[1].status,
            QueryStatus::Other("FORWARDED".into())
        );
    }

    #[test]
    fn missing_queries_key_is_empty() {
        let page: QueryLogPage = serde_json::from_str("{}").unwrap();
        assert!(page.queries.is_empty());
    }
}
