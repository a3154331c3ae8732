use serde::{Deserialize, Serialize};

/// Request body of `POST {base}domains/deny/regex`.
#[derive(Debug, Clone, Serialize)]
pub struct DenyRegexRequest {
    /// Regex patterns to add, one per domain
    pub domain: Vec<String>,

    /// Comment stored alongside each entry
    pub comment: String,

    /// Entries are enabled immediately
    pub enabled: bool,
}

impl DenyRegexRequest {
    /// Build an enabled batch with the given comment.
    #[must_use]
    pub fn new(patterns: Vec<String>, comment: impl Into<String>) -> Self {
        Self {
            domain: patterns,
            comment: comment.into(),
            enabled: true,
        }
    }
}

/// Wire shape of the deny-batch response:
/// `{processed: {success: [{item}], errors: [{item, error}]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DenyRegexResponse {
    /// Per-item outcome envelope
    #[serde(default)]
    pub processed: ProcessedDomains,
}

/// Per-item outcome of a deny batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessedDomains {
    /// Patterns accepted by the appliance
    #[serde(default)]
    pub success: Vec<ProcessedItem>,

    /// Patterns rejected by the appliance
    #[serde(default)]
    pub errors: Vec<ProcessedError>,
}

impl ProcessedDomains {
    /// True when every submitted pattern was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One accepted pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessedItem {
    /// The pattern as echoed back by the appliance
    pub item: String,
}

/// One rejected pattern with the appliance's reason.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessedError {
    /// The pattern as echoed back by the appliance
    pub item: String,

    /// Rejection reason
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_mixed_outcome() {
        let r: DenyRegexResponse = serde_json::from_str(
            r#"{"processed":{"success":[{"item":"(.+\\.|^)ads\\.example$"}],
                             "errors":[{"item":"bad(","error":"invalid regex"}]}}"#,
        )
        .unwrap();
        assert_eq!(r.processed.success.len(), 1);
        assert_eq!(r.processed.errors[0].error, "invalid regex");
        assert!(!r.processed.is_clean());
    }

    #[test]
    fn empty_response_is_clean() {
        let r: DenyRegexResponse = serde_json::from_str("{}").unwrap();
        assert!(r.processed.is_clean());
    }
}
