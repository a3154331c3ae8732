use thiserror::Error;

/// Result type alias for warden operations
pub type Result<T> = std::result::Result<T, WardenError>;

/// Errors that can occur while talking to the appliance or the
/// reputation oracle.
#[derive(Error, Debug)]
pub enum WardenError {
    /// Appliance login did not yield a session id
    #[error("authentication failed: appliance returned no session id")]
    Auth,

    /// Query-log retrieval failed or returned malformed data
    #[error("query log fetch failed: {0}")]
    Fetch(String),

    /// Reputation lookup failed for a single domain
    #[error("reputation lookup failed: {0}")]
    Lookup(String),

    /// Appliance API returned an error response
    #[error("appliance API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the appliance
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted-state I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl WardenError {
    /// Returns true if the error aborts the whole polling cycle.
    ///
    /// Only a failed authentication exchange or a failed query-log fetch
    /// are fatal; per-domain lookup failures are contained by the
    /// classifier and a partially-rejected deny batch is reported as data,
    /// not as an error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth | Self::Fetch(_))
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth)
    }
}
