//! Pi-hole v6 API client with persistent session handling.

use crate::session::SessionStore;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use warden_core::{
    Appliance, AuthResponse, DenyRegexRequest, DenyRegexResponse, ProcessedDomains,
    QueryLogPage, QueryEntry, Result, Session, WardenError,
};

/// Default Pi-hole API base URL
const DEFAULT_BASE_URL: &str = "http://pi.hole/api/";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default session file path, relative to the working directory
const DEFAULT_SESSION_FILE: &str = "session.json";

/// Session validity the appliance assumes when it omits the field
const DEFAULT_VALIDITY_SECS: i64 = 1800;

/// Header carrying the session id on authenticated calls
const SID_HEADER: &str = "X-FTL-SID";

/// Client for the Pi-hole appliance API.
///
/// Authenticates once, persists the session, and reuses it until expiry;
/// every authenticated call goes through [`PiholeClient::session_id`].
#[derive(Clone)]
pub struct PiholeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    password: String,
    sessions: SessionStore,
}

impl PiholeClient {
    /// Create a client with default settings and the given password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        PiholeClientBuilder::new(password).build()
    }

    /// Create a builder for custom configuration.
    #[must_use]
    pub fn builder(password: impl Into<String>) -> PiholeClientBuilder {
        PiholeClientBuilder::new(password)
    }

    /// Return a usable session id, authenticating only when the persisted
    /// session is absent or expired.
    ///
    /// # Errors
    ///
    /// [`WardenError::Auth`] when the exchange does not yield a session id.
    pub async fn session_id(&self) -> Result<String> {
        let now = chrono::Utc::now().timestamp();

        if let Some(session) = self.inner.sessions.load() {
            if session.is_valid_at(now) {
                debug!("reusing persisted session");
                return Ok(session.sid);
            }
        }

        self.authenticate(now).await
    }

    /// Perform the authentication exchange and persist the new session.
    async fn authenticate(&self, now: i64) -> Result<String> {
        let url = format!("{}auth", self.inner.base_url);
        debug!(url = %url, "authenticating against appliance");

        let response = self
            .inner
            .http
            .post(&url)
            .json(&serde_json::json!({ "password": self.inner.password }))
            .send()
            .await
            .map_err(|e| WardenError::Http(e.to_string()))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "appliance rejected authentication");
            return Err(WardenError::Auth);
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| WardenError::Http(e.to_string()))?;

        let session = auth.session.ok_or(WardenError::Auth)?;
        let sid = session.sid.ok_or(WardenError::Auth)?;
        let validity = session.validity.unwrap_or(DEFAULT_VALIDITY_SECS);

        let fresh = Session::new(sid.clone(), now, validity);
        self.inner.sessions.save(&fresh)?;
        info!(validity, "authenticated, session persisted");

        Ok(sid)
    }

    /// Fetch query-log entries with timestamps in `[from, until]`.
    ///
    /// # Errors
    ///
    /// [`WardenError::Fetch`] on any transport, status or parse failure,
    /// [`WardenError::Auth`] when a fresh login was needed and failed.
    pub async fn queries(&self, from: i64, until: i64) -> Result<QueryLogPage> {
        let sid = self.session_id().await?;
        let url = format!("{}queries", self.inner.base_url);
        debug!(url = %url, from, until, "fetching query log");

        let response = self
            .inner
            .http
            .get(&url)
            .header(SID_HEADER, sid)
            .query(&[
                ("from", from.to_string()),
                ("until", until.to_string()),
                ("length", "-1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WardenError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WardenError::Fetch(format!(
                "appliance returned {status} for query log"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| WardenError::Fetch(e.to_string()))
    }

    /// Add a batch of regex patterns to the deny list under one comment.
    pub async fn deny_regex(
        &self,
        patterns: &[String],
        comment: &str,
    ) -> Result<DenyRegexResponse> {
        let sid = self.session_id().await?;
        let url = format!("{}domains/deny/regex", self.inner.base_url);
        debug!(url = %url, count = patterns.len(), "submitting deny batch");

        let body = DenyRegexRequest::new(patterns.to_vec(), comment);
        let response = self
            .inner
            .http
            .post(&url)
            .header(SID_HEADER, sid)
            .json(&body)
            .send()
            .await
            .map_err(|e| WardenError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle an API response that returns JSON.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| WardenError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(WardenError::Json)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);

            Err(WardenError::Api {
                code: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl Appliance for PiholeClient {
    async fn recent_queries(&self, from: i64, until: i64) -> Result<Vec<QueryEntry>> {
        Ok(self.queries(from, until).await?.queries)
    }

    async fn add_deny_regex(
        &self,
        patterns: &[String],
        comment: &str,
    ) -> Result<ProcessedDomains> {
        Ok(self.deny_regex(patterns, comment).await?.processed)
    }
}

/// Builder for configuring a [`PiholeClient`].
pub struct PiholeClientBuilder {
    password: String,
    base_url: String,
    timeout: Duration,
    session_path: std::path::PathBuf,
}

impl PiholeClientBuilder {
    /// Create a new builder with the given appliance password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            session_path: DEFAULT_SESSION_FILE.into(),
        }
    }

    /// Set the appliance base URL; a trailing slash is appended if missing.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the session file path.
    #[must_use]
    pub fn session_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> PiholeClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(format!("pihole-warden/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        PiholeClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                password: self.password,
                sessions: SessionStore::new(self.session_path),
            }),
        }
    }
}
