//! Netify Informatics lookup client (the reputation oracle).

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use warden_core::{ReputationOracle, Result, WardenError};

/// Default Netify Informatics base URL
const DEFAULT_BASE_URL: &str = "https://informatics.netify.ai";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Netify domain-category lookup endpoint.
#[derive(Clone)]
pub struct NetifyClient {
    http: HttpClient,
    base_url: String,
}

/// Wire shape of `GET /api/v2/lookup/domains/{domain}`.
#[derive(Debug, Default, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    data: Option<LookupData>,
}

#[derive(Debug, Default, Deserialize)]
struct LookupData {
    #[serde(default)]
    category: Option<LookupCategory>,
}

#[derive(Debug, Default, Deserialize)]
struct LookupCategory {
    #[serde(default)]
    id: Option<i64>,
}

impl NetifyClient {
    /// Create a client against the public Netify endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(format!("pihole-warden/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { http, base_url }
    }

    /// Look up the category id for a domain.
    pub async fn lookup(&self, domain: &str) -> Result<Option<String>> {
        let url = format!("{}/api/v2/lookup/domains/{domain}", self.base_url);
        debug!(url = %url, "oracle lookup");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WardenError::Lookup(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WardenError::Lookup(format!(
                "oracle returned {status} for {domain}"
            )));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| WardenError::Lookup(e.to_string()))?;

        let id = body
            .data
            .and_then(|d| d.category)
            .and_then(|c| c.id)
            .map(|id| id.to_string());

        Ok(id)
    }
}

impl Default for NetifyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReputationOracle for NetifyClient {
    async fn category_id(&self, domain: &str) -> Result<Option<String>> {
        self.lookup(domain).await
    }
}
