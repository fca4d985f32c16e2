//! HTTP transport abstraction for the endpoint wrappers.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::ApiError;

/// The `fetch(url) -> JSON | error` collaborator contract.
///
/// The scheduler and wrappers only depend on this seam, so tests can swap in
/// a recording mock and the production path can point at any reverse proxy
/// that relays the upstream API.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Perform one GET and decode the JSON body.
    async fn get(&self, url: &str) -> Result<Value, ApiError>;
}

/// reqwest-backed transport that attaches the upstream auth header.
pub struct HttpTransport {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Header carrying the upstream API key.
    pub const AUTH_HEADER: &'static str = "X-Riot-Token";

    /// Create a transport, optionally attaching an API key to every request.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Create a transport with the key from the `RIOT_API_KEY` environment
    /// variable, loading a `.env` file first if one is present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(std::env::var("RIOT_API_KEY").ok())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        let mut request = self.http.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(Self::AUTH_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "upstream rejected request");
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}
