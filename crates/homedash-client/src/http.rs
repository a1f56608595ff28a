//! HTTP backend abstraction for the dashboard REST API.
//!
//! The backend speaks raw JSON values so it can be swapped for an in-memory
//! fake in tests. Typed (de)serialization lives one layer up in
//! [`ApiClient`](crate::ApiClient).

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// HTTP verbs used by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for HTTP backends that exchange JSON with the API.
///
/// `path` is relative to the configured base URL and starts with `/`.
/// `Ok(None)` means the response had no body (HTTP 204 or empty).
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, method: Method, path: &str, body: Option<Value>)
    -> ApiResult<Option<Value>>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Every request carries the configured timeout. There is no retry.
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> ApiResult<Url> {
        let joined = format!("{}{}", self.base_url, path);
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))
    }

    fn request_builder(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let builder = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        builder.header(ACCEPT, "application/json")
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResult<Option<Value>> {
        let url = self.url_for(path)?;
        debug!(target: "homedash.client", %method, %url, "Sending request");

        let mut request = self.request_builder(method, url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(&body).map_err(|e| ApiError::Encode(e.to_string()))?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(error.to_string())
    }
}

// ============================================================================
// Test Utilities
// ============================================================================
