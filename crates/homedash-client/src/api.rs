//! Typed REST client.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpBackend, Method, ReqwestBackend};

/// Client for the dashboard REST API.
///
/// Cheap to clone; the backend is shared.
#[derive(Clone)]
pub struct ApiClient {
    backend: Arc<dyn HttpBackend>,
}

impl ApiClient {
    /// Create a client backed by reqwest.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::with_backend(Arc::new(ReqwestBackend::new(config)?)))
    }

    /// Create a client over any backend.
    pub fn with_backend(backend: Arc<dyn HttpBackend>) -> Self {
        Self { backend }
    }

    /// Send a request and decode the optional response body.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<Option<T>>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        self.backend
            .send(method, path, body)
            .await?
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let value = self.request::<Value, T>(Method::Get, path, None).await?;
        value.ok_or_else(|| missing_body(path))
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request(Method::Post, path, Some(body)).await?;
        value.ok_or_else(|| missing_body(path))
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.request(Method::Put, path, Some(body)).await?;
        value.ok_or_else(|| missing_body(path))
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request::<Value, Value>(Method::Delete, path, None)
            .await
            .map(|_| ())
    }
}

fn missing_body(path: &str) -> ApiError {
    ApiError::Decode(format!("empty response body from {path}"))
}
