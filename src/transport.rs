//! HTTP transport for engine requests.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ElasticError, Result};
#[cfg(feature = "tracing")]
use crate::utils::{current_time_millis, elapsed_since, format_duration};

/// A single request to the engine. Bodies are already-serialized JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<String>,
}

impl TransportRequest {
    /// Create a new GET request
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    /// Create a new PUT request
    pub fn put(url: Url, body: String) -> Self {
        Self {
            method: Method::PUT,
            url,
            body: Some(body),
        }
    }

    /// Create a new POST request
    pub fn post(url: Url, body: String) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Some(body),
        }
    }

    /// Create a new DELETE request
    pub fn delete(url: Url) -> Self {
        Self {
            method: Method::DELETE,
            url,
            body: None,
        }
    }
}

/// What came back over the wire, untouched.
///
/// The HTTP status is kept for logging and callers; nothing in this crate
/// decides success from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes one request. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: TransportRequest) -> Result<RawResponse>;
}

/// reqwest-backed transport with fixed connect and total timeouts
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Arc<ReqwestClient>,
}

impl HttpTransport {
    /// Create a new transport from the timeouts in `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .user_agent(concat!("elastic-client-rust/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &ReqwestClient {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<RawResponse> {
        #[cfg(feature = "tracing")]
        let (start_time, method, url) = (
            current_time_millis(),
            request.method.clone(),
            request.url.clone(),
        );

        let mut request_builder = self
            .client
            .request(request.method, request.url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = request.body {
            request_builder = request_builder
                .header(CONTENT_LENGTH, body.len().to_string())
                .body(body);
        }

        let response = request_builder.send().await.map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%method, %url, error = %e, "engine request failed");
            ElasticError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %method,
            %url,
            status,
            elapsed = %format_duration(elapsed_since(start_time)),
            "engine request completed"
        );

        Ok(RawResponse::new(status, body))
    }
}
