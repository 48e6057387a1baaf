//! HTTP transport backed by reqwest
//!
//! Sends the authorize POST and hands back the raw status and body.
//! Interpreting them is the authenticator's job.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Raw response from a transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text (may be empty)
    pub body: String,
}

impl TransportResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The HTTP capability the authenticator needs
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST an empty body to `uri` and return status plus body text
    async fn post(&self, uri: &Url) -> Result<TransportResponse>;

    /// reqwest client the issued [`Api`](crate::Api) handle should reuse, so
    /// that its timeout and user agent carry over
    fn http_client(&self) -> Option<Client> {
        None
    }
}

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("pgbuild-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new config builder
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

/// reqwest-based transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with reqwest's defaults
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: &HttpTransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, uri: &Url) -> Result<TransportResponse> {
        let response = self
            .client
            .post(uri.clone())
            .body(Vec::<u8>::new())
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::Http)?;
        debug!(status, bytes = body.len(), "Transport response received");

        Ok(TransportResponse { status, body })
    }

    fn http_client(&self) -> Option<Client> {
        Some(self.client.clone())
    }
}
