//! Authenticated API handle
//!
//! An [`Api`] is what a successful authorization produces. It carries the
//! connection parameters and the issued access token, and nothing else:
//! there is no field for a username or password.

use crate::config::Options;
use crate::error::{Error, Result};
use reqwest::{Client, Method, RequestBuilder};
use std::fmt;

/// Path prefix of the versioned REST API
pub const API_PREFIX: &str = "/api/v1";

/// Handle scoped with an access token
#[derive(Clone)]
pub struct Api {
    protocol: String,
    host: String,
    port: u16,
    token: String,
    client: Client,
}

impl Api {
    /// Create a handle from connection parameters and an access token
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        token: impl Into<String>,
    ) -> Self {
        Self::with_client(protocol, host, port, token, Client::new())
    }

    /// Create a handle that issues requests through `client`
    pub fn with_client(
        protocol: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
            token: token.into(),
            client,
        }
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The access token issued by the authorize endpoint
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `{protocol}//{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("{}//{}:{}", self.protocol, self.host, self.port)
    }

    /// Full URL for an API path, with the access token as `auth_token`
    ///
    /// ```
    /// use pgbuild_auth::Api;
    ///
    /// let api = Api::new("https:", "build.phonegap.com", 443, "abc123");
    /// assert_eq!(
    ///     api.url("/me"),
    ///     "https://build.phonegap.com:443/api/v1/me?auth_token=abc123"
    /// );
    /// ```
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let separator = if path.contains('?') { '&' } else { '?' };
        format!(
            "{}{API_PREFIX}/{path}{separator}auth_token={}",
            self.base_url(),
            self.token
        )
    }

    /// Start a request against an API path, scoped with the access token
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Issue requests through `client` instead
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Build a handle from authorized options.
///
/// Only `protocol`, `host`, `port` and `token` are read; username and
/// password are never carried over. The handle gets a default reqwest
/// client; use [`Api::with_http_client`] to supply a configured one.
impl TryFrom<Options> for Api {
    type Error = Error;

    fn try_from(options: Options) -> Result<Self> {
        let Options {
            protocol,
            host,
            port,
            token,
            ..
        } = options;

        Ok(Self::new(
            protocol.ok_or_else(|| Error::missing_option("protocol"))?,
            host.ok_or_else(|| Error::missing_option("host"))?,
            port.ok_or_else(|| Error::missing_option("port"))?,
            token.ok_or_else(|| Error::missing_option("token"))?,
        ))
    }
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
