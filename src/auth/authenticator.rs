//! Authenticator implementation
//!
//! Merges options over defaults, validates them, and performs the single
//! authorize round trip.

use super::types::AuthResponse;
use crate::api::Api;
use crate::config::Options;
use crate::error::{Error, Result};
use crate::http::{HttpTransport, Transport};
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

const REDACTED: &str = "[REDACTED]";

/// Authenticator exchanges an authorization token for an [`Api`] handle
#[derive(Clone)]
pub struct Authenticator {
    /// Baseline options every call is merged over
    defaults: Options,
    /// HTTP capability for the authorize call
    transport: Arc<dyn Transport>,
}

impl Authenticator {
    /// Create an authenticator against the public build service
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }

    /// Create an authenticator with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            defaults: Options::defaults(),
            transport: Arc::new(transport),
        }
    }

    /// Replace the defaults that caller options are merged over
    #[must_use]
    pub fn with_defaults(mut self, defaults: Options) -> Self {
        self.defaults = defaults;
        self
    }

    /// Get the current defaults
    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    /// Merge and validate `options` and build the authorize request.
    ///
    /// No I/O happens here and every error returned is a usage error
    /// ([`Error::is_usage`]). A host or protocol that does not form a valid
    /// URL is reported by [`AuthRequest::send`] as [`Error::InvalidUrl`].
    pub fn prepare(&self, options: Option<Options>) -> Result<AuthRequest> {
        let options = options.ok_or_else(Error::missing_options)?;
        let options = self.defaults.clone().merge(options);

        let client_id = required(&options.client_id, "client_id")?;
        let client_secret = required(&options.client_secret, "client_secret")?;
        let token = required(&options.token, "token")?;
        let protocol = required(&options.protocol, "protocol")?;
        let host = required(&options.host, "host")?;
        let port = options.port.ok_or_else(|| Error::missing_option("port"))?;

        let base = format!("{protocol}//{host}:{port}/authorize");
        let uri = format!(
            "{base}?client_id={client_id}&client_secret={client_secret}&auth_token={token}"
        );
        let redacted = format!(
            "{base}?client_id={client_id}&client_secret={REDACTED}&auth_token={REDACTED}"
        );
        let url = Url::parse(&uri);

        Ok(AuthRequest {
            options,
            uri,
            redacted,
            url,
            transport: Arc::clone(&self.transport),
        })
    }

    /// Validate, send, and return the authorized handle
    pub async fn authenticate(&self, options: Options) -> Result<Api> {
        self.prepare(Some(options))?.send().await
    }

    /// Completion-handler flavour of [`authenticate`](Self::authenticate).
    ///
    /// Usage errors are returned immediately and `callback` is dropped
    /// without being called, as is [`Error::NoRuntime`] when called outside
    /// a tokio runtime. Otherwise the request runs on the current runtime
    /// and `callback` receives its outcome exactly once.
    pub fn authenticate_with<F>(
        &self,
        options: Option<Options>,
        callback: F,
    ) -> Result<JoinHandle<()>>
    where
        F: FnOnce(Result<Api>) + Send + 'static,
    {
        let request = self.prepare(options)?;
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(runtime.spawn(async move {
            callback(request.send().await);
        }))
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// A validated authorize call, ready to send
pub struct AuthRequest {
    options: Options,
    uri: String,
    redacted: String,
    url: std::result::Result<Url, url::ParseError>,
    transport: Arc<dyn Transport>,
}

impl AuthRequest {
    /// The authorize URI exactly as interpolated
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The authorize URI with secret and token masked, safe to log
    pub fn redacted_uri(&self) -> &str {
        &self.redacted
    }

    /// The merged options this request was built from
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Send the authorize POST and interpret the response
    pub async fn send(self) -> Result<Api> {
        debug!(uri = %self.redacted, "Requesting access token");

        let url = self.url?;
        let response = self.transport.post(&url).await?;

        if response.status != 200 {
            warn!(status = response.status, "Authorize request rejected");
            return Err(Error::status(response.status, response.body));
        }

        let data: AuthResponse = serde_json::from_str(&response.body)
            .map_err(|e| Error::invalid_response(format!("malformed JSON body: {e}")))?;

        if let Some(message) = data.error_message() {
            warn!(error = message, "Authorize endpoint reported an error");
            return Err(Error::Api(message.to_string()));
        }

        let access_token = data
            .token()
            .ok_or_else(|| Error::invalid_response("missing access_token"))?;

        let mut options = self.options;
        options.token = Some(access_token.to_string());
        options.clear_credentials();

        let mut api = Api::try_from(options)?;
        if let Some(client) = self.transport.http_client() {
            api = api.with_http_client(client);
        }
        debug!(host = api.host(), port = api.port(), "Access token issued");
        Ok(api)
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("uri", &self.redacted)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A required string option, present and non-empty
fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::missing_option(field)),
    }
}
