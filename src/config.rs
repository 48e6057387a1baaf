//! Authentication options
//!
//! `Options` is the flat record the authenticator works on. Every field is
//! optional so that caller-supplied values can be overlaid onto a default
//! record one field at a time.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Default protocol, including the trailing colon
pub const DEFAULT_PROTOCOL: &str = "https:";

/// Default build service host
pub const DEFAULT_HOST: &str = "build.phonegap.com";

/// Default build service port
pub const DEFAULT_PORT: u16 = 443;

/// Environment variable prefix used by [`Options::from_env`]
pub const ENV_PREFIX: &str = "PGBUILD_";

const REDACTED: &str = "[REDACTED]";

/// Connection and credential options for the authorize call
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Protocol with trailing colon (e.g., "https:")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Service host name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Service port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// OAuth client id
    #[serde(default, alias = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[serde(default, alias = "clientSecret", skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Authorization token to exchange; holds the access token afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Account username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Options {
    /// Create an empty options record
    pub fn new() -> Self {
        Self::default()
    }

    /// The baseline record: public build service over HTTPS
    pub fn defaults() -> Self {
        Self {
            protocol: Some(DEFAULT_PROTOCOL.to_string()),
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            ..Self::default()
        }
    }

    /// Overlay `overrides` onto `self`, field by field.
    ///
    /// A field set in `overrides` always wins, even when it is an empty
    /// string. Unset fields fall through to `self`.
    #[must_use]
    pub fn merge(self, overrides: Options) -> Options {
        Options {
            protocol: overrides.protocol.or(self.protocol),
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            client_id: overrides.client_id.or(self.client_id),
            client_secret: overrides.client_secret.or(self.client_secret),
            token: overrides.token.or(self.token),
            username: overrides.username.or(self.username),
            password: overrides.password.or(self.password),
        }
    }

    /// Load options from a YAML or JSON file, chosen by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read options file '{}': {e}",
                path.display()
            ))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(Error::config(format!(
                "Unsupported options file '{}': expected .yaml, .yml or .json",
                path.display()
            ))),
        }
    }

    /// Parse options from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse options from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from `PGBUILD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through an arbitrary variable lookup.
    ///
    /// Keys are `PGBUILD_PROTOCOL`, `PGBUILD_HOST`, `PGBUILD_PORT`,
    /// `PGBUILD_CLIENT_ID`, `PGBUILD_CLIENT_SECRET` and `PGBUILD_TOKEN`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        let port = match var("PORT") {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                Error::config(format!("Invalid {ENV_PREFIX}PORT '{raw}': {e}"))
            })?),
            None => None,
        };

        Ok(Self {
            protocol: var("PROTOCOL"),
            host: var("HOST"),
            port,
            client_id: var("CLIENT_ID"),
            client_secret: var("CLIENT_SECRET"),
            token: var("TOKEN"),
            username: None,
            password: None,
        })
    }

    /// Set the protocol
    #[must_use]
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set the host
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the client id
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the client secret
    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the authorization token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the username
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Drop username and password
    pub fn clear_credentials(&mut self) {
        self.username = None;
        self.password = None;
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| REDACTED);
        f.debug_struct("Options")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("token", &redact(&self.token))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}
