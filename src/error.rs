//! Error types for pgbuild-auth
//!
//! Two kinds of failure share this enum. Precondition violations
//! (`MissingArgument`) are returned before any request is built; everything
//! else comes back from the network step.

use thiserror::Error;

/// The main error type for pgbuild-auth
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Precondition Errors
    // ============================================================================
    #[error("missing {name} argument")]
    MissingArgument { name: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Operational Errors
    // ============================================================================
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-200 response. Display is the message alone so callers see the
    /// server's own text.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// `error` field reported by the authorize endpoint
    #[error("{0}")]
    Api(String),

    #[error("Invalid authorization response: {message}")]
    InvalidResponse { message: String },

    #[error("authenticate_with must be called from within a tokio runtime")]
    NoRuntime,

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing argument error for an options field
    pub fn missing_option(field: &str) -> Self {
        Self::MissingArgument {
            name: format!("options.{field}"),
        }
    }

    /// Error for an absent options record
    pub fn missing_options() -> Self {
        Self::MissingArgument {
            name: "options".to_string(),
        }
    }

    /// Error for an absent completion handler
    pub fn missing_callback() -> Self {
        Self::MissingArgument {
            name: "callback".to_string(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a status error, falling back to a synthesized message when the
    /// body is empty
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.is_empty() {
            format!("server returned status code {status}")
        } else {
            body
        };
        Self::Status { status, message }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// True for misuse of the API rather than an operational failure
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::MissingArgument { .. })
    }

    /// HTTP status code, if the server answered with a non-200 status
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for pgbuild-auth
pub type Result<T> = std::result::Result<T, Error>;
