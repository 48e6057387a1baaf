//! Authorize response types

use serde::Deserialize;

/// Body of a 200 response from `/authorize`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Issued access token (present on success)
    #[serde(default)]
    pub access_token: Option<String>,
    /// Failure reason (present when the credentials were rejected)
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthResponse {
    /// The reported error, if any. An empty string counts as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// The access token, if present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}
