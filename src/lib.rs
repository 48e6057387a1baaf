//! # pgbuild-auth
//!
//! Authentication for the PhoneGap Build API.
//!
//! Exchanges a client id, client secret and short-lived authorization token
//! for an access token, and hands back an [`Api`] handle scoped with it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pgbuild_auth::{Authenticator, Options, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let options = Options::new()
//!         .client_id("my-client")
//!         .client_secret("my-secret")
//!         .token("authorization-code");
//!
//!     // Missing fields are reported here, before anything is sent
//!     let request = Authenticator::new().prepare(Some(options))?;
//!
//!     let api = request.send().await?;
//!     println!("{}", api.url("/me"));
//!     Ok(())
//! }
//! ```
//!
//! ## Flow
//!
//! ```text
//! Options ──merge(defaults)──▶ prepare() ──▶ AuthRequest ──send()──▶ Api
//!                                  │                          │
//!                         usage errors (sync)     transport / status / api errors
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Authentication options, defaults and merging
pub mod config;

/// HTTP transport
pub mod http;

/// Authorize flow
pub mod auth;

/// Authenticated API handle
pub mod api;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::Api;
pub use auth::{AuthRequest, AuthResponse, Authenticator};
pub use config::Options;
pub use error::{Error, Result};
pub use http::{HttpTransport, HttpTransportConfig, Transport, TransportResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
