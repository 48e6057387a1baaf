//! HTTP transport module
//!
//! The authenticator never talks to `reqwest` directly. It posts through
//! the [`Transport`] trait so that the wire layer can be swapped or mocked.
//!
//! # Features
//!
//! - **Single shot**: one POST per call, no retries or backoff
//! - **Configurable**: timeout and user agent live here, not in the authenticator

mod client;

pub use client::{HttpTransport, HttpTransportConfig, Transport, TransportResponse};
