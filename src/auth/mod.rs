//! Authentication module
//!
//! Exchanges client credentials plus a short-lived authorization token for
//! an access token via `POST /authorize`, and returns an [`Api`](crate::Api)
//! scoped with it.
//!
//! Validation happens in [`Authenticator::prepare`], before any request
//! exists. Only failures of the request itself surface from
//! [`AuthRequest::send`].

mod authenticator;
mod types;

pub use authenticator::{AuthRequest, Authenticator};
pub use types::AuthResponse;
