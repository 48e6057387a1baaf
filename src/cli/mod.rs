//! CLI module
//!
//! Command-line interface for the authorize flow.
//!
//! # Commands
//!
//! - `authorize` - Exchange an authorization token for an access token
//! - `url` - Print the authorize URL without sending it

mod commands;
mod runner;

pub use commands::{Cli, Commands, CredentialArgs, OutputFormat};
pub use runner::Runner;
