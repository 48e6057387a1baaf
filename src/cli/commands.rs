//! CLI commands and argument parsing

use crate::config::Options;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// PhoneGap Build authorization CLI
#[derive(Parser, Debug)]
#[command(name = "pgbuild-auth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange an authorization token for an access token
    Authorize {
        #[command(flatten)]
        credentials: CredentialArgs,

        /// Output format
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Print the authorize URL (secret and token masked) without sending it
    Url {
        #[command(flatten)]
        credentials: CredentialArgs,
    },
}

/// Connection and credential flags, each overriding env and config file
#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    /// OAuth client id
    #[arg(long)]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Authorization token to exchange
    #[arg(long)]
    pub token: Option<String>,

    /// Protocol with trailing colon (e.g., "https:")
    #[arg(long)]
    pub protocol: Option<String>,

    /// Service host
    #[arg(long)]
    pub host: Option<String>,

    /// Service port
    #[arg(long)]
    pub port: Option<u16>,
}

impl From<&CredentialArgs> for Options {
    fn from(args: &CredentialArgs) -> Self {
        Options {
            protocol: args.protocol.clone(),
            host: args.host.clone(),
            port: args.port,
            client_id: args.client_id.clone(),
            client_secret: args.client_secret.clone(),
            token: args.token.clone(),
            username: None,
            password: None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Access token only
    Plain,
    /// JSON object with connection parameters and the access token
    Json,
}
