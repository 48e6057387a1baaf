//! CLI runner - executes commands

use crate::api::Api;
use crate::auth::Authenticator;
use crate::cli::commands::{Cli, Commands, CredentialArgs, OutputFormat};
use crate::config::Options;
use crate::error::Result;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Variable lookup used for the `PGBUILD_*` layer
type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// CLI runner
pub struct Runner {
    cli: Cli,
    authenticator: Authenticator,
    env: EnvLookup,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self::with_authenticator(cli, Authenticator::new())
    }

    /// Create a runner with a preconfigured authenticator
    pub fn with_authenticator(cli: Cli, authenticator: Authenticator) -> Self {
        Self {
            cli,
            authenticator,
            env: Arc::new(|key| std::env::var(key).ok()),
        }
    }

    /// Read the environment layer through `lookup` instead of the process
    /// environment
    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Arc::new(lookup);
        self
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Authorize {
                credentials,
                format,
            } => {
                let output = self.authorize(credentials, *format).await?;
                println!("{output}");
                Ok(())
            }
            Commands::Url { credentials } => {
                let output = self.url(credentials)?;
                println!("{output}");
                Ok(())
            }
        }
    }

    /// Authenticate and render the result
    pub async fn authorize(
        &self,
        credentials: &CredentialArgs,
        format: OutputFormat,
    ) -> Result<String> {
        let options = self.resolve_options(credentials)?;
        let api = self.authenticator.authenticate(options).await?;
        render(&api, format)
    }

    /// Render the masked authorize URL
    pub fn url(&self, credentials: &CredentialArgs) -> Result<String> {
        let options = self.resolve_options(credentials)?;
        let request = self.authenticator.prepare(Some(options))?;
        Ok(request.redacted_uri().to_string())
    }

    /// Layer options: config file, then environment, then flags
    fn resolve_options(&self, credentials: &CredentialArgs) -> Result<Options> {
        let mut options = Options::new();

        if let Some(path) = &self.cli.config {
            debug!(path = %path.display(), "Loading options file");
            options = options.merge(Options::from_file(path)?);
        }

        options = options.merge(Options::from_lookup(|key| (self.env)(key))?);
        Ok(options.merge(Options::from(credentials)))
    }
}

fn render(api: &Api, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(api.token().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "protocol": api.protocol(),
            "host": api.host(),
            "port": api.port(),
            "access_token": api.token(),
        }))?),
    }
}
