//! Command execution context
//!
//! Bundles the loaded configuration, the authenticated API client, and the
//! output format so command handlers don't repeat the same setup.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::client::GitHubClient;
use crate::config::{Config, ConfigUpdate};
use crate::error::Result;

/// Shared state for command execution.
///
/// The client carries the token from the config explicitly; handlers never
/// read credentials from the environment themselves.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// API client (Arc-wrapped so handlers can hand out clones)
    pub client: Arc<GitHubClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config (honoring the `--config` override), validates that a
    /// token is present, applies the `--org` override, and constructs the
    /// client. `ORGKIT_API_HOST` redirects the client to a non-production
    /// host for tests and GitHub Enterprise setups.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or no token is
    /// configured.
    pub fn new(
        format: OutputFormat,
        org_override: Option<&str>,
        config_path: Option<&str>,
    ) -> Result<Self> {
        let mut config = Config::load_at(config_path)?;
        config.validate_auth()?;

        if let Some(org) = org_override {
            config = config.apply(ConfigUpdate {
                org: Some(org.to_string()),
                ..Default::default()
            });
        }

        let host = std::env::var("ORGKIT_API_HOST").ok();
        let client = Arc::new(GitHubClient::with_host(config.token.clone(), host)?);

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Get the organization login, returning an error if not set
    pub fn require_org(&self) -> Result<&str> {
        self.config
            .org
            .as_deref()
            .ok_or_else(|| crate::error::ConfigError::MissingOrg.into())
    }
}
