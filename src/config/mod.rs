//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.stargazer.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STARGAZER_TOKEN`, `STARGAZER_API_URL`,
//!    `STARGAZER_ORG`, `STARGAZER_REPO`, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t`, `--api-url`, `--org`/`-o`,
//!    and `--repo`/`-r`
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_url = "https://api.github.com"
//! org = "octocat"
//! repo = "Hello-World"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::credentials::{ApiEndpoint, DEFAULT_API_BASE, PersonalAccessToken};
use crate::github::error::GatewayError;
use crate::github::models::SearchCriteria;

/// Application configuration supporting CLI, environment, and file sources.
///
/// The token and endpoint are read once at startup and passed explicitly to
/// the gateway constructor; nothing else reads them afterwards.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use stargazer::StargazerConfig;
///
/// let config = StargazerConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// let endpoint = config.endpoint().expect("valid API URL");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STARGAZER",
    discovery(
        dotfile_name = ".stargazer.toml",
        config_file_name = "stargazer.toml",
        app_name = "stargazer"
    )
)]
pub struct StargazerConfig {
    /// Personal access token sent as the bearer credential.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `STARGAZER_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub API; GraphQL requests go to `{api_url}/graphql`.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_url: String,

    /// Organisation pre-filled into the search form.
    #[ortho_config(cli_short = 'o')]
    pub org: Option<String>,

    /// Repository name pre-filled into the search form.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,
}

impl Default for StargazerConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_BASE.to_owned(),
            org: None,
            repo: None,
        }
    }
}

impl StargazerConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingToken`] when no token source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, GatewayError> {
        let raw = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(GatewayError::MissingToken)?;
        PersonalAccessToken::new(raw)
    }

    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] when `api_url` is not an absolute
    /// HTTP(S) URL.
    pub fn endpoint(&self) -> Result<ApiEndpoint, GatewayError> {
        ApiEndpoint::parse(&self.api_url)
    }

    /// Returns the search criteria the form starts with.
    ///
    /// Unset values become empty strings.
    #[must_use]
    pub fn initial_criteria(&self) -> SearchCriteria {
        SearchCriteria::new(
            self.org.clone().unwrap_or_default(),
            self.repo.clone().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests;
