//! Runner configuration.

use super::{RunnerError, TOKEN_ENV};
use crate::config::ProfileConfig;

/// Configuration for a statistics run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// File-level settings, with CLI overrides applied.
    profile: ProfileConfig,
    /// Whether to print the report instead of writing files.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(token: String, profile: ProfileConfig, dry_run: bool) -> Self {
        Self {
            token,
            profile,
            dry_run,
        }
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the file-level settings.
    pub fn profile(&self) -> &ProfileConfig {
        &self.profile
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Picks the explicit token, else `GITHUB_TOKEN`.
///
/// # Errors
///
/// Returns [`RunnerError::MissingToken`] when neither is set or both are blank.
pub fn resolve_token(explicit: Option<String>) -> Result<String, RunnerError> {
    explicit
        .filter(|t| !t.trim().is_empty())
        .or_else(|| std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()))
        .ok_or(RunnerError::MissingToken)
}
