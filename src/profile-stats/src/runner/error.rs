//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No token was given and `GITHUB_TOKEN` is unset or empty.
    #[error("GitHub token missing: pass --token or set {}", super::TOKEN_ENV)]
    MissingToken,

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Chart or document IO errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Account or repository listing failures.
    #[error(transparent)]
    Source(#[from] crate::github::SourceError),
}
