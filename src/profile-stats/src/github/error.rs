//! Collaborator error types.

use thiserror::Error;

/// Errors returned by a [`ProfileSource`](super::ProfileSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The remote is still computing the requested statistics.
    #[error("Statistics for '{resource}' are still being computed")]
    Pending { resource: String },

    /// The response could not be decoded into the expected shape.
    #[error("Failed to decode response from '{path}': {message}")]
    Decode { path: String, message: String },
}

impl SourceError {
    /// Returns true if the error is an HTTP 404 from GitHub.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::GitHub(octocrab::Error::GitHub { source, .. }) => {
                source.status_code.as_u16() == 404
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_not_a_404() {
        let error = SourceError::Pending {
            resource: "octo/repo".to_string(),
        };
        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Statistics for 'octo/repo' are still being computed"
        );
    }
}
