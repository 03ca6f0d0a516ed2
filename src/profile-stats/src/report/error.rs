//! Report error types.

use thiserror::Error;

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to read or write a file.
    #[error("Failed to access '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Markdown template rendering error.
    #[error("Template rendering error: {0}")]
    Template(#[from] handlebars::RenderError),
}
