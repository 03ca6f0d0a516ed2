//! Per-repository processing results.

use crate::activity::ActivityStrategy;

/// What happened while gathering one repository's statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    /// Repository full name.
    pub repository: String,

    /// Whether the language breakdown was fetched.
    pub languages_ok: bool,

    /// Manifest fetches that failed and were treated as absent.
    pub manifest_failures: usize,

    /// How commit activity was obtained.
    pub activity: ActivityStrategy,
}
