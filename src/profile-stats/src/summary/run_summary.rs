//! Run summary types.

use super::result::ProcessingResult;
use crate::activity::ActivityStrategy;
use crate::stats::RepoStats;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories processed.
    pub repositories_processed: usize,

    /// Repositories whose language breakdown could not be fetched.
    pub language_failures: usize,

    /// Manifest fetches treated as absent after an error.
    pub manifest_failures: usize,

    /// Repositories served by the weekly summary.
    pub activity_fast: usize,

    /// Repositories that needed a full commit scan.
    pub activity_fallback: usize,

    /// Repositories without any activity data.
    pub activity_unavailable: usize,

    /// Distinct languages across all repositories.
    pub languages_found: usize,

    /// Distinct platforms detected.
    pub platforms_found: usize,

    /// Distinct databases detected.
    pub databases_found: usize,

    /// Months with at least one commit.
    pub active_months: usize,

    /// Number of chart files written.
    pub charts_written: usize,

    /// Whether the document content changed.
    pub document_updated: bool,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.repositories_processed += 1;
        if !result.languages_ok {
            self.language_failures += 1;
        }
        self.manifest_failures += result.manifest_failures;
        match result.activity {
            ActivityStrategy::Fast => self.activity_fast += 1,
            ActivityStrategy::Fallback => self.activity_fallback += 1,
            ActivityStrategy::Unavailable => self.activity_unavailable += 1,
        }
    }

    /// Copies the aggregate's category counts.
    pub fn record_stats(&mut self, stats: &RepoStats) {
        self.languages_found = stats.languages().len();
        self.platforms_found = stats.platforms().len();
        self.databases_found = stats.databases().len();
        self.active_months = stats.activities().values().filter(|c| **c > 0).count();
    }

    /// Returns true if any repository was only partially processed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.language_failures > 0 || self.manifest_failures > 0 || self.activity_unavailable > 0
    }

    /// Returns true if every repository was fully processed.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures()
    }
}
