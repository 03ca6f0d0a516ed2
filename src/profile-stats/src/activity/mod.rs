//! Commit activity aggregation.
//!
//! Each repository is first tried against the weekly summary endpoint, which
//! costs one request but only covers about a year and may still be computing
//! on the remote side. If that yields nothing, the full commit history is
//! paged through instead.

mod buckets;
mod outcome;

pub use buckets::{
    bucket_commits, bucket_weeks, fill_month_gaps, merge_histogram, month_key, MonthHistogram,
};
pub use outcome::{ActivityOutcome, ActivityStrategy};

use crate::github::{ProfileSource, RepositorySummary, SourceError};
use std::time::Duration;
use tracing::{debug, warn};

/// Commits requested per page during a full-history scan.
pub const COMMIT_PAGE_SIZE: u8 = 100;

/// Tuning for the full-history scan.
#[derive(Debug, Clone)]
pub struct ActivityOptions {
    /// Commits per page.
    pub page_size: u8,

    /// Pause between pages.
    pub page_delay: Duration,
}

impl Default for ActivityOptions {
    fn default() -> Self {
        Self {
            page_size: COMMIT_PAGE_SIZE,
            page_delay: Duration::from_millis(100),
        }
    }
}

/// Collects a repository's month histogram.
///
/// Never fails: errors degrade the outcome to [`ActivityOutcome::Fallback`]
/// with partial data or [`ActivityOutcome::Unavailable`].
pub async fn collect_activity(
    source: &dyn ProfileSource,
    repository: &RepositorySummary,
    options: &ActivityOptions,
) -> ActivityOutcome {
    match source.weekly_commit_activity(repository).await {
        Ok(weeks) if !weeks.is_empty() => {
            debug!(weeks = weeks.len(), "Using weekly commit summary");
            return ActivityOutcome::Fast(bucket_weeks(&weeks));
        }
        Ok(_) => {
            debug!("Weekly commit summary is empty, scanning history");
        }
        Err(SourceError::Pending { .. }) => {
            warn!("Weekly commit summary still being computed, scanning history");
        }
        Err(e) => {
            warn!(error = %e, "Weekly commit summary failed, scanning history");
        }
    }

    scan_history(source, repository, options).await
}

/// Pages through the full commit list and buckets every commit.
async fn scan_history(
    source: &dyn ProfileSource,
    repository: &RepositorySummary,
    options: &ActivityOptions,
) -> ActivityOutcome {
    let page_size = options.page_size.max(1);
    let mut histogram = MonthHistogram::new();
    let mut skipped = 0;
    let mut page = 1;

    loop {
        let commits = match source.commits(repository, page, page_size).await {
            Ok(commits) => commits,
            Err(e) if page == 1 => {
                warn!(error = %e, "Failed to list commits");
                return ActivityOutcome::Unavailable;
            }
            Err(e) => {
                warn!(page, error = %e, "Failed to list commits, keeping partial history");
                break;
            }
        };

        skipped += bucket_commits(&commits, &mut histogram);

        if commits.len() < usize::from(page_size) {
            break;
        }

        page += 1;
        if !options.page_delay.is_zero() {
            tokio::time::sleep(options.page_delay).await;
        }
    }

    if skipped > 0 {
        debug!(skipped, "Skipped commits without a usable timestamp");
    }
    debug!(pages = page, months = histogram.len(), "History scan complete");
    ActivityOutcome::Fallback(histogram)
}
