//! Result of collecting one repository's commit activity.

use super::MonthHistogram;

/// Which retrieval path produced a repository's histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityOutcome {
    /// Bucketed from the weekly summary endpoint.
    Fast(MonthHistogram),

    /// Bucketed from a scan of the full commit history.
    ///
    /// May be partial if a page failed after at least one succeeded.
    Fallback(MonthHistogram),

    /// Neither path produced data.
    Unavailable,
}

/// Strategy tag without the data, used for run summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStrategy {
    Fast,
    Fallback,
    Unavailable,
}

impl ActivityOutcome {
    /// Returns the histogram, whichever path produced it.
    #[must_use]
    pub fn histogram(&self) -> Option<&MonthHistogram> {
        match self {
            Self::Fast(histogram) | Self::Fallback(histogram) => Some(histogram),
            Self::Unavailable => None,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> ActivityStrategy {
        match self {
            Self::Fast(_) => ActivityStrategy::Fast,
            Self::Fallback(_) => ActivityStrategy::Fallback,
            Self::Unavailable => ActivityStrategy::Unavailable,
        }
    }
}
