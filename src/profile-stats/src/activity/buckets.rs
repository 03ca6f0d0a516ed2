//! Month bucketing for commit timestamps.

use crate::github::{CommitRecord, WeeklyActivity};
use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;

/// Commit count keyed by UTC month (`YYYY-MM`).
///
/// `BTreeMap` keeps keys in chronological order since the key format
/// sorts lexically.
pub type MonthHistogram = BTreeMap<String, u64>;

/// Returns the `YYYY-MM` bucket for a UTC instant.
#[must_use]
pub fn month_key(instant: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", instant.year(), instant.month())
}

/// Buckets weekly totals by the UTC month the week starts in.
///
/// Weeks with a zero total or an out-of-range timestamp contribute nothing.
#[must_use]
pub fn bucket_weeks(weeks: &[WeeklyActivity]) -> MonthHistogram {
    let mut histogram = MonthHistogram::new();
    for week in weeks.iter().filter(|w| w.total > 0) {
        if let Some(start) = DateTime::from_timestamp(week.week, 0) {
            *histogram.entry(month_key(start)).or_insert(0) += week.total;
        }
    }
    histogram
}

/// Buckets commits into `histogram`, returning how many were skipped.
///
/// Uses the authored date, falling back to the committer date. Commits with
/// neither, or with an unparseable date, are skipped.
pub fn bucket_commits(commits: &[CommitRecord], histogram: &mut MonthHistogram) -> usize {
    let mut skipped = 0;
    for commit in commits {
        let parsed = commit
            .timestamp()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok());
        match parsed {
            Some(instant) => {
                *histogram
                    .entry(month_key(instant.with_timezone(&Utc)))
                    .or_insert(0) += 1;
            }
            None => skipped += 1,
        }
    }
    skipped
}

/// Adds every bucket of `source` into `target`.
pub fn merge_histogram(target: &mut MonthHistogram, source: &MonthHistogram) {
    for (month, count) in source {
        *target.entry(month.clone()).or_insert(0) += count;
    }
}

/// Returns a continuous month series from the first to the last key.
///
/// Months missing from the histogram appear with a zero count.
#[must_use]
pub fn fill_month_gaps(histogram: &MonthHistogram) -> Vec<(String, u64)> {
    let (Some(first), Some(last)) = (histogram.keys().next(), histogram.keys().next_back())
    else {
        return Vec::new();
    };
    let (Some(mut current), Some(end)) = (parse_month(first), parse_month(last)) else {
        // Keys that are not YYYY-MM cannot be stepped; keep them as they are.
        return histogram.iter().map(|(k, v)| (k.clone(), *v)).collect();
    };

    let mut series = Vec::new();
    while current <= end {
        let key = format!("{:04}-{:02}", current.0, current.1);
        let count = histogram.get(&key).copied().unwrap_or(0);
        series.push((key, count));
        current = if current.1 == 12 {
            (current.0 + 1, 1)
        } else {
            (current.0, current.1 + 1)
        };
    }
    series
}

fn parse_month(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.split_once('-')?;
    let year = year.parse().ok()?;
    let month = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}
