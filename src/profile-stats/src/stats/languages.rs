//! Language share calculation.

use super::RepoStats;
use serde::Serialize;

/// One language's share of all bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    /// Language name.
    pub language: String,

    /// Cumulative bytes across repositories.
    pub bytes: u64,

    /// `bytes / total_bytes × 100`, or 0 when there are no bytes.
    pub percentage: f64,
}

/// Returns every language with its percentage, largest first.
///
/// The sort is stable: languages with equal byte counts stay in the order
/// they were first encountered.
#[must_use]
pub fn language_percentages(stats: &RepoStats) -> Vec<LanguageShare> {
    let total = stats.total_bytes();
    let mut shares: Vec<LanguageShare> = stats
        .languages()
        .iter()
        .map(|(language, bytes)| LanguageShare {
            language: language.to_string(),
            bytes,
            percentage: if total > 0 {
                bytes as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    shares.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn stats_with(languages: &[(&str, u64)]) -> RepoStats {
        let mut stats = RepoStats::new();
        for (language, bytes) in languages {
            stats.record_languages(&BTreeMap::from([(language.to_string(), *bytes)]));
        }
        stats
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let stats = stats_with(&[("A", 333), ("B", 333), ("C", 334), ("D", 7)]);
        let shares = language_percentages(&stats);

        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        let bytes: u64 = shares.iter().map(|s| s.bytes).sum();
        assert_eq!(bytes, stats.total_bytes());
    }

    #[test]
    fn sorted_descending_with_stable_ties() {
        let stats = stats_with(&[("Zig", 10), ("Ada", 50), ("Lua", 10), ("Nim", 50)]);
        let order: Vec<String> = language_percentages(&stats)
            .into_iter()
            .map(|s| s.language)
            .collect();

        assert_eq!(order, ["Ada", "Nim", "Zig", "Lua"]);
    }

    #[test]
    fn zero_bytes_yields_zero_percentages() {
        let stats = stats_with(&[("Empty", 0)]);
        let shares = language_percentages(&stats);

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percentage, 0.0);
    }

    #[test]
    fn no_languages_yields_empty() {
        assert!(language_percentages(&RepoStats::new()).is_empty());
    }
}
