//! The per-run aggregate.

use super::Tally;
use crate::activity::MonthHistogram;
use crate::detection::Detection;
use std::collections::BTreeMap;

/// Aggregate of everything collected across an account's repositories.
///
/// Created empty at the start of a run and mutated only through the
/// `record_*` methods, which keep `total_repos == public_repos + private_repos`
/// and `total_bytes == Σ languages`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStats {
    total_repos: u64,
    public_repos: u64,
    private_repos: u64,
    languages: Tally,
    total_bytes: u64,
    platforms: Tally,
    databases: Tally,
    activities: MonthHistogram,
}

impl RepoStats {
    /// Creates an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one repository.
    pub fn record_repository(&mut self, private: bool) {
        self.total_repos += 1;
        if private {
            self.private_repos += 1;
        } else {
            self.public_repos += 1;
        }
    }

    /// Adds a repository's language byte counts.
    pub fn record_languages(&mut self, languages: &BTreeMap<String, u64>) {
        for (language, bytes) in languages {
            self.languages.add(language, *bytes);
            self.total_bytes += bytes;
        }
    }

    /// Adds one repository's detection result.
    ///
    /// A [`Detection`] holds each category at most once, so every category
    /// increments by at most one per repository.
    pub fn record_detection(&mut self, detection: &Detection) {
        for platform in &detection.platforms {
            self.platforms.add(platform, 1);
        }
        for database in &detection.databases {
            self.databases.add(database, 1);
        }
    }

    /// Merges a repository's month histogram.
    pub fn record_activity(&mut self, histogram: &MonthHistogram) {
        crate::activity::merge_histogram(&mut self.activities, histogram);
    }

    /// Folds another aggregate into this one.
    ///
    /// All fields are sums, so merge order does not matter.
    pub fn merge(&mut self, other: &RepoStats) {
        self.total_repos += other.total_repos;
        self.public_repos += other.public_repos;
        self.private_repos += other.private_repos;
        for (language, bytes) in other.languages.iter() {
            self.languages.add(language, bytes);
        }
        self.total_bytes += other.total_bytes;
        for (platform, count) in other.platforms.iter() {
            self.platforms.add(platform, count);
        }
        for (database, count) in other.databases.iter() {
            self.databases.add(database, count);
        }
        crate::activity::merge_histogram(&mut self.activities, &other.activities);
    }

    #[must_use]
    pub fn total_repos(&self) -> u64 {
        self.total_repos
    }

    #[must_use]
    pub fn public_repos(&self) -> u64 {
        self.public_repos
    }

    #[must_use]
    pub fn private_repos(&self) -> u64 {
        self.private_repos
    }

    /// Cumulative bytes per language.
    #[must_use]
    pub fn languages(&self) -> &Tally {
        &self.languages
    }

    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Repository count per detected platform/framework.
    #[must_use]
    pub fn platforms(&self) -> &Tally {
        &self.platforms
    }

    /// Repository count per detected database.
    #[must_use]
    pub fn databases(&self) -> &Tally {
        &self.databases
    }

    /// Commit count per `YYYY-MM` month.
    #[must_use]
    pub fn activities(&self) -> &MonthHistogram {
        &self.activities
    }
}
