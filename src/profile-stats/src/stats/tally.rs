//! Insertion-ordered counter.

/// Counts keyed by name, iterated in first-insertion order.
///
/// Ranking ties resolve by that order, so a run over the same repositories
/// in the same order always produces the same charts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, u64)>,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `key`, inserting it if absent.
    pub fn add(&mut self, key: &str, amount: u64) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += amount,
            None => self.entries.push((key.to_string(), amount)),
        }
    }

    /// Returns the count for `key`, or 0.
    #[must_use]
    pub fn get(&self, key: &str) -> u64 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, count)| *count)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    /// Entries sorted by count descending; equal counts keep insertion order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
