//! Manifest contents fetched for one repository.

use crate::github::{ProfileSource, RepositorySummary};
use std::collections::BTreeMap;
use tracing::warn;

/// File path to content for one repository; absent files map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifests {
    files: BTreeMap<String, Option<String>>,
    failures: usize,
}

impl Manifests {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file's content (or its absence).
    pub fn insert(&mut self, path: &str, content: Option<String>) {
        self.files.insert(path.to_string(), content);
    }

    /// Builder-style [`insert`](Self::insert) of a present file.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.insert(path, Some(content.to_string()));
        self
    }

    /// Returns the content of `path` if it was found.
    #[must_use]
    pub fn content(&self, path: &str) -> Option<&str> {
        self.files.get(path).and_then(Option::as_deref)
    }

    /// Number of fetches that failed for reasons other than absence.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Fetches each path once. Failed fetches are logged and count as absent.
    pub async fn fetch(
        source: &dyn ProfileSource,
        repository: &RepositorySummary,
        paths: &[&str],
    ) -> Self {
        let mut manifests = Self::new();
        for path in paths {
            match source.file_content(repository, path).await {
                Ok(content) => manifests.insert(path, content),
                Err(e) => {
                    warn!(path, error = %e, "Failed to fetch manifest");
                    manifests.failures += 1;
                    manifests.insert(path, None);
                }
            }
        }
        manifests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_unknown_files_have_no_content() {
        let mut manifests = Manifests::new().with_file("package.json", "{}");
        manifests.insert("composer.json", None);

        assert_eq!(manifests.content("package.json"), Some("{}"));
        assert_eq!(manifests.content("composer.json"), None);
        assert_eq!(manifests.content("pom.xml"), None);
        assert_eq!(manifests.failures(), 0);
    }
}
