//! Boundary to the source-hosting platform.
//!
//! Everything the profile pipeline needs from GitHub goes through the
//! [`ProfileSource`] trait. [`GitHubClient`] is the real implementation;
//! tests substitute an in-memory source.

mod client;
mod error;
mod models;

pub use client::GitHubClient;
pub use error::SourceError;
pub use models::{CommitDetail, CommitRecord, RepositorySummary, Signature, WeeklyActivity};

use async_trait::async_trait;
use std::collections::BTreeMap;

/// Data-fetching operations used by the profile pipeline.
///
/// Every call is single-attempt. Callers decide how a failure degrades.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Returns the login of the authenticated account.
    async fn login(&self) -> Result<String, SourceError>;

    /// Returns one page (1-based) of repositories visible to the account.
    async fn list_repositories(
        &self,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, SourceError>;

    /// Returns language name to byte count for a repository.
    async fn languages(
        &self,
        repository: &RepositorySummary,
    ) -> Result<BTreeMap<String, u64>, SourceError>;

    /// Returns the text content of a file, or `None` when it does not exist.
    async fn file_content(
        &self,
        repository: &RepositorySummary,
        path: &str,
    ) -> Result<Option<String>, SourceError>;

    /// Returns weekly commit totals for roughly the trailing year.
    ///
    /// Fails with [`SourceError::Pending`] while the remote is still computing.
    async fn weekly_commit_activity(
        &self,
        repository: &RepositorySummary,
    ) -> Result<Vec<WeeklyActivity>, SourceError>;

    /// Returns one page (1-based) of the full commit history.
    async fn commits(
        &self,
        repository: &RepositorySummary,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<CommitRecord>, SourceError>;

    /// Waits if the remote rate limit is nearly exhausted.
    async fn throttle(&self) -> Result<(), SourceError> {
        Ok(())
    }
}
