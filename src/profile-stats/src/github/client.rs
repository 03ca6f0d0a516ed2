//! Octocrab-backed [`ProfileSource`].

use super::{CommitRecord, ProfileSource, RepositorySummary, SourceError, WeeklyActivity};
use crate::rate_limit::ensure_core_rate_limit;
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Repository listing entry as returned by `GET /user/repos`.
#[derive(Debug, Deserialize)]
struct RepositoryListing {
    name: String,
    owner: Owner,
    #[serde(default)]
    private: bool,
}

#[derive(Debug, Deserialize)]
struct Owner {
    login: String,
}

impl From<RepositoryListing> for RepositorySummary {
    fn from(listing: RepositoryListing) -> Self {
        RepositorySummary::new(listing.owner.login, listing.name, listing.private)
    }
}

/// Query parameters for repository listing.
#[derive(Debug, Serialize)]
struct ListParams<'a> {
    affiliation: &'a str,
    per_page: u8,
    page: u32,
}

/// Query parameters for commit listing.
#[derive(Debug, Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

/// GitHub API client authenticated with a personal access token.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    affiliation: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("affiliation", &self.affiliation)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Builds a client from a personal access token.
    ///
    /// `affiliation` is passed through to the repository listing
    /// (e.g. `owner,collaborator,organization_member`).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(token: &str, affiliation: impl Into<String>) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self {
            octocrab,
            affiliation: affiliation.into(),
        })
    }

    fn repo_route(repository: &RepositorySummary, suffix: &str) -> String {
        format!("/repos/{}/{}/{suffix}", repository.owner, repository.name)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn login(&self) -> Result<String, SourceError> {
        let user = self.octocrab.current().user().await?;
        Ok(user.login)
    }

    async fn list_repositories(
        &self,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, SourceError> {
        let params = ListParams {
            affiliation: &self.affiliation,
            per_page,
            page,
        };
        let listings: Vec<RepositoryListing> =
            self.octocrab.get("/user/repos", Some(&params)).await?;
        Ok(listings.into_iter().map(RepositorySummary::from).collect())
    }

    async fn languages(
        &self,
        repository: &RepositorySummary,
    ) -> Result<BTreeMap<String, u64>, SourceError> {
        let route = Self::repo_route(repository, "languages");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    async fn file_content(
        &self,
        repository: &RepositorySummary,
        path: &str,
    ) -> Result<Option<String>, SourceError> {
        let result = self
            .octocrab
            .repos(&repository.owner, &repository.name)
            .get_content()
            .path(path)
            .send()
            .await;

        let items = match result {
            Ok(items) => items,
            Err(e) => {
                let error = SourceError::from(e);
                if error.is_not_found() {
                    debug!(repo = %repository.full_name, path, "Manifest not present");
                    return Ok(None);
                }
                return Err(error);
            }
        };

        // A directory listing has no decodable content and counts as absent.
        Ok(items.items.iter().find_map(|item| item.decoded_content()))
    }

    async fn weekly_commit_activity(
        &self,
        repository: &RepositorySummary,
    ) -> Result<Vec<WeeklyActivity>, SourceError> {
        let route = Self::repo_route(repository, "stats/commit_activity");
        let value: serde_json::Value = self.octocrab.get(&route, None::<&()>).await?;
        decode_commit_activity(&route, value)
    }

    async fn commits(
        &self,
        repository: &RepositorySummary,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<CommitRecord>, SourceError> {
        let route = Self::repo_route(repository, "commits");
        let params = PageParams { per_page, page };
        Ok(self.octocrab.get(route, Some(&params)).await?)
    }

    async fn throttle(&self) -> Result<(), SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        Ok(())
    }
}

/// Decodes the commit-activity payload.
///
/// While statistics are being computed GitHub answers `202 Accepted` with an
/// empty object instead of an array.
fn decode_commit_activity(
    route: &str,
    value: serde_json::Value,
) -> Result<Vec<WeeklyActivity>, SourceError> {
    if !value.is_array() {
        return Err(SourceError::Pending {
            resource: route.to_string(),
        });
    }
    serde_json::from_value(value).map_err(|e| SourceError::Decode {
        path: route.to_string(),
        message: e.to_string(),
    })
}
