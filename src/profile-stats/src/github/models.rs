//! Minimal GitHub wire models with only the fields the profile needs.

use serde::{Deserialize, Serialize};

/// A repository visible to the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Whether the repository is private.
    pub private: bool,
}

impl RepositorySummary {
    /// Creates a summary, deriving the full name from owner and name.
    pub fn new(owner: impl Into<String>, name: impl Into<String>, private: bool) -> Self {
        let owner = owner.into();
        let name = name.into();
        let full_name = format!("{owner}/{name}");
        Self {
            owner,
            name,
            full_name,
            private,
        }
    }
}

/// One week of the commit-activity summary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeeklyActivity {
    /// Unix timestamp (seconds, UTC) of the start of the week.
    pub week: i64,

    /// Total commits in the week.
    pub total: u64,

    /// Per-day commit counts, Sunday first.
    #[serde(default)]
    pub days: Vec<u64>,
}

/// A commit from the full commit listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRecord {
    /// Git-level commit data.
    pub commit: CommitDetail,
}

/// Git-level commit data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub author: Option<Signature>,
    #[serde(default)]
    pub committer: Option<Signature>,
}

/// Author or committer signature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Signature {
    /// ISO 8601 timestamp as sent by the API.
    #[serde(default)]
    pub date: Option<String>,
}

impl CommitRecord {
    /// Builds a record from raw author/committer dates.
    pub fn new(authored: Option<&str>, committed: Option<&str>) -> Self {
        let signature = |date: Option<&str>| {
            date.map(|d| Signature {
                date: Some(d.to_string()),
            })
        };
        Self {
            commit: CommitDetail {
                author: signature(authored),
                committer: signature(committed),
            },
        }
    }

    /// Returns the authored date, falling back to the committer date.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        let authored = self.commit.author.as_ref().and_then(|s| s.date.as_deref());
        authored.or_else(|| {
            self.commit
                .committer
                .as_ref()
                .and_then(|s| s.date.as_deref())
        })
    }
}
