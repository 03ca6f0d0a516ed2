//! In-memory stand-in for GitHub used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use profile_stats::{CommitRecord, ProfileSource, RepositorySummary, SourceError, WeeklyActivity};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

/// What the weekly summary endpoint answers for a repository.
#[derive(Debug, Clone)]
pub enum Weekly {
    Weeks(Vec<WeeklyActivity>),
    Pending,
    Failing,
}

#[derive(Debug, Default)]
pub struct FakeSource {
    login: String,
    repositories: Vec<RepositorySummary>,
    languages: HashMap<String, BTreeMap<String, u64>>,
    failing_languages: HashSet<String>,
    files: HashMap<(String, String), String>,
    weekly: HashMap<String, Weekly>,
    commits: HashMap<String, Vec<CommitRecord>>,
    failing_commit_pages: HashMap<String, u32>,
    file_requests: Mutex<Vec<(String, String)>>,
    commit_requests: Mutex<Vec<(String, u32)>>,
}

impl FakeSource {
    pub fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
            ..Self::default()
        }
    }

    pub fn with_repository(mut self, owner: &str, name: &str, private: bool) -> Self {
        self.repositories
            .push(RepositorySummary::new(owner, name, private));
        self
    }

    pub fn with_languages(mut self, full_name: &str, languages: &[(&str, u64)]) -> Self {
        self.languages.insert(
            full_name.to_string(),
            languages
                .iter()
                .map(|(name, bytes)| (name.to_string(), *bytes))
                .collect(),
        );
        self
    }

    pub fn failing_languages(mut self, full_name: &str) -> Self {
        self.failing_languages.insert(full_name.to_string());
        self
    }

    pub fn with_file(mut self, full_name: &str, path: &str, content: &str) -> Self {
        self.files
            .insert((full_name.to_string(), path.to_string()), content.to_string());
        self
    }

    pub fn with_weekly(mut self, full_name: &str, weekly: Weekly) -> Self {
        self.weekly.insert(full_name.to_string(), weekly);
        self
    }

    pub fn with_commits(mut self, full_name: &str, commits: Vec<CommitRecord>) -> Self {
        self.commits.insert(full_name.to_string(), commits);
        self
    }

    /// Makes every commit page from `page` onwards fail.
    pub fn failing_commits_from(mut self, full_name: &str, page: u32) -> Self {
        self.failing_commit_pages
            .insert(full_name.to_string(), page);
        self
    }

    /// Number of times `path` was requested for `full_name`.
    pub fn file_requests(&self, full_name: &str, path: &str) -> usize {
        self.file_requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(repo, p)| repo == full_name && p == path)
            .count()
    }

    /// Commit pages requested for `full_name`, in order.
    pub fn commit_pages(&self, full_name: &str) -> Vec<u32> {
        self.commit_requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(repo, _)| repo == full_name)
            .map(|(_, page)| *page)
            .collect()
    }

    pub fn repository(&self, full_name: &str) -> RepositorySummary {
        self.repositories
            .iter()
            .find(|r| r.full_name == full_name)
            .cloned()
            .unwrap()
    }
}

fn failure(path: &str) -> SourceError {
    SourceError::Decode {
        path: path.to_string(),
        message: "simulated failure".to_string(),
    }
}

fn page_of<T: Clone>(items: &[T], page: u32, per_page: u8) -> Vec<T> {
    let per_page = usize::from(per_page);
    let start = (page.saturating_sub(1) as usize) * per_page;
    items.iter().skip(start).take(per_page).cloned().collect()
}

#[async_trait]
impl ProfileSource for FakeSource {
    async fn login(&self) -> Result<String, SourceError> {
        Ok(self.login.clone())
    }

    async fn list_repositories(
        &self,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, SourceError> {
        Ok(page_of(&self.repositories, page, per_page))
    }

    async fn languages(
        &self,
        repository: &RepositorySummary,
    ) -> Result<BTreeMap<String, u64>, SourceError> {
        if self.failing_languages.contains(&repository.full_name) {
            return Err(failure("languages"));
        }
        Ok(self
            .languages
            .get(&repository.full_name)
            .cloned()
            .unwrap_or_default())
    }

    async fn file_content(
        &self,
        repository: &RepositorySummary,
        path: &str,
    ) -> Result<Option<String>, SourceError> {
        self.file_requests
            .lock()
            .unwrap()
            .push((repository.full_name.clone(), path.to_string()));
        Ok(self
            .files
            .get(&(repository.full_name.clone(), path.to_string()))
            .cloned())
    }

    async fn weekly_commit_activity(
        &self,
        repository: &RepositorySummary,
    ) -> Result<Vec<WeeklyActivity>, SourceError> {
        match self.weekly.get(&repository.full_name) {
            Some(Weekly::Weeks(weeks)) => Ok(weeks.clone()),
            Some(Weekly::Pending) => Err(SourceError::Pending {
                resource: repository.full_name.clone(),
            }),
            Some(Weekly::Failing) => Err(failure("stats/commit_activity")),
            None => Ok(Vec::new()),
        }
    }

    async fn commits(
        &self,
        repository: &RepositorySummary,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<CommitRecord>, SourceError> {
        self.commit_requests
            .lock()
            .unwrap()
            .push((repository.full_name.clone(), page));
        if self
            .failing_commit_pages
            .get(&repository.full_name)
            .is_some_and(|from| page >= *from)
        {
            return Err(failure("commits"));
        }
        let commits = self
            .commits
            .get(&repository.full_name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(page_of(commits, page, per_page))
    }
}

/// A week starting at the given UTC date.
pub fn week(year: i32, month: u32, day: u32, total: u64) -> WeeklyActivity {
    use chrono::TimeZone;
    let start = chrono::Utc
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap();
    WeeklyActivity {
        week: start.timestamp(),
        total,
        days: Vec::new(),
    }
}

/// `count` commits authored at `date`.
pub fn commits_at(date: &str, count: usize) -> Vec<CommitRecord> {
    (0..count).map(|_| CommitRecord::new(Some(date), None)).collect()
}
