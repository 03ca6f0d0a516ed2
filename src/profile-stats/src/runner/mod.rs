//! Orchestrates a statistics run: collect, render, write.

mod config;
mod error;

pub use config::{resolve_token, RunnerConfig};
pub use error::RunnerError;

use crate::activity::{collect_activity, ActivityOptions};
use crate::detection::{detect_repository, DetectionRules};
use crate::github::{GitHubClient, ProfileSource, RepositorySummary};
use crate::report::{build_report, read_document, write_charts, write_document, Report};
use crate::stats::RepoStats;
use crate::summary::{ProcessingResult, RunSummary};
use chrono::{DateTime, Utc};
use tracing::{debug, info, info_span, warn, Instrument};

/// Environment variable holding the token when no flag is given.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Repositories requested per listing page.
pub const REPOSITORY_PAGE_SIZE: u8 = 100;

/// Orchestrates a full statistics run.
pub struct Runner {
    config: RunnerConfig,
    source: Box<dyn ProfileSource>,
}

impl Runner {
    /// Builds a runner talking to GitHub with the configured token.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::new(config.token(), config.profile().affiliation.clone())?;
        Ok(Self::with_source(config, Box::new(client)))
    }

    /// Builds a runner over any data source.
    pub fn with_source(config: RunnerConfig, source: Box<dyn ProfileSource>) -> Self {
        Self { config, source }
    }

    /// Executes the full flow.
    ///
    /// Per-repository failures are logged and degrade that repository's
    /// contribution; only setup, listing and file IO errors are returned.
    /// The document is read before any request is made, so an unreadable
    /// document aborts the run without touching the assets directory.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let profile = self.config.profile();

        let document = if self.config.dry_run() {
            None
        } else {
            Some(read_document(&profile.readme_path)?)
        };

        let login = self.source.login().await?;
        info!(login = %login, "Authenticated");

        let (stats, results) = self.collect_stats().await?;
        for result in &results {
            summary.record_result(result);
        }
        summary.record_stats(&stats);

        let report = build_report(&stats, &profile.report_options(), &timestamp(Utc::now()))?;

        let Some(document) = document else {
            print_dry_run_preview(&report, profile);
            return Ok(summary);
        };

        let written = write_charts(&profile.assets_dir, &report.charts)?;
        summary.charts_written = written.len();
        info!(
            count = written.len(),
            dir = %profile.assets_dir.display(),
            "Wrote charts"
        );

        summary.document_updated = write_document(
            &profile.readme_path,
            &document,
            &report.markdown,
            &profile.markers(),
        )?;
        info!(
            path = %profile.readme_path.display(),
            changed = summary.document_updated,
            "Updated document"
        );

        Ok(summary)
    }

    /// Lists every repository and aggregates their statistics in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Source`] if the repository listing fails.
    pub async fn collect_stats(&self) -> Result<(RepoStats, Vec<ProcessingResult>), RunnerError> {
        let repositories = list_all_repositories(&*self.source).await?;
        info!(count = repositories.len(), "Found repositories");

        let profile = self.config.profile();
        let rules = profile.detection_rules();
        let activity = profile.activity_options();

        let mut stats = RepoStats::new();
        let mut results = Vec::with_capacity(repositories.len());
        for (index, repository) in repositories.iter().enumerate() {
            let span = info_span!(
                "repository",
                repo = %repository.full_name,
                index = index + 1,
                total = repositories.len()
            );
            let (contribution, result) =
                process_repository(&*self.source, repository, &rules, &activity)
                    .instrument(span)
                    .await;
            stats.merge(&contribution);
            results.push(result);
        }

        Ok((stats, results))
    }
}

/// Pages through the listing until a short page.
async fn list_all_repositories(
    source: &dyn ProfileSource,
) -> Result<Vec<RepositorySummary>, RunnerError> {
    let mut repositories = Vec::new();
    let mut page = 1;
    loop {
        let batch = source.list_repositories(page, REPOSITORY_PAGE_SIZE).await?;
        let fetched = batch.len();
        repositories.extend(batch);
        debug!(page, fetched, "Listed repositories");
        if fetched < usize::from(REPOSITORY_PAGE_SIZE) {
            break;
        }
        page += 1;
    }
    Ok(repositories)
}

/// Gathers one repository's contribution. Never fails.
async fn process_repository(
    source: &dyn ProfileSource,
    repository: &RepositorySummary,
    rules: &DetectionRules,
    activity: &ActivityOptions,
) -> (RepoStats, ProcessingResult) {
    info!("Processing repository");

    if let Err(e) = source.throttle().await {
        warn!(error = %e, "Rate limit check failed");
    }

    let mut stats = RepoStats::new();
    stats.record_repository(repository.private);

    let languages_ok = match source.languages(repository).await {
        Ok(languages) => {
            stats.record_languages(&languages);
            true
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch languages");
            false
        }
    };

    let (detection, manifests) = detect_repository(source, repository, rules).await;
    stats.record_detection(&detection);

    let outcome = collect_activity(source, repository, activity).await;
    if let Some(histogram) = outcome.histogram() {
        stats.record_activity(histogram);
    }

    debug!(
        platforms = ?detection.platforms,
        databases = ?detection.databases,
        activity = ?outcome.strategy(),
        "Processed repository"
    );

    let result = ProcessingResult {
        repository: repository.full_name.clone(),
        languages_ok,
        manifest_failures: manifests.failures(),
        activity: outcome.strategy(),
    };
    (stats, result)
}

/// Footer timestamp, e.g. `Sat, 17 Oct 2026 09:30:00 UTC`.
#[must_use]
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S UTC").to_string()
}

fn print_dry_run_preview(report: &Report, profile: &crate::config::ProfileConfig) {
    println!("\n[DRY RUN] Would update: {}", profile.readme_path.display());
    for chart in &report.charts {
        println!(
            "  Would write: {}",
            profile.assets_dir.join(chart.kind.file_name()).display()
        );
    }
    println!("\n{}", profile.start_marker);
    println!("{}", report.markdown);
    println!("{}\n", profile.end_marker);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        assert_eq!(timestamp(now), "Sat, 17 Oct 2026 09:30:00 UTC");
    }
}
