#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod activity;
pub mod charts;
pub mod config;
pub mod detection;
pub mod github;
pub mod rate_limit;
pub mod report;
pub mod runner;
pub mod stats;
pub mod summary;

pub use activity::{collect_activity, ActivityOptions, ActivityOutcome, ActivityStrategy, MonthHistogram};
pub use charts::{render_bar, render_donut, ChartDatum, ChartSize};
pub use config::{load_config, parse_config, ConfigError, ProfileConfig, DEFAULT_CONFIG_FILE};
pub use detection::{detect, detect_repository, Detection, DetectionRule, DetectionRules};
pub use github::{
    CommitRecord, GitHubClient, ProfileSource, RepositorySummary, SourceError, WeeklyActivity,
};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use report::{
    build_report, read_document, splice_section, update_document, write_charts, write_document,
    ChartKind, Markers, Report, ReportError, ReportOptions,
};
pub use runner::{resolve_token, Runner, RunnerConfig, RunnerError, TOKEN_ENV};
pub use stats::{language_percentages, LanguageShare, RepoStats, Tally};
pub use summary::{ProcessingResult, RunSummary};
