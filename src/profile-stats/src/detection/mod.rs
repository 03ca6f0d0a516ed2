//! Technology detection from manifest files.
//!
//! Rules are data ([`DetectionRules`]); evaluation is a pure function over
//! the manifests fetched for a repository. For each rule the candidate files
//! are tried in order and the first match wins.

mod manifests;
mod rule;
mod rules;

pub use manifests::Manifests;
pub use rule::{ContentPredicate, DetectionRule};
pub use rules::DetectionRules;

use crate::github::{ProfileSource, RepositorySummary};
use tracing::debug;

/// Result of evaluating one rule against one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionOutcome {
    /// No candidate file carried the evidence.
    NotFound,

    /// The named file carried the evidence.
    Found { file: String },
}

/// Categories detected in one repository. Each name appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Detected platforms/frameworks.
    pub platforms: Vec<String>,

    /// Detected or attributed databases.
    pub databases: Vec<String>,
}

impl Detection {
    /// Returns true if nothing was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty() && self.databases.is_empty()
    }
}

/// Evaluates a rule's candidate files in order; the first match wins.
#[must_use]
pub fn evaluate_rule(rule: &DetectionRule, manifests: &Manifests) -> DetectionOutcome {
    rule.files
        .iter()
        .find(|file| {
            manifests
                .content(file)
                .is_some_and(|content| rule.matches.matches(content))
        })
        .map_or(DetectionOutcome::NotFound, |file| DetectionOutcome::Found {
            file: file.clone(),
        })
}

/// Classifies a repository from its manifests.
///
/// When no database rule matches, each matched platform's
/// `fallback_database` is attributed instead.
#[must_use]
pub fn detect(rules: &DetectionRules, manifests: &Manifests) -> Detection {
    let mut detection = Detection::default();
    let mut fallbacks: Vec<&str> = Vec::new();

    for rule in &rules.platforms {
        if let DetectionOutcome::Found { file } = evaluate_rule(rule, manifests) {
            debug!(platform = %rule.name, file, "Detected platform");
            push_unique(&mut detection.platforms, &rule.name);
            if let Some(database) = &rule.fallback_database {
                fallbacks.push(database);
            }
        }
    }

    for rule in &rules.databases {
        if let DetectionOutcome::Found { file } = evaluate_rule(rule, manifests) {
            debug!(database = %rule.name, file, "Detected database");
            push_unique(&mut detection.databases, &rule.name);
        }
    }

    if detection.databases.is_empty() {
        for database in fallbacks {
            debug!(database, "Attributing fallback database");
            push_unique(&mut detection.databases, database);
        }
    }

    detection
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

/// Fetches every candidate manifest once and classifies the repository.
pub async fn detect_repository(
    source: &dyn ProfileSource,
    repository: &RepositorySummary,
    rules: &DetectionRules,
) -> (Detection, Manifests) {
    let manifests = Manifests::fetch(source, repository, &rules.candidate_files()).await;
    (detect(rules, &manifests), manifests)
}
