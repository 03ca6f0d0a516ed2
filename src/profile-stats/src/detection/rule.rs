//! Declarative detection rules.

use serde::Deserialize;

/// Manifest sections that list dependencies by name.
const DEPENDENCY_SECTIONS: [&str; 5] = [
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "require",
    "require-dev",
];

/// Evidence a manifest must contain for a rule to match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentPredicate {
    /// Case-sensitive substring anywhere in the file.
    Contains(String),

    /// Named key in a dependency section of a JSON manifest
    /// (`package.json`, `composer.json`).
    Dependency(String),

    /// The file exists.
    Exists,
}

impl ContentPredicate {
    /// Tests the predicate against one file's content.
    ///
    /// Content that fails to parse is no evidence.
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        match self {
            Self::Contains(pattern) => content.contains(pattern.as_str()),
            Self::Dependency(name) => has_dependency(content, name),
            Self::Exists => true,
        }
    }
}

fn has_dependency(content: &str, name: &str) -> bool {
    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(content) else {
        return false;
    };
    DEPENDENCY_SECTIONS.iter().any(|section| {
        manifest
            .get(section)
            .and_then(serde_json::Value::as_object)
            .is_some_and(|deps| deps.contains_key(name))
    })
}

/// One category and how to recognise it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DetectionRule {
    /// Category name shown in the report.
    pub name: String,

    /// Candidate manifest paths, tried in order.
    pub files: Vec<String>,

    /// Evidence required in a candidate file.
    pub matches: ContentPredicate,

    /// Database attributed when this rule matches and no database rule
    /// matched anywhere in the repository.
    #[serde(default)]
    pub fallback_database: Option<String>,
}

impl DetectionRule {
    /// Creates a rule without a fallback.
    pub fn new(name: &str, files: &[&str], matches: ContentPredicate) -> Self {
        Self {
            name: name.to_string(),
            files: files.iter().map(|f| (*f).to_string()).collect(),
            matches,
            fallback_database: None,
        }
    }

    /// Sets the fallback database.
    #[must_use]
    pub fn with_fallback_database(mut self, database: &str) -> Self {
        self.fallback_database = Some(database.to_string());
        self
    }
}
