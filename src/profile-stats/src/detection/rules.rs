//! The rule set and its built-in defaults.

use super::{ContentPredicate, DetectionRule};

const NODE_MANIFESTS: &[&str] = &["package.json"];
const PYTHON_MANIFESTS: &[&str] = &["requirements.txt", "Pipfile"];
const DATABASE_EVIDENCE: &[&str] = &[
    "docker-compose.yml",
    "docker-compose.yaml",
    "package.json",
    "composer.json",
    "requirements.txt",
];

/// Platform and database rules evaluated against every repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRules {
    /// Frameworks and platforms.
    pub platforms: Vec<DetectionRule>,

    /// Databases.
    pub databases: Vec<DetectionRule>,
}

impl Default for DetectionRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DetectionRules {
    /// The built-in rule set.
    ///
    /// Laravel falls back to MySQL and Django to SQLite, the databases each
    /// framework's starter configuration uses.
    #[must_use]
    pub fn builtin() -> Self {
        use ContentPredicate::{Contains, Dependency, Exists};

        let dep = |name: &str| Dependency(name.to_string());
        let text = |pattern: &str| Contains(pattern.to_string());

        let platforms = vec![
            DetectionRule::new("Laravel", &["composer.json"], dep("laravel/framework"))
                .with_fallback_database("MySQL"),
            DetectionRule::new("Node.js", NODE_MANIFESTS, Exists),
            DetectionRule::new("Next.js", NODE_MANIFESTS, dep("next")),
            DetectionRule::new("Vue.js", NODE_MANIFESTS, dep("vue")),
            DetectionRule::new("React", NODE_MANIFESTS, dep("react")),
            DetectionRule::new("Angular", NODE_MANIFESTS, dep("@angular/core")),
            DetectionRule::new("Express", NODE_MANIFESTS, dep("express")),
            DetectionRule::new("NestJS", NODE_MANIFESTS, dep("@nestjs/core")),
            DetectionRule::new("Django", PYTHON_MANIFESTS, text("Django"))
                .with_fallback_database("SQLite"),
            DetectionRule::new("Flask", PYTHON_MANIFESTS, text("Flask")),
            DetectionRule::new("FastAPI", PYTHON_MANIFESTS, text("fastapi")),
            DetectionRule::new(
                "Spring Boot",
                &["pom.xml", "build.gradle", "build.gradle.kts"],
                text("spring-boot"),
            ),
        ];

        let databases = vec![
            DetectionRule::new("MySQL", DATABASE_EVIDENCE, text("mysql")),
            DetectionRule::new("PostgreSQL", DATABASE_EVIDENCE, text("postgres")),
            DetectionRule::new("MongoDB", DATABASE_EVIDENCE, text("mongo")),
            DetectionRule::new("Redis", DATABASE_EVIDENCE, text("redis")),
            DetectionRule::new("SQLite", DATABASE_EVIDENCE, text("sqlite")),
        ];

        Self {
            platforms,
            databases,
        }
    }

    /// Every distinct candidate file across all rules, in first-mention order.
    #[must_use]
    pub fn candidate_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for rule in self.platforms.iter().chain(&self.databases) {
            for file in &rule.files {
                if !files.contains(&file.as_str()) {
                    files.push(file);
                }
            }
        }
        files
    }
}
