//! Settings deserialized from `profile-stats.toml`.

use crate::activity::ActivityOptions;
use crate::charts::{default_palette, ChartSize};
use crate::detection::{DetectionRule, DetectionRules};
use crate::report::{asset_prefix, Markers, ReportOptions};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Every tunable of a run. All keys are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProfileConfig {
    /// Markdown document holding the generated section.
    pub readme_path: PathBuf,

    /// Directory the SVG charts are written to.
    pub assets_dir: PathBuf,

    pub start_marker: String,
    pub end_marker: String,

    /// How many languages enter the donut chart.
    pub top_languages: usize,

    /// Value of the `affiliation` query of the repository listing.
    pub affiliation: String,

    /// Pause between commit pages while scanning history.
    pub commit_page_delay_ms: u64,

    pub chart_width: u32,
    pub chart_height: u32,
    pub activity_width: u32,
    pub activity_height: u32,

    /// `#rrggbb` colours cycled across categories.
    pub palette: Vec<String>,

    /// Replaces the built-in platform rules when present.
    #[serde(rename = "platform")]
    pub platform_rules: Option<Vec<DetectionRule>>,

    /// Replaces the built-in database rules when present.
    #[serde(rename = "database")]
    pub database_rules: Option<Vec<DetectionRule>>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let markers = Markers::default();
        Self {
            readme_path: PathBuf::from("README.md"),
            assets_dir: PathBuf::from("assets"),
            start_marker: markers.start,
            end_marker: markers.end,
            top_languages: 10,
            affiliation: "owner,collaborator,organization_member".to_string(),
            commit_page_delay_ms: 100,
            chart_width: 500,
            chart_height: 300,
            activity_width: 800,
            activity_height: 300,
            palette: default_palette(),
            platform_rules: None,
            database_rules: None,
        }
    }
}

impl ProfileConfig {
    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers {
            start: self.start_marker.clone(),
            end: self.end_marker.clone(),
        }
    }

    /// Built-in rules with configured categories swapped in.
    #[must_use]
    pub fn detection_rules(&self) -> DetectionRules {
        let mut rules = DetectionRules::builtin();
        if let Some(platforms) = &self.platform_rules {
            rules.platforms = platforms.clone();
        }
        if let Some(databases) = &self.database_rules {
            rules.databases = databases.clone();
        }
        rules
    }

    #[must_use]
    pub fn activity_options(&self) -> ActivityOptions {
        ActivityOptions {
            page_delay: Duration::from_millis(self.commit_page_delay_ms),
            ..ActivityOptions::default()
        }
    }

    /// Chart presentation, with image links relative to the document.
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            top_languages: self.top_languages,
            chart_size: ChartSize::new(self.chart_width, self.chart_height),
            activity_size: ChartSize::new(self.activity_width, self.activity_height),
            palette: self.palette.clone(),
            asset_prefix: asset_prefix(&self.readme_path, &self.assets_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_partial_config() {
        let config: ProfileConfig = toml::from_str(
            r#"
readme-path = "profile/README.md"
top-languages = 5
commit-page-delay-ms = 0
"#,
        )
        .unwrap();

        assert_eq!(config.readme_path, PathBuf::from("profile/README.md"));
        assert_eq!(config.top_languages, 5);
        assert_eq!(config.activity_options().page_delay, Duration::ZERO);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.chart_width, 500);
        assert_eq!(config.palette.len(), 20);
    }

    #[test]
    fn rule_arrays_replace_their_category_only() {
        let config: ProfileConfig = toml::from_str(
            r#"
[[platform]]
name = "Rust"
files = ["Cargo.toml"]
matches = "exists"
"#,
        )
        .unwrap();

        let rules = config.detection_rules();
        assert_eq!(rules.platforms.len(), 1);
        assert_eq!(rules.platforms[0].name, "Rust");
        assert_eq!(rules.databases, DetectionRules::builtin().databases);
    }

    #[test]
    fn report_links_follow_document_location() {
        let config = ProfileConfig {
            readme_path: PathBuf::from("profile/README.md"),
            assets_dir: PathBuf::from("profile/charts"),
            ..ProfileConfig::default()
        };
        assert_eq!(config.report_options().asset_prefix, "charts");
    }
}
