//! Consistency checks for loaded settings.

use super::{ConfigError, ProfileConfig};
use crate::detection::DetectionRule;

/// Checks ranges and cross-references. `path` labels the error.
pub(crate) fn validate(config: &ProfileConfig, path: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        path: path.to_string(),
        message,
    };

    if config.start_marker.trim().is_empty() || config.end_marker.trim().is_empty() {
        return Err(invalid("start-marker and end-marker must not be empty".into()));
    }
    if config.start_marker == config.end_marker {
        return Err(invalid("start-marker and end-marker must be different".into()));
    }
    if config.top_languages == 0 {
        return Err(invalid("top-languages must be at least 1".into()));
    }

    let dimensions = [
        ("chart-width", config.chart_width),
        ("chart-height", config.chart_height),
        ("activity-width", config.activity_width),
        ("activity-height", config.activity_height),
    ];
    if let Some((key, _)) = dimensions.iter().find(|(_, value)| *value == 0) {
        return Err(invalid(format!("{key} must be positive")));
    }

    if config.palette.is_empty() {
        return Err(invalid("palette must not be empty".into()));
    }
    if let Some(color) = config.palette.iter().find(|c| !is_hex_color(c)) {
        return Err(invalid(format!("palette colour '{color}' is not #rrggbb")));
    }

    let rules = config.detection_rules();
    for rule in rules.platforms.iter().chain(&rules.databases) {
        validate_rule(rule).map_err(invalid)?;
    }
    for rule in &rules.platforms {
        if let Some(fallback) = &rule.fallback_database {
            if !rules.databases.iter().any(|db| &db.name == fallback) {
                return Err(invalid(format!(
                    "rule '{}' falls back to unknown database '{fallback}'",
                    rule.name
                )));
            }
        }
    }

    Ok(())
}

fn validate_rule(rule: &DetectionRule) -> Result<(), String> {
    if rule.name.trim().is_empty() {
        return Err("detection rule name must not be empty".to_string());
    }
    if rule.files.iter().all(|f| f.trim().is_empty()) {
        return Err(format!("rule '{}' has no candidate files", rule.name));
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
