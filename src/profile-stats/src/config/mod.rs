//! Configuration loading.
//!
//! Settings come from an optional `profile-stats.toml`; every key has a
//! default, so running without a file is the common case.

mod error;
mod settings;
mod validate;

pub use error::ConfigError;
pub use settings::ProfileConfig;

use std::path::Path;
use tracing::{debug, info};

/// File read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "profile-stats.toml";

/// Loads and validates the configuration.
///
/// With `path` set, the file must exist. Without it,
/// [`DEFAULT_CONFIG_FILE`] is read if present and defaults apply otherwise.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing (explicit path only),
/// unreadable, malformed, or fails validation.
pub fn load_config(path: Option<&Path>) -> Result<ProfileConfig, ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        debug!(path = %path.display(), "No configuration file, using defaults");
        return Ok(ProfileConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let config = parse_config(&content, &path.display().to_string())?;
    info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Parses and validates configuration text. `path` labels errors.
///
/// # Errors
///
/// Returns [`ConfigError::TomlError`] or [`ConfigError::ValidationError`].
pub fn parse_config(content: &str, path: &str) -> Result<ProfileConfig, ConfigError> {
    let config: ProfileConfig = toml::from_str(content).map_err(|e| ConfigError::TomlError {
        path: path.to_string(),
        source: e,
    })?;
    validate::validate(&config, path)?;
    Ok(config)
}
