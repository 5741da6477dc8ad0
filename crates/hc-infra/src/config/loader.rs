//! # Configuration Loader
//!
//! Reads the TOML application config. Defaults for missing sections and
//! fields come from the serde attributes on [`AppConfig`]; nothing here
//! validates values beyond what parsing requires.

use anyhow::Context;
use std::path::Path;

use hc_core::config::AppConfig;
use tracing::debug;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Like [`load_config`], but a missing file yields `AppConfig::default()`.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }
    load_config(config_path)
}
