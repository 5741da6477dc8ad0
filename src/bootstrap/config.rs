//! Configuration path resolution.
//!
//! Parsing lives in `hc_infra::config`; this module only decides which file
//! to read.

use std::path::{Path, PathBuf};

use anyhow::Context;
use hc_core::app_dirs::AppDirs;
use hc_core::config::AppConfig;
use hc_infra::{load_config, load_config_or_default};

/// `--config` wins; otherwise `<config_dir>/hotclip/config.toml`.
pub fn resolve_config_path(explicit: Option<&Path>, app_dirs: &AppDirs) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => app_dirs.config_file(),
    }
}

/// Loads the application config.
///
/// An explicitly requested file must exist. The default location may be
/// absent, in which case built-in defaults apply.
pub fn load_app_config(explicit: Option<&Path>, app_dirs: &AppDirs) -> anyhow::Result<AppConfig> {
    let path = resolve_config_path(explicit, app_dirs);
    if explicit.is_some() {
        load_config(&path)
    } else {
        load_config_or_default(&path)
    }
    .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dirs_in(temp: &TempDir) -> AppDirs {
        AppDirs {
            app_data_root: temp.path().join("data"),
            app_config_root: temp.path().join("config"),
        }
    }

    #[test]
    fn explicit_path_takes_precedence() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);
        let explicit = temp.path().join("custom.toml");

        assert_eq!(resolve_config_path(Some(&explicit), &dirs), explicit);
        assert_eq!(
            resolve_config_path(None, &dirs),
            temp.path().join("config").join("config.toml")
        );
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_app_config(None, &dirs_in(&temp)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("nope.toml");
        assert!(load_app_config(Some(&explicit), &dirs_in(&temp)).is_err());
    }

    #[test]
    fn default_location_is_read_when_present() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);
        fs::create_dir_all(&dirs.app_config_root).unwrap();
        fs::write(dirs.config_file(), "[clipboard]\npoll_interval_ms = 250\n").unwrap();

        let config = load_app_config(None, &dirs).unwrap();
        assert_eq!(config.clipboard.poll_interval_ms, 250);
        assert_eq!(config.paste, AppConfig::default().paste);
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);
        fs::create_dir_all(&dirs.app_config_root).unwrap();
        fs::write(dirs.config_file(), "[clipboard\n").unwrap();

        let err = load_app_config(None, &dirs).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
