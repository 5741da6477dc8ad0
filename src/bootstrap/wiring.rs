//! Dependency assembly.
//!
//! The only place that names concrete adapters from `hc-infra` and
//! `hc-platform`. It builds; it does not decide policy.

use std::sync::Arc;

use hc_app::{ChordStore, CoreDeps};
use hc_core::app_dirs::AppDirs;
use hc_core::config::AppConfig;
use hc_infra::{FileConfigStore, SystemClock};
use hc_platform::{default_key_source, default_paste_injector, ArboardClipboardSource};
use tracing::info;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency assembly.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Preference store rooted at `<data_dir>/prefs`.
pub fn build_config_store(app_dirs: &AppDirs) -> Arc<FileConfigStore> {
    Arc::new(FileConfigStore::new(app_dirs.prefs_dir()))
}

pub fn build_chord_store(app_dirs: &AppDirs) -> ChordStore {
    ChordStore::new(build_config_store(app_dirs))
}

/// Builds the port implementations for a [`hc_app::HotclipCore`].
pub fn wire_dependencies(app_dirs: &AppDirs, config: &AppConfig) -> WiringResult<CoreDeps> {
    if !config.paste.synthesize_keystroke {
        info!("Paste keystroke synthesis disabled, pasteback only writes the clipboard");
    }
    let clipboard = ArboardClipboardSource::new()
        .map_err(|err| WiringError::ClipboardInit(format!("{err:#}")))?;

    Ok(CoreDeps {
        clipboard: Arc::new(clipboard),
        paste_injector: default_paste_injector(),
        key_source: default_key_source(),
        config_store: build_config_store(app_dirs),
        clock: Arc::new(SystemClock),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_app::StoredChord;
    use hc_core::hotkey::{ChordSpec, KeyCode, Modifiers};
    use tempfile::TempDir;

    fn dirs_in(temp: &TempDir) -> AppDirs {
        AppDirs {
            app_data_root: temp.path().join("data"),
            app_config_root: temp.path().join("config"),
        }
    }

    #[test]
    fn config_store_lives_under_prefs() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);
        assert_eq!(build_config_store(&dirs).root(), dirs.prefs_dir().as_path());
    }

    #[test]
    fn chord_store_writes_one_file_per_key() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);
        let chords = build_chord_store(&dirs);
        let chord = ChordSpec::new(KeyCode::K, Modifiers::CONTROL | Modifiers::OPTION);

        chords.save(&chord).unwrap();

        assert!(dirs.prefs_dir().join("hotkey.chord.json").is_file());
        assert!(matches!(
            build_chord_store(&dirs).read(),
            StoredChord::Valid(stored) if stored == chord
        ));
    }
}
