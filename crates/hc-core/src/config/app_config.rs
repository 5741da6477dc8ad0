//! Application configuration domain model
//!
//! Every field carries a serde default so partial files load cleanly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lower bound applied to every polling interval.
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub clipboard: ClipboardConfig,
    pub paste: PasteConfig,
    pub hotkey: HotkeyConfig,
    pub logging: LoggingConfig,
}

/// Clipboard polling and presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub poll_interval_ms: u64,
    /// Maximum characters shown in an entry preview
    pub preview_chars: usize,
}

/// Pasteback timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteConfig {
    /// When false the entry is only written to the clipboard.
    pub synthesize_keystroke: bool,
    pub settle_before_paste_ms: u64,
    pub settle_before_resume_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// How often a degraded key monitor is retried
    pub status_poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write a daily-rolling log file under the data directory
    pub file: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
            preview_chars: 80,
        }
    }
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            synthesize_keystroke: true,
            settle_before_paste_ms: 100,
            settle_before_resume_ms: 300,
        }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            status_poll_interval_ms: 1500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { file: true }
    }
}

fn clamped(ms: u64) -> Duration {
    Duration::from_millis(ms.max(MIN_POLL_INTERVAL_MS))
}

impl ClipboardConfig {
    pub fn poll_interval(&self) -> Duration {
        clamped(self.poll_interval_ms)
    }
}

impl HotkeyConfig {
    pub fn status_poll_interval(&self) -> Duration {
        clamped(self.status_poll_interval_ms)
    }
}

impl PasteConfig {
    pub fn settle_before_paste(&self) -> Duration {
        Duration::from_millis(self.settle_before_paste_ms)
    }

    pub fn settle_before_resume(&self) -> Duration {
        Duration::from_millis(self.settle_before_resume_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.clipboard.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.hotkey.status_poll_interval(), Duration::from_millis(1500));
        assert_eq!(config.paste.settle_before_paste(), Duration::from_millis(100));
        assert_eq!(config.paste.settle_before_resume(), Duration::from_millis(300));
        assert!(config.paste.synthesize_keystroke);
        assert!(config.logging.file);
    }

    #[test]
    fn zero_intervals_are_clamped() {
        let clipboard = ClipboardConfig {
            poll_interval_ms: 0,
            ..ClipboardConfig::default()
        };
        assert_eq!(clipboard.poll_interval(), Duration::from_millis(MIN_POLL_INTERVAL_MS));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"paste":{"settle_before_paste_ms":20}}"#).unwrap();
        assert_eq!(config.paste.settle_before_paste_ms, 20);
        assert_eq!(config.paste.settle_before_resume_ms, 300);
        assert_eq!(config.clipboard, ClipboardConfig::default());
    }
}
