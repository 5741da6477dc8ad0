//! Application configuration model.

mod app_config;

pub use app_config::{
    AppConfig, ClipboardConfig, HotkeyConfig, LoggingConfig, PasteConfig, MIN_POLL_INTERVAL_MS,
};
