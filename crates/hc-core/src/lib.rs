//! # hc-core
//!
//! Core domain models and port definitions for hotclip.
//!
//! This crate holds pure logic only: the clipboard history list, the chord
//! model and the hotkey capture state machine. Everything that touches the
//! operating system sits behind a trait in [`ports`].

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod hotkey;
pub mod ids;
pub mod ports;

pub use clipboard::{ClipboardEntry, HistoryList, IngestOutcome, HISTORY_CAPACITY};
pub use config::AppConfig;
pub use hotkey::{ChordSpec, KeyCode, KeyEvent, Modifiers};
pub use ids::EntryId;
