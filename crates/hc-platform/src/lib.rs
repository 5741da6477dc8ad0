//! Platform adapters for hotclip.
//!
//! Global key monitoring and paste synthesis need the `native-input`
//! feature; without it the inert fallbacks in [`input`] and [`paste`] keep
//! the hotkey degraded and pasteback limited to a clipboard write.

pub mod app_dirs;
pub mod clipboard;
pub mod input;
pub mod paste;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::{ArboardClipboardSource, InMemoryClipboardSource};
pub use input::{default_key_source, InMemoryKeyEventSource, UnsupportedKeyEventSource};
pub use paste::{default_paste_injector, ClipboardOnlyPasteInjector};
