//! Paste keystroke injectors.

mod clipboard_only;
#[cfg(feature = "native-input")]
mod enigo_injector;

use std::sync::Arc;

use hc_core::ports::PasteInjectorPort;

pub use clipboard_only::ClipboardOnlyPasteInjector;
#[cfg(feature = "native-input")]
pub use enigo_injector::EnigoPasteInjector;

#[cfg(feature = "native-input")]
pub fn default_paste_injector() -> Arc<dyn PasteInjectorPort> {
    Arc::new(EnigoPasteInjector::new())
}

#[cfg(not(feature = "native-input"))]
pub fn default_paste_injector() -> Arc<dyn PasteInjectorPort> {
    Arc::new(ClipboardOnlyPasteInjector)
}
