//! Key event sources.

mod in_memory;
mod modifier_tracker;
mod registry;
mod unsupported;

#[cfg(feature = "native-input")]
mod key_map;
#[cfg(feature = "native-input")]
mod rdev_source;

use std::sync::Arc;

use hc_core::ports::KeyEventSourcePort;

pub use in_memory::InMemoryKeyEventSource;
pub use modifier_tracker::ModifierTracker;
pub use registry::HandlerRegistry;
pub use unsupported::UnsupportedKeyEventSource;

#[cfg(feature = "native-input")]
pub use key_map::key_code_from_rdev;
#[cfg(feature = "native-input")]
pub use rdev_source::RdevKeyEventSource;

/// Global key monitor for this build.
#[cfg(feature = "native-input")]
pub fn default_key_source() -> Arc<dyn KeyEventSourcePort> {
    Arc::new(RdevKeyEventSource::new())
}

/// Global key monitor for this build.
#[cfg(not(feature = "native-input"))]
pub fn default_key_source() -> Arc<dyn KeyEventSourcePort> {
    Arc::new(UnsupportedKeyEventSource::new(
        "built without the native-input feature",
    ))
}
