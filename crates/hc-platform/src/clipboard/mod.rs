//! Clipboard source adapters.

mod arboard_source;
mod change_counter;
mod in_memory;

pub use arboard_source::ArboardClipboardSource;
pub use change_counter::HashChangeCounter;
pub use in_memory::InMemoryClipboardSource;
