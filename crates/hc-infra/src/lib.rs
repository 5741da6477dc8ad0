//! Infrastructure adapters for hotclip.

pub mod config;
pub mod store;
pub mod time;

pub use config::{load_config, load_config_or_default};
pub use store::{FileConfigStore, InMemoryConfigStore};
pub use time::{FixedClock, SystemClock};
