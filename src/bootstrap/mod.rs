//! Process bootstrap: config resolution, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::config::{load_app_config, resolve_config_path};
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::{build_chord_store, wire_dependencies, WiringError, WiringResult};
