//! Port interfaces for the application layer
//!
//! Ports are the contract between the use cases in `hc-app` and the adapters
//! in `hc-infra` and `hc-platform`. They are synchronous: key events arrive
//! on a foreign thread and clipboard reads are short blocking calls.

mod app_dirs;
mod clipboard_source;
mod clock;
mod config_store;
pub mod errors;
mod key_event_source;
mod paste_injector;

pub use app_dirs::AppDirsPort;
pub use clipboard_source::ClipboardSourcePort;
pub use clock::ClockPort;
pub use config_store::ConfigStorePort;
pub use errors::{AppDirsError, ConfigStoreError, KeyMonitorError};
pub use key_event_source::{KeyEventHandler, KeyEventSourcePort, SubscriptionId};
pub use paste_injector::PasteInjectorPort;
