//! Scheduling and the collaborator-facing facade.

mod facade;
mod pollers;

pub use facade::{CoreRuntime, HotclipCore};
pub use pollers::{spawn_clipboard_poller, spawn_status_poller};
