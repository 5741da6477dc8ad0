//! hotclip application orchestration layer
//!
//! Use cases drive the domain models of `hc-core` through its ports; the
//! runtime module schedules them and exposes [`HotclipCore`] to front ends.

pub mod deps;
pub mod event;
pub mod runtime;
pub mod usecases;

pub use deps::CoreDeps;
pub use event::{HotkeyCapability, HotkeyTriggered};
pub use runtime::{CoreRuntime, HotclipCore};
pub use usecases::clipboard::{ClipboardHistoryEngine, PasteError, PollOutcome};
pub use usecases::hotkey::{ChordStore, HotkeyCaptureService, StoredChord, TriggerMute};
