mod capture_service;
mod chord_store;
mod handlers;

pub use capture_service::{HotkeyCaptureService, TriggerMute};
pub use chord_store::{ChordStore, ChordStoreError, StoredChord};
