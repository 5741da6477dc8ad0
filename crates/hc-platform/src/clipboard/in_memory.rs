use std::sync::{Mutex, MutexGuard};

use hc_core::ports::ClipboardSourcePort;

#[derive(Debug, Default)]
struct Slot {
    count: u64,
    text: Option<String>,
}

/// Process-local clipboard with a native change counter.
///
/// Every write bumps the counter, like a real pasteboard. Used by tests and
/// by headless sessions without a display server.
#[derive(Debug, Default)]
pub struct InMemoryClipboardSource {
    slot: Mutex<Slot>,
}

impl InMemoryClipboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Simulates another application copying `text`.
    pub fn copy(&self, text: &str) {
        let mut slot = self.slot();
        slot.count += 1;
        slot.text = Some(text.to_string());
    }

    /// Simulates a copy of non-text content.
    pub fn copy_non_text(&self) {
        let mut slot = self.slot();
        slot.count += 1;
        slot.text = None;
    }

    pub fn text(&self) -> Option<String> {
        self.slot().text.clone()
    }
}

impl ClipboardSourcePort for InMemoryClipboardSource {
    fn change_count(&self) -> anyhow::Result<u64> {
        Ok(self.slot().count)
    }

    fn read_text(&self) -> anyhow::Result<Option<String>> {
        Ok(self.slot().text.clone())
    }

    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.copy(text);
        Ok(())
    }
}
