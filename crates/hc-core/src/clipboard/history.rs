//! Bounded, deduplicated clipboard history.
//!
//! The list is ordered most-recent-first. Content equality is an exact string
//! match: case, whitespace and line endings all count.

use crate::clipboard::entry::{is_blank, ClipboardEntry};
use crate::ids::EntryId;

/// Maximum number of entries kept in memory.
pub const HISTORY_CAPACITY: usize = 50;

/// Result of [`HistoryList::ingest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A new entry went to the head; `evicted` entries fell off the tail.
    Inserted { id: EntryId, evicted: usize },
    /// The head already holds this exact text.
    HeadDuplicate,
    /// The text is empty or whitespace only.
    Empty,
}

#[derive(Debug, Clone)]
pub struct HistoryList {
    entries: Vec<ClipboardEntry>,
    capacity: usize,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn ingest(&mut self, text: &str, captured_at_ms: i64) -> IngestOutcome {
        if is_blank(text) {
            return IngestOutcome::Empty;
        }
        if self.entries.first().map(ClipboardEntry::content) == Some(text) {
            return IngestOutcome::HeadDuplicate;
        }

        self.entries.retain(|entry| entry.content() != text);

        let entry = match ClipboardEntry::new(text, captured_at_ms) {
            Ok(entry) => entry,
            Err(_) => return IngestOutcome::Empty,
        };
        let id = entry.id().clone();
        self.entries.insert(0, entry);

        let evicted = self.entries.len().saturating_sub(self.capacity);
        self.entries.truncate(self.capacity);

        IngestOutcome::Inserted { id, evicted }
    }

    /// Removes the entry with `id`, returning it when present.
    pub fn remove(&mut self, id: &EntryId) -> Option<ClipboardEntry> {
        let pos = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &EntryId) -> Option<&ClipboardEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn head(&self) -> Option<&ClipboardEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryList {
    fn default() -> Self {
        Self::new()
    }
}
