//! Clipboard history domain.

mod entry;
mod history;

pub use entry::{is_blank, ClipboardEntry, EntryError};
pub use history::{HistoryList, IngestOutcome, HISTORY_CAPACITY};
