mod history_engine;

pub use history_engine::{ClipboardHistoryEngine, PasteError, PollOutcome};
