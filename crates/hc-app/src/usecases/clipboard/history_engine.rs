use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use hc_core::clipboard::{is_blank, ClipboardEntry, HistoryList, IngestOutcome};
use hc_core::config::PasteConfig;
use hc_core::ids::EntryId;
use hc_core::ports::{ClipboardSourcePort, ClockPort, PasteInjectorPort};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Result of a single [`ClipboardHistoryEngine::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Pasteback in flight; the clipboard was not looked at.
    Suspended,
    Unchanged,
    /// Counter moved but there is no usable text.
    Empty,
    Captured(EntryId),
    HeadDuplicate,
    SourceUnavailable,
}

#[derive(Debug, Error)]
pub enum PasteError {
    #[error("clipboard entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("failed to write clipboard: {0}")]
    ClipboardWrite(String),

    #[error("failed to synthesize paste keystroke: {0}")]
    Injector(String),
}

struct EngineState {
    history: HistoryList,
    /// Last change counter treated as handled. `None` until the source answers.
    last_seen: Option<u64>,
}

/// Polls the system clipboard into a bounded, deduplicated history and pastes
/// entries back into the focused application.
pub struct ClipboardHistoryEngine {
    source: Arc<dyn ClipboardSourcePort>,
    injector: Arc<dyn PasteInjectorPort>,
    clock: Arc<dyn ClockPort>,
    paste: PasteConfig,
    state: Mutex<EngineState>,
    suspended: AtomicBool,
    paste_lock: tokio::sync::Mutex<()>,
}

/// Resumes polling when dropped, including when a pasteback future is dropped
/// mid-flight.
struct SuspendGuard<'a> {
    engine: &'a ClipboardHistoryEngine,
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.engine.resume();
    }
}

impl ClipboardHistoryEngine {
    /// Creates the engine and adopts the source's current counter, so whatever
    /// is on the clipboard at start-up is not captured.
    pub fn new(
        source: Arc<dyn ClipboardSourcePort>,
        injector: Arc<dyn PasteInjectorPort>,
        clock: Arc<dyn ClockPort>,
        paste: PasteConfig,
    ) -> Self {
        let last_seen = match source.change_count() {
            Ok(count) => Some(count),
            Err(err) => {
                debug!(error = %err, "Clipboard counter unavailable at start-up");
                None
            }
        };
        Self {
            source,
            injector,
            clock,
            paste,
            state: Mutex::new(EngineState {
                history: HistoryList::new(),
                last_seen,
            }),
            suspended: AtomicBool::new(false),
            paste_lock: tokio::sync::Mutex::new(()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Clipboard history lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Checks the clipboard once. Idempotent while nothing changes.
    pub fn poll(&self) -> PollOutcome {
        if self.is_suspended() {
            return PollOutcome::Suspended;
        }
        let mut state = self.lock_state();
        // re-check under the lock: pasteback suspends before taking it
        if self.is_suspended() {
            return PollOutcome::Suspended;
        }

        let count = match self.source.change_count() {
            Ok(count) => count,
            Err(err) => {
                debug!(error = %err, "Clipboard counter read failed");
                return PollOutcome::SourceUnavailable;
            }
        };
        match state.last_seen {
            Some(seen) if seen == count => return PollOutcome::Unchanged,
            None => {
                state.last_seen = Some(count);
                return PollOutcome::Unchanged;
            }
            Some(_) => state.last_seen = Some(count),
        }

        let text = match self.source.read_text() {
            Ok(Some(text)) if !is_blank(&text) => text,
            Ok(_) => return PollOutcome::Empty,
            Err(err) => {
                debug!(error = %err, "Clipboard text read failed");
                return PollOutcome::SourceUnavailable;
            }
        };

        let now = self.clock.now_ms();
        match state.history.ingest(&text, now) {
            IngestOutcome::Inserted { id, evicted } => {
                debug!(
                    entry_id = %id,
                    len = text.len(),
                    evicted,
                    change_count = count,
                    "Captured clipboard text"
                );
                PollOutcome::Captured(id)
            }
            IngestOutcome::HeadDuplicate => PollOutcome::HeadDuplicate,
            IngestOutcome::Empty => PollOutcome::Empty,
        }
    }

    /// Adds `text` at the head of the history, moving an equal entry up.
    pub fn ingest(&self, text: &str) -> IngestOutcome {
        let now = self.clock.now_ms();
        self.lock_state().history.ingest(text, now)
    }

    #[tracing::instrument(name = "usecase.clipboard.clear", skip(self))]
    pub fn clear(&self) {
        let mut state = self.lock_state();
        let removed = state.history.len();
        state.history.clear();
        info!(removed, "Cleared clipboard history");
    }

    #[tracing::instrument(name = "usecase.clipboard.remove", skip(self), fields(entry_id = %id))]
    pub fn remove(&self, id: &EntryId) -> Option<ClipboardEntry> {
        let removed = self.lock_state().history.remove(id);
        if removed.is_none() {
            debug!("No history entry to remove");
        }
        removed
    }

    pub fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.lock_state().history.snapshot()
    }

    pub fn entry(&self, id: &EntryId) -> Option<ClipboardEntry> {
        self.lock_state().history.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock_state().history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::SeqCst)
    }

    /// Writes the entry back to the clipboard and pastes it.
    ///
    /// Polling stays suspended from before the write until the second
    /// settling delay has elapsed, then resumes with the counter re-read so
    /// the engine never captures its own write. The history order is left
    /// untouched. Concurrent calls run one after another.
    #[tracing::instrument(name = "usecase.clipboard.pasteback", skip(self), fields(entry_id = %id))]
    pub async fn pasteback(&self, id: &EntryId) -> Result<(), PasteError> {
        let _serial = self.paste_lock.lock().await;

        let content = self
            .entry(id)
            .map(|entry| entry.content().to_string())
            .ok_or_else(|| PasteError::EntryNotFound(id.clone()))?;

        self.suspended.store(true, Ordering::SeqCst);
        let guard = SuspendGuard { engine: self };

        {
            let mut state = self.lock_state();
            self.source.write_text(&content).map_err(|err| {
                error!(error = %err, "Pasteback clipboard write failed");
                PasteError::ClipboardWrite(err.to_string())
            })?;
            if let Ok(count) = self.source.change_count() {
                state.last_seen = Some(count);
            }
        }

        tokio::time::sleep(self.paste.settle_before_paste()).await;

        let injected = if self.paste.synthesize_keystroke {
            self.injector.synthesize_paste().map_err(|err| {
                warn!(error = %err, "Paste keystroke synthesis failed");
                PasteError::Injector(err.to_string())
            })
        } else {
            Ok(())
        };

        tokio::time::sleep(self.paste.settle_before_resume()).await;
        drop(guard);

        if injected.is_ok() {
            info!(len = content.len(), "Pasted history entry");
        }
        injected
    }

    fn resume(&self) {
        let mut state = self.lock_state();
        match self.source.change_count() {
            Ok(count) => state.last_seen = Some(count),
            Err(err) => debug!(error = %err, "Clipboard counter read failed on resume"),
        }
        self.suspended.store(false, Ordering::SeqCst);
    }
}
