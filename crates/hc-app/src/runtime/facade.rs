use std::sync::Arc;

use hc_core::clipboard::ClipboardEntry;
use hc_core::config::AppConfig;
use hc_core::hotkey::{ChordSpec, RecordingSignal};
use hc_core::ids::EntryId;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::pollers::{spawn_clipboard_poller, spawn_status_poller};
use crate::deps::CoreDeps;
use crate::event::{HotkeyCapability, HotkeyTriggered};
use crate::usecases::clipboard::{ClipboardHistoryEngine, PasteError};
use crate::usecases::hotkey::{ChordStore, HotkeyCaptureService};

/// Entry point for front ends: item lists and trigger events out, paste and
/// recording requests in.
#[derive(Clone)]
pub struct HotclipCore {
    engine: Arc<ClipboardHistoryEngine>,
    capture: Arc<HotkeyCaptureService>,
}

/// Handles of the running pollers.
pub struct CoreRuntime {
    token: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl HotclipCore {
    /// Wires the engine and capture service. The persisted chord is loaded
    /// and armed here; polling starts with [`HotclipCore::start`].
    pub fn new(deps: CoreDeps, config: &AppConfig) -> Self {
        let engine = Arc::new(ClipboardHistoryEngine::new(
            deps.clipboard,
            deps.paste_injector,
            deps.clock.clone(),
            config.paste.clone(),
        ));
        let capture = HotkeyCaptureService::start(
            deps.key_source,
            ChordStore::new(deps.config_store),
            deps.clock,
        );
        Self { engine, capture }
    }

    /// Spawns the clipboard and status pollers on the current runtime.
    pub fn start(&self, config: &AppConfig) -> CoreRuntime {
        let token = CancellationToken::new();
        let tasks = vec![
            spawn_clipboard_poller(
                self.engine.clone(),
                config.clipboard.poll_interval(),
                token.child_token(),
            ),
            spawn_status_poller(
                self.capture.clone(),
                config.hotkey.status_poll_interval(),
                token.child_token(),
            ),
        ];
        CoreRuntime { token, tasks }
    }

    pub fn engine(&self) -> &Arc<ClipboardHistoryEngine> {
        &self.engine
    }

    pub fn capture(&self) -> &Arc<HotkeyCaptureService> {
        &self.capture
    }

    pub fn history_snapshot(&self) -> Vec<ClipboardEntry> {
        self.engine.snapshot()
    }

    pub fn subscribe_triggers(&self) -> broadcast::Receiver<HotkeyTriggered> {
        self.capture.subscribe_triggers()
    }

    pub fn subscribe_recording(&self) -> broadcast::Receiver<RecordingSignal> {
        self.capture.subscribe_recording()
    }

    /// Pastes an entry back. Triggers stay muted until polling resumes, so
    /// a chord equal to the platform paste shortcut does not fire on the
    /// synthesized keystroke.
    pub async fn request_paste(&self, id: &EntryId) -> Result<(), PasteError> {
        let _mute = self.capture.mute_triggers();
        self.engine.pasteback(id).await
    }

    pub fn request_clear(&self) {
        self.engine.clear();
    }

    pub fn request_remove(&self, id: &EntryId) {
        self.engine.remove(id);
    }

    pub fn request_start_recording(&self) {
        self.capture.start_recording();
    }

    pub fn request_cancel_recording(&self) {
        self.capture.cancel_recording();
    }

    pub fn request_clear_chord(&self) {
        self.capture.clear_chord();
    }

    pub fn hotkey_capability(&self) -> HotkeyCapability {
        self.capture.capability()
    }

    pub fn current_chord(&self) -> Option<ChordSpec> {
        self.capture.current_chord()
    }
}

impl CoreRuntime {
    /// Cancels the pollers and waits for them to finish.
    pub async fn shutdown(self) {
        self.token.cancel();
        for task in self.tasks {
            if let Err(err) = task.await {
                warn!(error = %err, "Poller task ended abnormally");
            }
        }
        info!("Core runtime stopped");
    }
}
