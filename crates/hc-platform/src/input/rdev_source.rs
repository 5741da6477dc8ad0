use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use hc_core::hotkey::EventChannel;
use hc_core::ports::{KeyEventHandler, KeyEventSourcePort, KeyMonitorError, SubscriptionId};
use rdev::{listen, EventType};
use tracing::{debug, error, info, warn};

use super::key_map::key_code_from_rdev;
use super::modifier_tracker::ModifierTracker;
use super::registry::HandlerRegistry;

/// Time allowed for the listener to report an immediate start-up failure.
const STARTUP_GRACE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListenerState {
    Stopped,
    Running,
    Failed(String),
}

/// Global key monitor built on `rdev::listen`.
///
/// The listener runs on its own thread for the life of the process and
/// cannot suppress events, so every event is delivered as
/// [`EventChannel::ObserveOnly`].
pub struct RdevKeyEventSource {
    registry: Arc<HandlerRegistry>,
    state: Arc<Mutex<ListenerState>>,
}

impl Default for RdevKeyEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RdevKeyEventSource {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(HandlerRegistry::new()),
            state: Arc::new(Mutex::new(ListenerState::Stopped)),
        }
    }

    fn lock_state(state: &Mutex<ListenerState>) -> MutexGuard<'_, ListenerState> {
        state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Starts the listener thread unless it is already running.
    fn ensure_listening(&self) -> Result<(), KeyMonitorError> {
        let mut state = Self::lock_state(&self.state);
        if *state == ListenerState::Running {
            return Ok(());
        }

        let (failed_tx, failed_rx) = mpsc::channel::<String>();
        let registry = self.registry.clone();
        let shared_state = self.state.clone();

        thread::Builder::new()
            .name("hotclip-key-listener".into())
            .spawn(move || {
                let mut tracker = ModifierTracker::new();
                let result = listen(move |event| match event.event_type {
                    EventType::KeyPress(key) => {
                        let Some(code) = key_code_from_rdev(key) else {
                            return;
                        };
                        let key_event = tracker.press(code, EventChannel::ObserveOnly);
                        registry.dispatch(&key_event);
                    }
                    EventType::KeyRelease(key) => {
                        if let Some(code) = key_code_from_rdev(key) {
                            tracker.release(code);
                        }
                    }
                    _ => {}
                });
                if let Err(err) = result {
                    let reason = format!("{err:?}");
                    error!(%reason, "Global key listener stopped");
                    // report before touching the state: the subscriber holds
                    // the state lock while it waits on this channel
                    let _ = failed_tx.send(reason.clone());
                    *Self::lock_state(&shared_state) = ListenerState::Failed(reason);
                }
            })
            .map_err(|err| KeyMonitorError::Failed(err.to_string()))?;

        match failed_rx.recv_timeout(STARTUP_GRACE) {
            Ok(reason) => {
                *state = ListenerState::Failed(reason.clone());
                Err(classify(reason))
            }
            Err(_) => {
                *state = ListenerState::Running;
                info!("Global key listener started");
                Ok(())
            }
        }
    }
}

fn classify(reason: String) -> KeyMonitorError {
    if reason.contains("EventTap") || reason.contains("Permission") {
        KeyMonitorError::PermissionDenied
    } else {
        KeyMonitorError::Failed(reason)
    }
}

impl KeyEventSourcePort for RdevKeyEventSource {
    fn subscribe(&self, handler: Arc<dyn KeyEventHandler>) -> Result<SubscriptionId, KeyMonitorError> {
        if let Err(err) = self.ensure_listening() {
            warn!(error = %err, "Global key listener unavailable");
            return Err(err);
        }
        let id = self.registry.add(handler);
        debug!(subscription = %id, "Key handler subscribed");
        Ok(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        if self.registry.remove(id) {
            debug!(subscription = %id, "Key handler unsubscribed");
        }
    }
}
