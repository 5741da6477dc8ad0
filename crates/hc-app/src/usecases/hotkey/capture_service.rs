use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use hc_core::hotkey::{
    display_or_unset, CaptureAction, CaptureEvent, CaptureMachine, CaptureState, ChordSpec,
    RecordingSignal,
};
use hc_core::ports::{ClockPort, KeyEventHandler, KeyEventSourcePort, SubscriptionId};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use super::chord_store::ChordStore;
use super::handlers::{MatcherHandler, RecorderHandler};
use crate::event::{HotkeyCapability, HotkeyTriggered};

const SIGNAL_CAPACITY: usize = 32;

struct Subscription {
    id: SubscriptionId,
    armed: Arc<AtomicBool>,
}

struct CaptureInner {
    state: CaptureState,
    subscriptions: Vec<Subscription>,
    capability: HotkeyCapability,
}

/// Owns the hotkey chord and the key subscriptions that serve it.
///
/// Every transition runs under one mutex: the pure [`CaptureMachine`] picks
/// the next state and the actions are executed in order before the lock is
/// released. Key handlers run on the key source's thread and may re-enter
/// [`HotkeyCaptureService::dispatch`].
pub struct HotkeyCaptureService {
    key_source: Arc<dyn KeyEventSourcePort>,
    chords: ChordStore,
    clock: Arc<dyn ClockPort>,
    inner: Mutex<CaptureInner>,
    triggers: broadcast::Sender<HotkeyTriggered>,
    recording: broadcast::Sender<RecordingSignal>,
    muted: Arc<AtomicUsize>,
    this: Weak<HotkeyCaptureService>,
}

/// Keeps matchers from firing while alive. See
/// [`HotkeyCaptureService::mute_triggers`].
pub struct TriggerMute {
    muted: Arc<AtomicUsize>,
}

impl Drop for TriggerMute {
    fn drop(&mut self) {
        self.muted.fetch_sub(1, Ordering::SeqCst);
    }
}

impl HotkeyCaptureService {
    /// Builds the service inert, without touching the store or key source.
    pub fn new(
        key_source: Arc<dyn KeyEventSourcePort>,
        chords: ChordStore,
        clock: Arc<dyn ClockPort>,
    ) -> Arc<Self> {
        let (triggers, _) = broadcast::channel(SIGNAL_CAPACITY);
        let (recording, _) = broadcast::channel(SIGNAL_CAPACITY);
        Arc::new_cyclic(|this| Self {
            key_source,
            chords,
            clock,
            inner: Mutex::new(CaptureInner {
                state: CaptureState::Armed(None),
                subscriptions: Vec::new(),
                capability: HotkeyCapability::Inert,
            }),
            triggers,
            recording,
            muted: Arc::new(AtomicUsize::new(0)),
            this: this.clone(),
        })
    }

    /// Loads the persisted chord (or the default) and arms it.
    #[tracing::instrument(name = "usecase.hotkey.start", skip_all)]
    pub fn start(
        key_source: Arc<dyn KeyEventSourcePort>,
        chords: ChordStore,
        clock: Arc<dyn ClockPort>,
    ) -> Arc<Self> {
        let chord = chords.load_or_default();
        let service = Self::new(key_source, chords, clock);
        service.dispatch(CaptureEvent::Arm(chord));
        info!(chord = %chord, capability = ?service.capability(), "Hotkey armed");
        service
    }

    fn lock_inner(&self) -> MutexGuard<'_, CaptureInner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Hotkey capture lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Runs one transition and its actions atomically.
    pub fn dispatch(&self, event: CaptureEvent) {
        let mut inner = self.lock_inner();
        self.dispatch_locked(&mut inner, event);
    }

    fn dispatch_locked(&self, inner: &mut CaptureInner, event: CaptureEvent) {
        let (next, actions) = CaptureMachine::transition(inner.state, event);
        if next != inner.state {
            debug!(from = ?inner.state, to = ?next, "Capture state transition");
        }
        inner.state = next;
        for action in actions {
            self.execute(inner, action);
        }
    }

    fn execute(&self, inner: &mut CaptureInner, action: CaptureAction) {
        match action {
            CaptureAction::Disarm => {
                for sub in inner.subscriptions.drain(..) {
                    sub.armed.store(false, Ordering::SeqCst);
                    self.key_source.unsubscribe(sub.id);
                }
                inner.capability = HotkeyCapability::Inert;
            }
            CaptureAction::ArmMatcher(chord) => {
                let armed = Arc::new(AtomicBool::new(true));
                let handler = Arc::new(MatcherHandler {
                    chord,
                    armed: armed.clone(),
                    muted: self.muted.clone(),
                    triggers: self.triggers.clone(),
                    clock: self.clock.clone(),
                });
                self.subscribe(inner, handler, armed);
            }
            CaptureAction::ArmRecorder => {
                let armed = Arc::new(AtomicBool::new(true));
                let handler = Arc::new(RecorderHandler {
                    service: self.this.clone(),
                    armed: armed.clone(),
                });
                self.subscribe(inner, handler, armed);
            }
            CaptureAction::PersistChord(chord) => {
                // the chord stays armed for this session even if saving fails
                if let Err(err) = self.chords.save(&chord) {
                    error!(error = %err, chord = %chord, "Failed to persist recorded hotkey");
                }
            }
            CaptureAction::DeletePersistedChord => {
                if let Err(err) = self.chords.clear() {
                    error!(error = %err, "Failed to delete persisted hotkey");
                }
            }
            CaptureAction::Notify(signal) => {
                debug!(?signal, "Recording signal");
                let _ = self.recording.send(signal);
            }
        }
    }

    fn subscribe(
        &self,
        inner: &mut CaptureInner,
        handler: Arc<dyn KeyEventHandler>,
        armed: Arc<AtomicBool>,
    ) {
        match self.key_source.subscribe(handler) {
            Ok(id) => {
                inner.subscriptions.push(Subscription { id, armed });
                inner.capability = HotkeyCapability::Active;
            }
            Err(err) => {
                armed.store(false, Ordering::SeqCst);
                warn!(error = %err, "Key monitor subscription failed, hotkey degraded");
                inner.capability = HotkeyCapability::Unavailable {
                    reason: err.to_string(),
                };
            }
        }
    }

    #[tracing::instrument(name = "usecase.hotkey.start_recording", skip(self))]
    pub fn start_recording(&self) {
        self.dispatch(CaptureEvent::StartRecording);
    }

    #[tracing::instrument(name = "usecase.hotkey.cancel_recording", skip(self))]
    pub fn cancel_recording(&self) {
        self.dispatch(CaptureEvent::CancelRecording);
    }

    #[tracing::instrument(name = "usecase.hotkey.clear_chord", skip(self))]
    pub fn clear_chord(&self) {
        self.dispatch(CaptureEvent::Clear);
    }

    /// Retries the subscription for the held chord after an earlier failure.
    ///
    /// Returns true when the hotkey is active afterwards.
    pub fn rearm_if_degraded(&self) -> bool {
        // one guard from the check to the transition: a clear or a finished
        // recording must not be overwritten by the chord read here
        let mut inner = self.lock_inner();
        if !inner.capability.is_degraded() {
            return inner.capability == HotkeyCapability::Active;
        }
        let CaptureState::Armed(Some(chord)) = inner.state else {
            return false;
        };
        debug!(chord = %chord, "Retrying degraded hotkey subscription");
        self.dispatch_locked(&mut inner, CaptureEvent::Arm(chord));
        let active = inner.capability == HotkeyCapability::Active;
        if active {
            info!(chord = %chord, "Hotkey subscription restored");
        }
        active
    }

    /// Suppresses triggers until the returned guard is dropped.
    ///
    /// Used around pasteback: the synthesized paste shortcut reaches the key
    /// monitor like any other key-down and may equal the held chord.
    pub fn mute_triggers(&self) -> TriggerMute {
        self.muted.fetch_add(1, Ordering::SeqCst);
        TriggerMute {
            muted: self.muted.clone(),
        }
    }

    pub fn current_chord(&self) -> Option<ChordSpec> {
        self.lock_inner().state.chord()
    }

    pub fn is_recording(&self) -> bool {
        self.lock_inner().state.is_recording()
    }

    pub fn state(&self) -> CaptureState {
        self.lock_inner().state
    }

    pub fn display(&self) -> String {
        display_or_unset(self.current_chord())
    }

    pub fn capability(&self) -> HotkeyCapability {
        self.lock_inner().capability.clone()
    }

    pub fn subscribe_triggers(&self) -> broadcast::Receiver<HotkeyTriggered> {
        self.triggers.subscribe()
    }

    pub fn subscribe_recording(&self) -> broadcast::Receiver<RecordingSignal> {
        self.recording.subscribe()
    }
}
