//! Key event handlers registered by the capture service.
//!
//! Both carry an `armed` flag the service clears before unsubscribing. A key
//! source may already be dispatching to a snapshot that still contains the
//! handler; the flag turns that late delivery into a no-op.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use hc_core::hotkey::{CaptureEvent, ChordSpec, KeyDisposition, KeyEvent};
use hc_core::ports::{ClockPort, KeyEventHandler};
use tokio::sync::broadcast;
use tracing::debug;

use super::capture_service::HotkeyCaptureService;
use crate::event::HotkeyTriggered;

pub(super) struct MatcherHandler {
    pub(super) chord: ChordSpec,
    pub(super) armed: Arc<AtomicBool>,
    /// Non-zero while a [`super::TriggerMute`] is alive.
    pub(super) muted: Arc<AtomicUsize>,
    pub(super) triggers: broadcast::Sender<HotkeyTriggered>,
    pub(super) clock: Arc<dyn ClockPort>,
}

impl KeyEventHandler for MatcherHandler {
    fn on_key_down(&self, event: &KeyEvent) -> KeyDisposition {
        if !self.armed.load(Ordering::SeqCst) || !self.chord.matches(event) {
            return KeyDisposition::Pass;
        }
        if self.muted.load(Ordering::SeqCst) > 0 {
            debug!(chord = %self.chord, "Hotkey matched while muted");
            return KeyDisposition::Pass;
        }
        let trigger = HotkeyTriggered {
            chord: self.chord,
            at_ms: self.clock.now_ms(),
        };
        if self.triggers.send(trigger).is_err() {
            debug!(chord = %self.chord, "Hotkey fired with no listeners");
        }
        if event.channel.can_suppress() {
            KeyDisposition::Swallow
        } else {
            KeyDisposition::Pass
        }
    }
}

/// Feeds key-downs into the capture machine while recording.
pub(super) struct RecorderHandler {
    pub(super) service: Weak<HotkeyCaptureService>,
    pub(super) armed: Arc<AtomicBool>,
}

impl KeyEventHandler for RecorderHandler {
    fn on_key_down(&self, event: &KeyEvent) -> KeyDisposition {
        if !self.armed.load(Ordering::SeqCst) {
            return KeyDisposition::Pass;
        }
        let Some(service) = self.service.upgrade() else {
            return KeyDisposition::Pass;
        };
        service.dispatch(CaptureEvent::RecordedKey(*event));
        // keys typed while recording never reach other applications
        if event.channel.can_suppress() {
            KeyDisposition::Swallow
        } else {
            KeyDisposition::Pass
        }
    }
}
