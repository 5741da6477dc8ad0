//! Hotkey domain: key codes, modifier masks, chords and the capture machine.

mod capture;
mod chord;
mod event;
mod key_code;
mod modifiers;

pub use capture::{
    display_or_unset, CaptureAction, CaptureEvent, CaptureMachine, CaptureState, RecordingSignal,
};
pub use chord::{ChordCodecError, ChordRecord, ChordRejection, ChordSpec, CHORD_CONFIG_KEY};
pub use event::{EventChannel, KeyDisposition, KeyEvent};
pub use key_code::KeyCode;
pub use modifiers::Modifiers;
