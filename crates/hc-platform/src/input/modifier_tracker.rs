use std::collections::HashSet;

use hc_core::hotkey::{EventChannel, KeyCode, KeyEvent, Modifiers};

/// Rebuilds the modifier mask from raw press/release streams.
///
/// Listener-style monitors report every key separately, so the mask that
/// accompanies a key-down has to be tracked here. Left and right variants are
/// held independently: releasing one side keeps the flag while the other is
/// down. Caps lock toggles.
#[derive(Debug, Default)]
pub struct ModifierTracker {
    held: HashSet<KeyCode>,
    caps_lock: bool,
}

fn flag_for(code: KeyCode) -> Option<Modifiers> {
    let flag = match code {
        KeyCode::COMMAND | KeyCode::RIGHT_COMMAND => Modifiers::COMMAND,
        KeyCode::SHIFT | KeyCode::RIGHT_SHIFT => Modifiers::SHIFT,
        KeyCode::OPTION | KeyCode::RIGHT_OPTION => Modifiers::OPTION,
        KeyCode::CONTROL | KeyCode::RIGHT_CONTROL => Modifiers::CONTROL,
        KeyCode::FUNCTION => Modifiers::FUNCTION,
        _ => return None,
    };
    Some(flag)
}

impl ModifierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> Modifiers {
        let mut mods = self
            .held
            .iter()
            .filter_map(|code| flag_for(*code))
            .fold(Modifiers::empty(), |acc, flag| acc | flag);
        if self.caps_lock {
            mods |= Modifiers::CAPS_LOCK;
        }
        mods
    }

    /// Records a press and returns the key-down event to deliver.
    pub fn press(&mut self, code: KeyCode, channel: EventChannel) -> KeyEvent {
        if code == KeyCode::CAPS_LOCK {
            self.caps_lock = !self.caps_lock;
        } else if flag_for(code).is_some() {
            self.held.insert(code);
        }
        KeyEvent::with_raw_bits(code, self.modifiers().bits(), channel)
    }

    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }
}
