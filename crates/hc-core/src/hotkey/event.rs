use super::{KeyCode, Modifiers};

/// How an event reached the process.
///
/// Only events from a system-wide tap can be swallowed; passive observers see
/// the key after it was already delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventChannel {
    Global,
    Local,
    ObserveOnly,
}

impl EventChannel {
    pub fn can_suppress(self) -> bool {
        !matches!(self, EventChannel::ObserveOnly)
    }
}

/// A key-down as delivered by a key event source.
///
/// `modifier_bits` carries the raw mask, incidental flags included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    pub modifier_bits: u32,
    pub channel: EventChannel,
}

impl KeyEvent {
    pub fn new(key_code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifier_bits: modifiers.bits(),
            channel: EventChannel::Global,
        }
    }

    pub fn with_raw_bits(key_code: KeyCode, modifier_bits: u32, channel: EventChannel) -> Self {
        Self {
            key_code,
            modifier_bits,
            channel,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::normalized(self.modifier_bits)
    }

    pub fn is_escape(&self) -> bool {
        self.key_code == KeyCode::ESCAPE
    }
}

/// Handler verdict for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Pass,
    Swallow,
}
