use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{KeyCode, KeyEvent, Modifiers};

/// Configuration key holding the persisted chord.
pub const CHORD_CONFIG_KEY: &str = "hotkey.chord";

#[derive(Debug, Error)]
pub enum ChordCodecError {
    #[error("chord record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("chord record describes an invalid chord: {0}")]
    Invalid(String),
}

/// Why a candidate chord was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChordRejection {
    #[error("escape cannot be part of a chord")]
    Escape,

    #[error("chord needs command, control or option")]
    NoPrimaryModifier,

    #[error("command alone collides with application shortcuts")]
    CommandOnly,
}

/// Key code plus normalized modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChordSpec {
    key_code: KeyCode,
    modifiers: Modifiers,
}

/// On-disk layout of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordRecord {
    pub key_code: u16,
    pub modifier_bits: u32,
}

impl ChordSpec {
    pub fn new(key_code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers: modifiers & Modifiers::CHORD,
        }
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self::new(event.key_code, event.modifiers())
    }

    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn validate(&self) -> Result<(), ChordRejection> {
        if self.key_code == KeyCode::ESCAPE {
            return Err(ChordRejection::Escape);
        }
        if !self.modifiers.has_primary() {
            return Err(ChordRejection::NoPrimaryModifier);
        }
        if self.modifiers == Modifiers::COMMAND {
            return Err(ChordRejection::CommandOnly);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Exact match: same key and identical normalized modifiers.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key_code == self.key_code && event.modifiers() == self.modifiers
    }

    pub fn to_record(&self) -> ChordRecord {
        ChordRecord {
            key_code: self.key_code.raw(),
            modifier_bits: self.modifiers.bits(),
        }
    }

    /// Rebuilds a chord from its record, rejecting chords that fail validation.
    pub fn from_record(record: ChordRecord) -> Result<Self, ChordCodecError> {
        let chord = Self::new(
            KeyCode(record.key_code),
            Modifiers::normalized(record.modifier_bits),
        );
        chord
            .validate()
            .map_err(|reason| ChordCodecError::Invalid(reason.to_string()))?;
        Ok(chord)
    }

    pub fn encode(&self) -> Result<Vec<u8>, ChordCodecError> {
        Ok(serde_json::to_vec(&self.to_record())?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ChordCodecError> {
        let record: ChordRecord = serde_json::from_slice(bytes)?;
        Self::from_record(record)
    }
}

impl Default for ChordSpec {
    /// ⇧⌘V
    fn default() -> Self {
        Self::new(KeyCode::V, Modifiers::COMMAND | Modifiers::SHIFT)
    }
}

impl fmt::Display for ChordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifiers, self.key_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::EventChannel;

    fn chord(mods: Modifiers) -> ChordSpec {
        ChordSpec::new(KeyCode::V, mods)
    }

    #[test]
    fn validity_rules() {
        assert!(!chord(Modifiers::COMMAND).is_valid());
        assert!(chord(Modifiers::COMMAND | Modifiers::SHIFT).is_valid());
        assert!(chord(Modifiers::CONTROL).is_valid());
        assert!(chord(Modifiers::OPTION).is_valid());
        assert!(!chord(Modifiers::SHIFT).is_valid());
        assert!(!chord(Modifiers::empty()).is_valid());
        assert_eq!(
            ChordSpec::new(KeyCode::ESCAPE, Modifiers::CONTROL).validate(),
            Err(ChordRejection::Escape)
        );
    }

    #[test]
    fn matching_requires_identical_modifiers() {
        let held = ChordSpec::default();
        let extra = KeyEvent::new(
            KeyCode::V,
            Modifiers::COMMAND | Modifiers::SHIFT | Modifiers::CONTROL,
        );
        assert!(!held.matches(&extra));
        assert!(held.matches(&KeyEvent::new(KeyCode::V, Modifiers::COMMAND | Modifiers::SHIFT)));
        assert!(!held.matches(&KeyEvent::new(KeyCode::C, Modifiers::COMMAND | Modifiers::SHIFT)));
    }

    #[test]
    fn matching_ignores_incidental_flags() {
        let held = ChordSpec::default();
        let raw = (Modifiers::COMMAND | Modifiers::SHIFT | Modifiers::CAPS_LOCK).bits();
        let event = KeyEvent::with_raw_bits(KeyCode::V, raw, EventChannel::Global);
        assert!(held.matches(&event));
    }

    #[test]
    fn display_lists_symbols_then_key() {
        assert_eq!(ChordSpec::default().to_string(), "⇧⌘V");
        let chord = ChordSpec::new(KeyCode::K, Modifiers::CONTROL | Modifiers::OPTION);
        assert_eq!(chord.to_string(), "⌃⌥K");
        assert_eq!(
            ChordSpec::new(KeyCode(0x70), Modifiers::CONTROL).to_string(),
            "⌃Key#112"
        );
    }

    #[test]
    fn record_layout_is_stable() {
        let bytes = ChordSpec::default().encode().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["key_code"], 9);
        assert_eq!(value["modifier_bits"], (1 << 17) | (1 << 20));
        assert_eq!(ChordSpec::decode(&bytes).unwrap(), ChordSpec::default());
    }

    #[test]
    fn decode_rejects_garbage_and_invalid_chords() {
        assert!(matches!(
            ChordSpec::decode(b"not json"),
            Err(ChordCodecError::Malformed(_))
        ));
        let command_only = br#"{"key_code":9,"modifier_bits":1048576}"#;
        assert!(matches!(
            ChordSpec::decode(command_only),
            Err(ChordCodecError::Invalid(_))
        ));
    }
}
