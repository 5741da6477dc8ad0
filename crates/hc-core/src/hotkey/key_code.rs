//! Platform virtual key codes.
//!
//! Values follow the ANSI keyboard layout virtual key codes used by the
//! system key monitor, so a code read from an event can be stored and
//! compared without translation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const A: KeyCode = KeyCode(0x00);
    pub const S: KeyCode = KeyCode(0x01);
    pub const D: KeyCode = KeyCode(0x02);
    pub const F: KeyCode = KeyCode(0x03);
    pub const H: KeyCode = KeyCode(0x04);
    pub const G: KeyCode = KeyCode(0x05);
    pub const Z: KeyCode = KeyCode(0x06);
    pub const X: KeyCode = KeyCode(0x07);
    pub const C: KeyCode = KeyCode(0x08);
    pub const V: KeyCode = KeyCode(0x09);
    pub const B: KeyCode = KeyCode(0x0B);
    pub const Q: KeyCode = KeyCode(0x0C);
    pub const W: KeyCode = KeyCode(0x0D);
    pub const E: KeyCode = KeyCode(0x0E);
    pub const R: KeyCode = KeyCode(0x0F);
    pub const Y: KeyCode = KeyCode(0x10);
    pub const T: KeyCode = KeyCode(0x11);
    pub const O: KeyCode = KeyCode(0x1F);
    pub const U: KeyCode = KeyCode(0x20);
    pub const I: KeyCode = KeyCode(0x22);
    pub const P: KeyCode = KeyCode(0x23);
    pub const L: KeyCode = KeyCode(0x25);
    pub const J: KeyCode = KeyCode(0x26);
    pub const K: KeyCode = KeyCode(0x28);
    pub const N: KeyCode = KeyCode(0x2D);
    pub const M: KeyCode = KeyCode(0x2E);

    pub const DIGIT_1: KeyCode = KeyCode(0x12);
    pub const DIGIT_2: KeyCode = KeyCode(0x13);
    pub const DIGIT_3: KeyCode = KeyCode(0x14);
    pub const DIGIT_4: KeyCode = KeyCode(0x15);
    pub const DIGIT_6: KeyCode = KeyCode(0x16);
    pub const DIGIT_5: KeyCode = KeyCode(0x17);
    pub const DIGIT_9: KeyCode = KeyCode(0x19);
    pub const DIGIT_7: KeyCode = KeyCode(0x1A);
    pub const DIGIT_8: KeyCode = KeyCode(0x1C);
    pub const DIGIT_0: KeyCode = KeyCode(0x1D);

    pub const EQUAL: KeyCode = KeyCode(0x18);
    pub const MINUS: KeyCode = KeyCode(0x1B);
    pub const RIGHT_BRACKET: KeyCode = KeyCode(0x1E);
    pub const LEFT_BRACKET: KeyCode = KeyCode(0x21);
    pub const QUOTE: KeyCode = KeyCode(0x27);
    pub const SEMICOLON: KeyCode = KeyCode(0x29);
    pub const BACKSLASH: KeyCode = KeyCode(0x2A);
    pub const COMMA: KeyCode = KeyCode(0x2B);
    pub const SLASH: KeyCode = KeyCode(0x2C);
    pub const PERIOD: KeyCode = KeyCode(0x2F);
    pub const GRAVE: KeyCode = KeyCode(0x32);

    pub const RETURN: KeyCode = KeyCode(0x24);
    pub const TAB: KeyCode = KeyCode(0x30);
    pub const SPACE: KeyCode = KeyCode(0x31);
    pub const DELETE: KeyCode = KeyCode(0x33);
    pub const ESCAPE: KeyCode = KeyCode(0x35);
    pub const FORWARD_DELETE: KeyCode = KeyCode(0x75);
    pub const HOME: KeyCode = KeyCode(0x73);
    pub const END: KeyCode = KeyCode(0x77);
    pub const PAGE_UP: KeyCode = KeyCode(0x74);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x79);

    pub const RIGHT_COMMAND: KeyCode = KeyCode(0x36);
    pub const COMMAND: KeyCode = KeyCode(0x37);
    pub const SHIFT: KeyCode = KeyCode(0x38);
    pub const CAPS_LOCK: KeyCode = KeyCode(0x39);
    pub const OPTION: KeyCode = KeyCode(0x3A);
    pub const CONTROL: KeyCode = KeyCode(0x3B);
    pub const RIGHT_SHIFT: KeyCode = KeyCode(0x3C);
    pub const RIGHT_OPTION: KeyCode = KeyCode(0x3D);
    pub const RIGHT_CONTROL: KeyCode = KeyCode(0x3E);
    pub const FUNCTION: KeyCode = KeyCode(0x3F);

    pub const F1: KeyCode = KeyCode(0x7A);
    pub const F2: KeyCode = KeyCode(0x78);
    pub const F3: KeyCode = KeyCode(0x63);
    pub const F4: KeyCode = KeyCode(0x76);
    pub const F5: KeyCode = KeyCode(0x60);
    pub const F6: KeyCode = KeyCode(0x61);
    pub const F7: KeyCode = KeyCode(0x62);
    pub const F8: KeyCode = KeyCode(0x64);
    pub const F9: KeyCode = KeyCode(0x65);
    pub const F10: KeyCode = KeyCode(0x6D);
    pub const F11: KeyCode = KeyCode(0x67);
    pub const F12: KeyCode = KeyCode(0x6F);

    pub const LEFT_ARROW: KeyCode = KeyCode(0x7B);
    pub const RIGHT_ARROW: KeyCode = KeyCode(0x7C);
    pub const DOWN_ARROW: KeyCode = KeyCode(0x7D);
    pub const UP_ARROW: KeyCode = KeyCode(0x7E);

    pub fn raw(self) -> u16 {
        self.0
    }

    /// True for keys that only ever act as modifiers.
    pub fn is_modifier(self) -> bool {
        matches!(self.0, 0x36..=0x3F)
    }

    /// Short label used in chord displays, `None` for unmapped codes.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::DIGIT_0 => "0",
            Self::DIGIT_1 => "1",
            Self::DIGIT_2 => "2",
            Self::DIGIT_3 => "3",
            Self::DIGIT_4 => "4",
            Self::DIGIT_5 => "5",
            Self::DIGIT_6 => "6",
            Self::DIGIT_7 => "7",
            Self::DIGIT_8 => "8",
            Self::DIGIT_9 => "9",
            Self::EQUAL => "=",
            Self::MINUS => "-",
            Self::RIGHT_BRACKET => "]",
            Self::LEFT_BRACKET => "[",
            Self::QUOTE => "'",
            Self::SEMICOLON => ";",
            Self::BACKSLASH => "\\",
            Self::COMMA => ",",
            Self::SLASH => "/",
            Self::PERIOD => ".",
            Self::GRAVE => "`",
            Self::RETURN => "↩",
            Self::TAB => "⇥",
            Self::SPACE => "Space",
            Self::DELETE => "⌫",
            Self::ESCAPE => "Esc",
            Self::FORWARD_DELETE => "⌦",
            Self::HOME => "↖",
            Self::END => "↘",
            Self::PAGE_UP => "⇞",
            Self::PAGE_DOWN => "⇟",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
            Self::LEFT_ARROW => "←",
            Self::RIGHT_ARROW => "→",
            Self::DOWN_ARROW => "↓",
            Self::UP_ARROW => "↑",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Key#{}", self.0),
        }
    }
}

impl From<u16> for KeyCode {
    fn from(raw: u16) -> Self {
        KeyCode(raw)
    }
}
