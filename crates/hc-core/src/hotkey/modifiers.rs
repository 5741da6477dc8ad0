use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Device-independent modifier mask as reported by the key monitor.
    ///
    /// Only [`Modifiers::CHORD`] members take part in chords; the other flags
    /// arrive on real events and are stripped by [`Modifiers::normalized`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const CAPS_LOCK = 1 << 16;
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const OPTION = 1 << 19;
        const COMMAND = 1 << 20;
        const NUMERIC_PAD = 1 << 21;
        const HELP = 1 << 22;
        const FUNCTION = 1 << 23;

        const CHORD = Self::SHIFT.bits()
            | Self::CONTROL.bits()
            | Self::OPTION.bits()
            | Self::COMMAND.bits();
    }
}

impl Modifiers {
    /// Intersects raw event bits with the chord modifier set.
    pub fn normalized(raw: u32) -> Self {
        Self::from_bits_truncate(raw) & Self::CHORD
    }

    /// True when at least one of command, control or option is held.
    pub fn has_primary(self) -> bool {
        self.intersects(Self::COMMAND | Self::CONTROL | Self::OPTION)
    }
}

impl fmt::Display for Modifiers {
    /// Renders in the canonical ⌃⌥⇧⌘ order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, symbol) in [
            (Self::CONTROL, "⌃"),
            (Self::OPTION, "⌥"),
            (Self::SHIFT, "⇧"),
            (Self::COMMAND, "⌘"),
        ] {
            if self.contains(flag) {
                f.write_str(symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_incidental_flags() {
        let raw = (Modifiers::COMMAND | Modifiers::CAPS_LOCK | Modifiers::FUNCTION).bits() | 0x100;
        assert_eq!(Modifiers::normalized(raw), Modifiers::COMMAND);
    }

    #[test]
    fn display_uses_canonical_order() {
        let all = Modifiers::COMMAND | Modifiers::SHIFT | Modifiers::OPTION | Modifiers::CONTROL;
        assert_eq!(all.to_string(), "⌃⌥⇧⌘");
        assert_eq!((Modifiers::SHIFT | Modifiers::COMMAND).to_string(), "⇧⌘");
    }
}
