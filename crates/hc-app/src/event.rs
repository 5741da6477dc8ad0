use hc_core::hotkey::ChordSpec;

/// Emitted once per matching key-down while armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyTriggered {
    pub chord: ChordSpec,
    pub at_ms: i64,
}

/// Whether the held chord can currently fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyCapability {
    /// A key subscription is live.
    Active,
    /// No chord is held, so nothing listens.
    Inert,
    /// Subscribing failed; retried by the status poller.
    Unavailable { reason: String },
}

impl HotkeyCapability {
    pub fn is_degraded(&self) -> bool {
        matches!(self, HotkeyCapability::Unavailable { .. })
    }
}
