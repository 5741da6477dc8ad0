use anyhow::Context;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use hc_core::ports::PasteInjectorPort;
use tracing::debug;

#[cfg(target_os = "macos")]
const PASTE_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const PASTE_MODIFIER: Key = Key::Control;

/// Synthesizes the platform paste shortcut (⌘V, or Ctrl+V elsewhere).
///
/// A fresh `Enigo` is opened per paste; the connection is not `Send` on
/// every backend.
#[derive(Debug, Default)]
pub struct EnigoPasteInjector;

impl EnigoPasteInjector {
    pub fn new() -> Self {
        Self
    }
}

impl PasteInjectorPort for EnigoPasteInjector {
    fn synthesize_paste(&self) -> anyhow::Result<()> {
        let mut enigo =
            Enigo::new(&Settings::default()).context("Failed to initialize Enigo for paste")?;

        enigo
            .key(PASTE_MODIFIER, Direction::Press)
            .context("Failed to press paste modifier")?;
        let clicked = enigo
            .key(Key::Unicode('v'), Direction::Click)
            .context("Failed to click paste key");
        // always release the modifier, even when the click failed
        enigo
            .key(PASTE_MODIFIER, Direction::Release)
            .context("Failed to release paste modifier")?;
        clicked?;

        debug!("Paste keystroke synthesized");
        Ok(())
    }
}
