use hc_core::ports::PasteInjectorPort;
use tracing::info;

/// Injector for builds without keystroke synthesis.
///
/// Pasteback still places the entry on the clipboard; the user pastes it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardOnlyPasteInjector;

impl PasteInjectorPort for ClipboardOnlyPasteInjector {
    fn synthesize_paste(&self) -> anyhow::Result<()> {
        info!("Keystroke synthesis unavailable, entry left on the clipboard");
        Ok(())
    }
}
