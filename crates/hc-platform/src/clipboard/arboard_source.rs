use std::sync::{Mutex, MutexGuard};

use anyhow::Context;
use hc_core::ports::ClipboardSourcePort;
use tracing::warn;

use super::change_counter::HashChangeCounter;

struct ArboardInner {
    clipboard: arboard::Clipboard,
    counter: HashChangeCounter,
}

/// System clipboard through `arboard`.
///
/// One `arboard::Clipboard` lives as long as the source. On X11 the written
/// text is served by that instance, so it must outlive the paste that
/// follows a write.
///
/// `arboard` exposes no change count, so one is derived by hashing the text
/// on every [`ClipboardSourcePort::change_count`] call.
pub struct ArboardClipboardSource {
    inner: Mutex<ArboardInner>,
}

impl ArboardClipboardSource {
    /// Fails when no clipboard backend can be opened (for example without a
    /// display server).
    pub fn new() -> anyhow::Result<Self> {
        let mut clipboard =
            arboard::Clipboard::new().context("Failed to open system clipboard")?;
        let mut counter = HashChangeCounter::new();
        let text = current_text(&mut clipboard)?;
        counter.observe(text.as_deref());
        Ok(Self {
            inner: Mutex::new(ArboardInner { clipboard, counter }),
        })
    }

    fn lock_inner(&self) -> MutexGuard<'_, ArboardInner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Clipboard lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

fn current_text(clipboard: &mut arboard::Clipboard) -> anyhow::Result<Option<String>> {
    match clipboard.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(err) => Err(err).context("Failed to read clipboard text"),
    }
}

impl ClipboardSourcePort for ArboardClipboardSource {
    fn change_count(&self) -> anyhow::Result<u64> {
        let mut inner = self.lock_inner();
        let text = current_text(&mut inner.clipboard)?;
        Ok(inner.counter.observe(text.as_deref()))
    }

    fn read_text(&self) -> anyhow::Result<Option<String>> {
        current_text(&mut self.lock_inner().clipboard)
    }

    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.lock_inner()
            .clipboard
            .set_text(text.to_owned())
            .context("Failed to write clipboard text")
    }
}
