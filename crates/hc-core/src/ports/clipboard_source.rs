/// Shared system clipboard, text only.
///
/// The change counter increases whenever any process writes the clipboard.
/// Consumers compare counters and never assume anything about the step size.
pub trait ClipboardSourcePort: Send + Sync {
    fn change_count(&self) -> anyhow::Result<u64>;

    /// Current text payload, `None` when the clipboard holds no text.
    fn read_text(&self) -> anyhow::Result<Option<String>>;

    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}
