/// Synthesizes the platform paste keystroke into the focused application.
pub trait PasteInjectorPort: Send + Sync {
    fn synthesize_paste(&self) -> anyhow::Result<()>;
}
