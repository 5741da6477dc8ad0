//! Subcommand implementations.

use anyhow::{bail, Context};
use hc_app::{HotclipCore, HotkeyCapability, HotkeyTriggered, StoredChord};
use hc_core::app_dirs::AppDirs;
use hc_core::clipboard::ClipboardEntry;
use hc_core::config::AppConfig;
use hc_core::hotkey::{display_or_unset, ChordSpec, RecordingSignal};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

use crate::bootstrap::{build_chord_store, wire_dependencies};
use crate::cli::Command;

pub async fn execute(command: Command, app_dirs: &AppDirs, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Command::Run => run_daemon(app_dirs, config).await,
        Command::Record => record_chord(app_dirs, config).await,
        Command::ShowChord => show_chord(app_dirs),
        Command::ClearChord => clear_chord(app_dirs),
    }
}

fn build_core(app_dirs: &AppDirs, config: &AppConfig) -> anyhow::Result<HotclipCore> {
    let deps = wire_dependencies(app_dirs, config).context("Failed to assemble dependencies")?;
    Ok(HotclipCore::new(deps, config))
}

async fn run_daemon(app_dirs: &AppDirs, config: &AppConfig) -> anyhow::Result<()> {
    let core = build_core(app_dirs, config)?;
    let mut triggers = core.subscribe_triggers();
    let mut recording = core.subscribe_recording();
    let runtime = core.start(config);

    if let HotkeyCapability::Unavailable { reason } = core.hotkey_capability() {
        warn!(%reason, "Hotkey unavailable, clipboard history still recorded");
    }
    info!(
        chord = %display_or_unset(core.current_chord()),
        poll_interval_ms = config.clipboard.poll_interval().as_millis() as u64,
        "hotclip running, Ctrl-C to stop"
    );

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(err) = signal {
                    error!(error = %err, "Failed to listen for Ctrl-C");
                }
                info!("Shutdown requested");
                break;
            }
            trigger = triggers.recv() => match trigger {
                Ok(trigger) => show_trigger(&core, &trigger, config.clipboard.preview_chars),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Dropped hotkey triggers"),
                Err(RecvError::Closed) => break,
            },
            signal = recording.recv() => match signal {
                Ok(signal) => info!(?signal, "Recording signal"),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Dropped recording signals"),
                Err(RecvError::Closed) => break,
            },
        }
    }

    runtime.shutdown().await;
    Ok(())
}

fn show_trigger(core: &HotclipCore, trigger: &HotkeyTriggered, preview_chars: usize) {
    let entries = core.history_snapshot();
    let at = chrono::DateTime::from_timestamp_millis(trigger.at_ms)
        .map(|at| at.to_rfc3339())
        .unwrap_or_default();
    info!(
        chord = %trigger.chord,
        %at,
        entries = entries.len(),
        head = ?entries.first().map(ClipboardEntry::id),
        "Hotkey triggered"
    );
    // previews go to stdout only, entry content is never logged
    for line in format_history(&entries, preview_chars, trigger.at_ms) {
        println!("{line}");
    }
}

/// One numbered line per entry, newest first.
fn format_history(entries: &[ClipboardEntry], preview_chars: usize, now_ms: i64) -> Vec<String> {
    if entries.is_empty() {
        return vec!["(history is empty)".to_string()];
    }
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{:>2}. {} ({})",
                index + 1,
                entry.preview(preview_chars),
                entry.relative_age(now_ms)
            )
        })
        .collect()
}

async fn record_chord(app_dirs: &AppDirs, config: &AppConfig) -> anyhow::Result<()> {
    let core = build_core(app_dirs, config)?;
    let previous = core.current_chord();
    let mut signals = core.subscribe_recording();

    core.request_start_recording();
    if let HotkeyCapability::Unavailable { reason } = core.hotkey_capability() {
        core.request_cancel_recording();
        bail!("Global key monitoring unavailable: {reason}");
    }
    println!(
        "Press the new hotkey, Escape keeps {}",
        display_or_unset(previous)
    );

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                core.request_cancel_recording();
                println!("Recording cancelled, hotkey: {}", display_or_unset(core.current_chord()));
                return Ok(());
            }
            signal = signals.recv() => match signal {
                Ok(RecordingSignal::Started) => {}
                Ok(RecordingSignal::CandidateRejected { display }) => {
                    println!("{display} is not accepted: use Control or Option, or Command with another modifier");
                }
                Ok(RecordingSignal::Finished { display, .. }) => {
                    println!("Hotkey: {display}");
                    return Ok(());
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => bail!("Hotkey capture stopped unexpectedly"),
            },
        }
    }
}

fn show_chord(app_dirs: &AppDirs) -> anyhow::Result<()> {
    let chords = build_chord_store(app_dirs);
    let chord = match chords.read() {
        StoredChord::Valid(chord) => {
            println!("Hotkey: {chord}");
            chord
        }
        StoredChord::Absent => {
            let chord = ChordSpec::default();
            println!("Hotkey: {chord} (default, nothing persisted)");
            chord
        }
        StoredChord::Invalid(err) => {
            let chord = ChordSpec::default();
            println!("Hotkey: {chord} (default, stored value unusable: {err})");
            chord
        }
    };
    let record = serde_json::to_string(&chord.to_record()).context("Failed to encode chord record")?;
    println!("Record: {record}");
    if let Some(raw) = chords.read_raw().context("Failed to read stored chord")? {
        println!("Stored: {}", String::from_utf8_lossy(&raw));
    }
    Ok(())
}

fn clear_chord(app_dirs: &AppDirs) -> anyhow::Result<()> {
    build_chord_store(app_dirs)
        .clear()
        .context("Failed to delete stored chord")?;
    println!(
        "Persisted hotkey deleted; {} applies on next start",
        ChordSpec::default()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_lines_respect_preview_length() {
        let entries = vec![
            ClipboardEntry::new("a fairly long\nclipboard entry", 120_000).unwrap(),
            ClipboardEntry::new("short", 0).unwrap(),
        ];

        let lines = format_history(&entries, 8, 180_000);

        assert_eq!(lines, vec![" 1. a fairly… (1m ago)", " 2. short (3m ago)"]);
    }

    #[test]
    fn empty_history_gets_a_placeholder_line() {
        assert_eq!(format_history(&[], 80, 0), vec!["(history is empty)"]);
    }
}
