use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::usecases::clipboard::{ClipboardHistoryEngine, PollOutcome};
use crate::usecases::hotkey::HotkeyCaptureService;

/// Polls the clipboard every `period` until `token` is cancelled.
pub fn spawn_clipboard_poller(
    engine: Arc<ClipboardHistoryEngine>,
    period: Duration,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(period_ms = period.as_millis() as u64, "Clipboard poller started");

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    if let PollOutcome::Captured(id) = engine.poll() {
                        debug!(entry_id = %id, entries = engine.len(), "History updated");
                    }
                }
            }
        }
        info!("Clipboard poller stopped");
    })
}

/// Periodically retries a degraded hotkey subscription.
pub fn spawn_status_poller(
    capture: Arc<HotkeyCaptureService>,
    period: Duration,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    if capture.capability().is_degraded() {
                        capture.rearm_if_degraded();
                    }
                }
            }
        }
        debug!("Hotkey status poller stopped");
    })
}
