use std::sync::Arc;

use hc_core::ports::{KeyEventHandler, KeyEventSourcePort, KeyMonitorError, SubscriptionId};
use tracing::debug;

/// Key source for builds or sessions without global key monitoring.
///
/// Every subscription fails, leaving the hotkey degraded.
pub struct UnsupportedKeyEventSource {
    reason: String,
}

impl UnsupportedKeyEventSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl KeyEventSourcePort for UnsupportedKeyEventSource {
    fn subscribe(&self, _handler: Arc<dyn KeyEventHandler>) -> Result<SubscriptionId, KeyMonitorError> {
        debug!(reason = %self.reason, "Key subscription refused");
        Err(KeyMonitorError::Unsupported(self.reason.clone()))
    }

    fn unsubscribe(&self, _id: SubscriptionId) {}
}
