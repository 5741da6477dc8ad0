use std::sync::{Arc, Mutex};

use hc_core::hotkey::{KeyDisposition, KeyEvent};
use hc_core::ports::{KeyEventHandler, KeyEventSourcePort, KeyMonitorError, SubscriptionId};

use super::registry::HandlerRegistry;

/// In-process key source driven by [`InMemoryKeyEventSource::emit`].
#[derive(Default)]
pub struct InMemoryKeyEventSource {
    registry: HandlerRegistry,
    failure: Mutex<Option<KeyMonitorError>>,
}

impl InMemoryKeyEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a key-down synchronously on the calling thread.
    pub fn emit(&self, event: &KeyEvent) -> KeyDisposition {
        self.registry.dispatch(event)
    }

    /// Makes subsequent subscriptions fail with `failure`, or succeed again
    /// with `None`.
    pub fn fail_subscriptions(&self, failure: Option<KeyMonitorError>) {
        *self
            .failure
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = failure;
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl KeyEventSourcePort for InMemoryKeyEventSource {
    fn subscribe(&self, handler: Arc<dyn KeyEventHandler>) -> Result<SubscriptionId, KeyMonitorError> {
        let failure = self
            .failure
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(self.registry.add(handler))
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.registry.remove(id);
    }
}
