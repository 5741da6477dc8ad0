use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use hc_core::hotkey::{KeyDisposition, KeyEvent};
use hc_core::ports::{KeyEventHandler, SubscriptionId};

type Entry = (SubscriptionId, Arc<dyn KeyEventHandler>);

/// Subscriber list shared by the key sources.
///
/// [`HandlerRegistry::dispatch`] copies the list and releases the lock
/// before calling any handler, so handlers may subscribe or unsubscribe
/// re-entrantly. A handler removed mid-dispatch can still see the event
/// that was being delivered.
#[derive(Default)]
pub struct HandlerRegistry {
    next_id: AtomicU64,
    handlers: Mutex<Vec<Entry>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn handlers(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.handlers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, handler: Arc<dyn KeyEventHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.handlers().push((id, handler));
        id
    }

    pub fn remove(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `event` to every current handler.
    ///
    /// Returns [`KeyDisposition::Swallow`] when any handler asked for it and
    /// the event's channel can be suppressed.
    pub fn dispatch(&self, event: &KeyEvent) -> KeyDisposition {
        let snapshot: Vec<Arc<dyn KeyEventHandler>> = self
            .handlers()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        let mut swallow = false;
        for handler in snapshot {
            if handler.on_key_down(event) == KeyDisposition::Swallow {
                swallow = true;
            }
        }

        if swallow && event.channel.can_suppress() {
            KeyDisposition::Swallow
        } else {
            KeyDisposition::Pass
        }
    }
}
