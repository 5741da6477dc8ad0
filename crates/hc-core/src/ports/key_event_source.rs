use std::fmt;
use std::sync::Arc;

use super::errors::KeyMonitorError;
use crate::hotkey::{KeyDisposition, KeyEvent};

/// Opaque handle returned by [`KeyEventSourcePort::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Receives key-down events on the key source's thread.
pub trait KeyEventHandler: Send + Sync {
    fn on_key_down(&self, event: &KeyEvent) -> KeyDisposition;
}

/// System-wide key-down delivery.
///
/// Implementations must tolerate `subscribe` and `unsubscribe` being called
/// from inside [`KeyEventHandler::on_key_down`]: dispatch iterates a snapshot
/// of the handlers taken outside the source's own lock.
///
/// An event is swallowed when any handler returns [`KeyDisposition::Swallow`]
/// and the event's channel allows suppression.
pub trait KeyEventSourcePort: Send + Sync {
    fn subscribe(&self, handler: Arc<dyn KeyEventHandler>) -> Result<SubscriptionId, KeyMonitorError>;

    /// Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}
