//! Dependency grouping for [`crate::HotclipCore`] construction.
//!
//! Plain parameter bundle: no defaults, no build steps.

use std::sync::Arc;
use hc_core::ports::*;

pub struct CoreDeps {
    pub clipboard: Arc<dyn ClipboardSourcePort>,
    pub paste_injector: Arc<dyn PasteInjectorPort>,
    pub key_source: Arc<dyn KeyEventSourcePort>,
    pub config_store: Arc<dyn ConfigStorePort>,
    pub clock: Arc<dyn ClockPort>,
}
