use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Opaque identity of a captured clipboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl_id!(EntryId);
