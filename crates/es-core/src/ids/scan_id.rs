use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of a persisted scan, generated once when the scan is saved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScanId(String);

impl_id!(ScanId);
