use async_trait::async_trait;

use super::LookupError;
use crate::product::ProductMetadata;

/// Remote product database keyed by barcode.
#[async_trait]
pub trait ProductLookupPort: Send + Sync {
    async fn lookup(&self, barcode: &str) -> Result<ProductMetadata, LookupError>;
}
