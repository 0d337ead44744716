use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanStoreError {
    /// The durable write failed; the snapshot is unchanged.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid barcode: {0:?}")]
    InvalidBarcode(String),

    #[error("product not found: {0}")]
    NotFound(String),

    #[error("product lookup request failed: {0}")]
    Request(String),

    #[error("product lookup returned an unreadable payload: {0}")]
    Decode(String),
}
