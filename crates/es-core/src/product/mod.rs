mod metadata;
mod signals;

pub use metadata::{ProductMetadata, UNKNOWN_PRODUCT_NAME};
pub use signals::ProductSignals;
