use serde::{Deserialize, Serialize};

use super::ProductSignals;

pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// Normalized product metadata as returned by a product lookup.
///
/// Every field may be absent or empty; consumers go through
/// [`ProductMetadata::display_name`] and [`ProductMetadata::signals`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub name: Option<String>,
    /// Secondary name field (e.g. an English-localized name).
    pub alternate_name: Option<String>,
    #[serde(default)]
    pub category: String,
    pub image_ref: Option<String>,
    #[serde(default)]
    pub ingredients_text: String,
    #[serde(default)]
    pub packaging_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ProductMetadata {
    /// Primary name, then the alternate name, then [`UNKNOWN_PRODUCT_NAME`].
    pub fn display_name(&self) -> String {
        [self.name.as_deref(), self.alternate_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PRODUCT_NAME)
            .to_string()
    }

    pub fn signals(&self) -> ProductSignals {
        ProductSignals {
            name: self.display_name(),
            category: self.category.clone(),
            ingredients_text: self.ingredients_text.clone(),
            packaging_text: self.packaging_text.clone(),
            keywords: self.keywords.clone(),
        }
    }
}
