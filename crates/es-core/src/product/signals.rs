use serde::{Deserialize, Serialize};

/// Text signals describing a product, used as scorer and disposal input.
///
/// Never persisted directly; a [`crate::ScanRecord`] keeps only the fields it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSignals {
    pub name: String,
    pub category: String,
    pub ingredients_text: String,
    pub packaging_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ProductSignals {
    /// Lower-cased blob of every signal, in field order, joined by single spaces.
    pub fn text_blob(&self) -> String {
        let mut parts = vec![
            self.name.as_str(),
            self.category.as_str(),
            self.ingredients_text.as_str(),
            self.packaging_text.as_str(),
        ];
        parts.extend(self.keywords.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}
