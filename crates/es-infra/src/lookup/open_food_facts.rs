use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, debug_span, warn, Instrument};

use es_core::ports::{LookupError, ProductLookupPort};
use es_core::ProductMetadata;

const USER_AGENT: &str = concat!("ecoscan/", env!("CARGO_PKG_VERSION"));

/// Product lookup against the Open Food Facts v2 API.
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client for product lookup")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn product_url(&self, barcode: &str) -> String {
        format!("{}/api/v2/product/{}.json", self.base_url, barcode)
    }
}

#[async_trait]
impl ProductLookupPort for OpenFoodFactsClient {
    async fn lookup(&self, barcode: &str) -> Result<ProductMetadata, LookupError> {
        let url = self.product_url(barcode);
        let span = debug_span!("infra.lookup.open_food_facts", barcode = %barcode);

        async move {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| LookupError::Request(e.to_string()))?;

            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Err(LookupError::NotFound(barcode.to_string()));
            }
            if !status.is_success() {
                warn!(%status, "product lookup returned an error status");
                return Err(LookupError::Request(format!("HTTP {status}")));
            }

            let payload: ProductResponse = response
                .json()
                .await
                .map_err(|e| LookupError::Decode(e.to_string()))?;

            let product = payload
                .into_found_product()
                .ok_or_else(|| LookupError::NotFound(barcode.to_string()))?;

            debug!("product found");
            Ok(normalize(product))
        }
        .instrument(span)
        .await
    }
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: Value,
    product: Option<OffProduct>,
}

impl ProductResponse {
    fn into_found_product(self) -> Option<OffProduct> {
        let found = match &self.status {
            Value::Number(n) => n.as_i64() == Some(1),
            Value::String(s) => s.trim() == "1",
            _ => false,
        };
        if found {
            self.product
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OffProduct {
    product_name: Option<String>,
    product_name_en: Option<String>,
    categories: Option<String>,
    categories_tags: Option<Vec<String>>,
    labels_tags: Option<Vec<String>>,
    packaging: Option<String>,
    packaging_tags: Option<Vec<String>>,
    ingredients_text: Option<String>,
    image_url: Option<String>,
    nova_group: Option<Value>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn nova_group(value: Option<&Value>) -> Option<String> {
    let group = match value? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    (!group.is_empty()).then_some(group)
}

/// Maps the raw payload onto [`ProductMetadata`].
///
/// Packaging text is the packaging tags followed by the free-text packaging
/// field. Keywords collect category and label tags plus a `nova <n>` marker.
fn normalize(product: OffProduct) -> ProductMetadata {
    let categories_tags = product.categories_tags.unwrap_or_default();
    let labels_tags = product.labels_tags.unwrap_or_default();
    let packaging_tags = product.packaging_tags.unwrap_or_default();

    let category = non_empty(product.categories).unwrap_or_else(|| categories_tags.join(" "));

    let packaging_text = format!(
        "{} {}",
        packaging_tags.join(" "),
        product.packaging.unwrap_or_default()
    )
    .trim()
    .to_string();

    let mut keywords: Vec<String> = categories_tags.into_iter().chain(labels_tags).collect();
    if let Some(group) = nova_group(product.nova_group.as_ref()) {
        keywords.push(format!("nova {group}"));
    }

    ProductMetadata {
        name: non_empty(product.product_name),
        alternate_name: non_empty(product.product_name_en),
        category,
        image_ref: non_empty(product.image_url),
        ingredients_text: product.ingredients_text.unwrap_or_default(),
        packaging_text,
        keywords,
    }
}
