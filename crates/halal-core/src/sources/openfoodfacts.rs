use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::HalalError;
use crate::model::ProductRecord;
use crate::sources::barcode::Barcode;
use crate::sources::ProductSource;

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how long to wait for the product-data service.
#[derive(Debug, Clone)]
pub struct ProductApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ProductApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Product lookup against the Open Food Facts v0 product API.
///
/// One GET per lookup, no retries.
pub struct OpenFoodFactsSource {
    client: reqwest::blocking::Client,
    config: ProductApiConfig,
}

impl OpenFoodFactsSource {
    pub fn new(config: ProductApiConfig) -> Result<Self, HalalError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("halal-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HalalError::ProductLookup(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn product_url(&self, barcode: &Barcode) -> String {
        format!(
            "{}/api/v0/product/{}.json",
            self.config.base_url.trim_end_matches('/'),
            barcode
        )
    }
}

impl ProductSource for OpenFoodFactsSource {
    fn fetch(&self, barcode: &Barcode) -> Result<ProductRecord, HalalError> {
        let url = self.product_url(barcode);
        tracing::debug!(%url, "fetching product");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| HalalError::ProductLookup(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HalalError::ProductLookupStatus {
                barcode: barcode.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| HalalError::ProductLookup(e.to_string()))?;
        parse_product_response(&body)
    }

    fn backend_name(&self) -> &str {
        "openfoodfacts"
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    product: Option<ApiProduct>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiProduct {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    ingredients_text: Option<String>,
    #[serde(default)]
    labels_tags: Vec<String>,
    #[serde(default)]
    alcohol_value: Option<Value>,
    #[serde(default)]
    alcohol: Option<Value>,
    #[serde(default)]
    nutriments: Option<ApiNutriments>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiNutriments {
    #[serde(default)]
    alcohol_value: Option<Value>,
    #[serde(default)]
    alcohol: Option<Value>,
}

/// Parse an Open Food Facts product response body.
///
/// `status == 1` marks a found product. Alcohol fields are read from the
/// product and from its nutriments, as numbers or numeric strings.
pub fn parse_product_response(body: &str) -> Result<ProductRecord, HalalError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    let found = response.status.as_i64() == Some(1) || response.status.as_str() == Some("1");
    if !found {
        return Ok(ProductRecord::default());
    }

    let product = response.product.unwrap_or_default();
    let nutriments = product.nutriments.unwrap_or_default();

    Ok(ProductRecord {
        found: true,
        name: non_blank_or(product.product_name, "N/A"),
        brand: non_blank_or(product.brands, "N/A"),
        ingredients_text: product.ingredients_text,
        labels_tags: product.labels_tags,
        alcohol_value: max_decimal(
            product.alcohol_value.as_ref(),
            nutriments.alcohol_value.as_ref(),
        ),
        alcohol: max_decimal(product.alcohol.as_ref(), nutriments.alcohol.as_ref()),
    })
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn max_decimal(a: Option<&Value>, b: Option<&Value>) -> Option<Decimal> {
    match (a.and_then(value_to_decimal), b.and_then(value_to_decimal)) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, y) => x.or(y),
    }
}

fn value_to_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().replace(',', "."),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
