pub mod analysis;
pub mod assistant;
pub mod error;
pub mod model;
pub mod reference;
pub mod resolver;
pub mod sources;

use serde::Serialize;

use analysis::{IngredientAnalysis, ProductIndicators, Verdict};
use error::HalalError;
use model::ProductRecord;
use reference::store::ReferenceStore;
use sources::barcode::Barcode;
use sources::{BarcodeDecoder, ProductSource};

/// Result of checking one product.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProductAssessment {
    /// The product-data service does not know this barcode.
    NotFound { barcode: Barcode },
    /// The product exists but carries no ingredient list.
    NoIngredients {
        barcode: Barcode,
        product: ProductRecord,
    },
    Assessed {
        barcode: Barcode,
        product: ProductRecord,
        analysis: IngredientAnalysis,
        indicators: ProductIndicators,
        verdict: Verdict,
    },
}

impl ProductAssessment {
    pub fn barcode(&self) -> &Barcode {
        match self {
            ProductAssessment::NotFound { barcode }
            | ProductAssessment::NoIngredients { barcode, .. }
            | ProductAssessment::Assessed { barcode, .. } => barcode,
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            ProductAssessment::Assessed { verdict, .. } => Some(*verdict),
            _ => None,
        }
    }
}

/// Main API entry point: validate a barcode, fetch the product and classify it.
///
/// Malformed barcodes are rejected before the product source is contacted.
pub fn assess_barcode(
    raw_barcode: &str,
    source: &dyn ProductSource,
    store: &ReferenceStore,
) -> Result<ProductAssessment, HalalError> {
    let barcode = Barcode::parse(raw_barcode)?;
    tracing::info!(%barcode, backend = source.backend_name(), "looking up product");
    let product = source.fetch(&barcode)?;
    Ok(assess_product(barcode, product, store))
}

/// Decode a barcode from an image, then assess it like a typed barcode.
///
/// Any decoder failure is reported as `BarcodeDecode`.
pub fn scan_barcode_image(
    image: &[u8],
    decoder: &dyn BarcodeDecoder,
    source: &dyn ProductSource,
    store: &ReferenceStore,
) -> Result<ProductAssessment, HalalError> {
    let decoded = decoder
        .decode(image)
        .map_err(|e| match e {
            HalalError::BarcodeDecode(_) => e,
            other => HalalError::BarcodeDecode(other.to_string()),
        })?
        .ok_or(HalalError::NoBarcodeDetected)?;
    assess_barcode(&decoded, source, store)
}

/// Classify an already fetched product record.
pub fn assess_product(
    barcode: Barcode,
    product: ProductRecord,
    store: &ReferenceStore,
) -> ProductAssessment {
    if !product.found {
        return ProductAssessment::NotFound { barcode };
    }

    let Some(ingredients) = product.ingredients() else {
        return ProductAssessment::NoIngredients { barcode, product };
    };

    let findings = analysis::analyze(&ingredients.to_uppercase(), store);
    let indicators = analysis::product_indicators(&product);
    let verdict = analysis::aggregate(
        findings.haram_count(),
        findings.musbooh_count(),
        indicators.has_certification,
        indicators.has_alcohol,
    );

    ProductAssessment::Assessed {
        barcode,
        product,
        analysis: findings,
        indicators,
        verdict,
    }
}
