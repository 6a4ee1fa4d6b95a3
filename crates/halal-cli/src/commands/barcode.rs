use halal_core::error::HalalError;
use halal_core::sources::openfoodfacts::{OpenFoodFactsSource, ProductApiConfig};
use std::path::PathBuf;
use std::time::Duration;

use crate::commands::load_store;
use crate::output;

pub fn run(
    reference: Option<PathBuf>,
    barcode: &str,
    api_url: String,
    timeout_secs: u64,
    output_format: &str,
) -> Result<(), HalalError> {
    let store = load_store(reference);
    let source = OpenFoodFactsSource::new(ProductApiConfig {
        base_url: api_url,
        timeout: Duration::from_secs(timeout_secs),
    })?;

    let assessment = halal_core::assess_barcode(barcode, &source, &store)?;

    match output_format {
        "json" => output::json::print(&assessment)?,
        _ => output::table::print_assessment(&assessment),
    }

    Ok(())
}
