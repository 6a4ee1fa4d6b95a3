use halal_core::analysis::verdict::has_alcohol;
use halal_core::analysis::{self, ProductIndicators};
use halal_core::error::HalalError;
use rust_decimal::Decimal;
use serde_json::json;
use std::path::PathBuf;

use crate::commands::load_store;
use crate::output;

pub fn run(
    reference: Option<PathBuf>,
    text: &str,
    certified: bool,
    alcohol: Option<Decimal>,
    output_format: &str,
) -> Result<(), HalalError> {
    let store = load_store(reference);

    let result = analysis::analyze(text, &store);
    let indicators = ProductIndicators {
        has_certification: certified,
        has_alcohol: has_alcohol(alcohol),
    };
    let verdict = analysis::aggregate(
        result.haram_count(),
        result.musbooh_count(),
        indicators.has_certification,
        indicators.has_alcohol,
    );

    match output_format {
        "json" => output::json::print(&json!({
            "analysis": result,
            "indicators": indicators,
            "verdict": verdict,
        }))?,
        _ => {
            output::table::print_analysis(&result);
            output::table::print_verdict(&verdict);
        }
    }

    Ok(())
}
