use rust_decimal::Decimal;

use crate::analysis::outcome::{ProductIndicators, Verdict, VerdictReason};
use crate::model::ProductRecord;

/// Alcohol content above this value makes a product haram.
pub const ALCOHOL_THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Combine ingredient counts and product signals into one verdict.
///
/// Precedence, first match wins: certification, alcohol, haram
/// ingredients, doubtful ingredients, otherwise halal. A halal
/// certification overrides everything, including haram ingredients.
pub fn aggregate(
    haram_count: usize,
    musbooh_count: usize,
    has_certification: bool,
    has_alcohol: bool,
) -> Verdict {
    if has_certification {
        Verdict::Halal
    } else if has_alcohol {
        Verdict::Haram(VerdictReason::ContainsAlcohol)
    } else if haram_count > 0 {
        Verdict::Haram(VerdictReason::HaramIngredients)
    } else if musbooh_count > 0 {
        Verdict::Musbooh(VerdictReason::DoubtfulIngredients)
    } else {
        Verdict::Halal
    }
}

/// True when a declared alcohol content is above `ALCOHOL_THRESHOLD`.
/// Missing values count as zero.
pub fn has_alcohol(content: Option<Decimal>) -> bool {
    content.unwrap_or_default() > ALCOHOL_THRESHOLD
}

/// Derive certification and alcohol signals from a product record.
pub fn product_indicators(product: &ProductRecord) -> ProductIndicators {
    let has_certification = product
        .labels_tags
        .iter()
        .any(|tag| tag.to_lowercase().contains("halal"));

    let alcohol = product.alcohol_value.max(product.alcohol);

    ProductIndicators {
        has_certification,
        has_alcohol: has_alcohol(alcohol),
    }
}
