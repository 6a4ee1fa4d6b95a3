pub mod ingredients;
pub mod outcome;
pub mod verdict;

pub use ingredients::analyze;
pub use outcome::{IngredientAnalysis, IngredientFinding, ProductIndicators, Verdict};
pub use verdict::{aggregate, product_indicators};
