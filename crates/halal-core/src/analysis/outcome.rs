use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Status;

/// An ingredient flagged during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientFinding {
    /// Token as it appeared in the ingredient text, trimmed.
    pub term: String,
    /// Explanation from the reference store, or the keyword heuristic.
    pub detail: String,
}

/// Findings for one ingredient list, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAnalysis {
    pub haram: Vec<IngredientFinding>,
    pub musbooh: Vec<IngredientFinding>,
}

impl IngredientAnalysis {
    pub fn haram_count(&self) -> usize {
        self.haram.len()
    }

    pub fn musbooh_count(&self) -> usize {
        self.musbooh.len()
    }

    pub fn is_clean(&self) -> bool {
        self.haram.is_empty() && self.musbooh.is_empty()
    }
}

/// Product signals that sit alongside the ingredient list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIndicators {
    pub has_certification: bool,
    pub has_alcohol: bool,
}

/// Why a product was classified HARAM or MUSBOOH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictReason {
    ContainsAlcohol,
    HaramIngredients,
    DoubtfulIngredients,
}

impl fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictReason::ContainsAlcohol => write!(f, "contains alcohol"),
            VerdictReason::HaramIngredients => write!(f, "contains haram ingredients"),
            VerdictReason::DoubtfulIngredients => write!(f, "doubtful ingredients"),
        }
    }
}

/// Overall classification of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Halal,
    Haram(VerdictReason),
    Musbooh(VerdictReason),
}

impl Verdict {
    pub fn status(&self) -> Status {
        match self {
            Verdict::Halal => Status::Halal,
            Verdict::Haram(_) => Status::Haram,
            Verdict::Musbooh(_) => Status::Musbooh,
        }
    }

    pub fn reason(&self) -> Option<VerdictReason> {
        match self {
            Verdict::Halal => None,
            Verdict::Haram(r) | Verdict::Musbooh(r) => Some(*r),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            None => write!(f, "{}", self.status()),
            Some(reason) => write!(f, "{} - {}", self.status(), reason),
        }
    }
}
