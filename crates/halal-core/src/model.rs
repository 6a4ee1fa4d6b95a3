use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification a reference entry can carry. UNKNOWN is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceStatus {
    Halal,
    Haram,
    Musbooh,
}

impl ReferenceStatus {
    /// Parse an explicit status cell. Blank cells and spreadsheet `nan`
    /// placeholders yield `None`, as does any unrecognised label.
    pub fn from_str_loose(s: &str) -> Option<ReferenceStatus> {
        match s.trim().to_uppercase().as_str() {
            "HALAL" => Some(ReferenceStatus::Halal),
            "HARAM" => Some(ReferenceStatus::Haram),
            "MUSBOOH" => Some(ReferenceStatus::Musbooh),
            _ => None,
        }
    }

    /// Classify from free text: "HALAL" without "HARAM" is halal, any
    /// "HARAM" is haram, anything else is doubtful.
    pub fn from_description(text: &str) -> ReferenceStatus {
        let upper = text.to_uppercase();
        if upper.contains("HALAL") && !upper.contains("HARAM") {
            ReferenceStatus::Halal
        } else if upper.contains("HARAM") {
            ReferenceStatus::Haram
        } else {
            ReferenceStatus::Musbooh
        }
    }
}

impl fmt::Display for ReferenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Status::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Halal,
    Haram,
    Musbooh,
    Unknown,
}

impl From<ReferenceStatus> for Status {
    fn from(s: ReferenceStatus) -> Self {
        match s {
            ReferenceStatus::Halal => Status::Halal,
            ReferenceStatus::Haram => Status::Haram,
            ReferenceStatus::Musbooh => Status::Musbooh,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Halal => write!(f, "HALAL"),
            Status::Haram => write!(f, "HARAM"),
            Status::Musbooh => write!(f, "MUSBOOH"),
            Status::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Outcome of resolving a single term against the reference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    pub status: Status,
    pub detail: String,
}

/// Product data as returned by the external product-data service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    pub found: bool,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub labels_tags: Vec<String>,
    /// Alcohol content, unit as supplied by the data source.
    #[serde(default)]
    pub alcohol_value: Option<Decimal>,
    #[serde(default)]
    pub alcohol: Option<Decimal>,
}

impl ProductRecord {
    /// Ingredient text, if the record carries a non-blank one.
    pub fn ingredients(&self) -> Option<&str> {
        self.ingredients_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}
