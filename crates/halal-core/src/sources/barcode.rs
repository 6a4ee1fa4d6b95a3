use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HalalError;

/// Barcode lengths accepted for product lookup (EAN-8, UPC-A, EAN-13).
pub const VALID_LENGTHS: &[usize] = &[8, 12, 13];

/// A well-formed product barcode: ASCII digits only, 8, 12 or 13 long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Validate `raw` exactly as given. Padding is not stripped.
    pub fn parse(raw: &str) -> Result<Barcode, HalalError> {
        if !raw.is_empty()
            && raw.bytes().all(|b| b.is_ascii_digit())
            && VALID_LENGTHS.contains(&raw.len())
        {
            Ok(Barcode(raw.to_string()))
        } else {
            Err(HalalError::InvalidBarcode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Barcode {
    type Error = HalalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Barcode::parse(&s)
    }
}

impl From<Barcode> for String {
    fn from(b: Barcode) -> Self {
        b.0
    }
}
