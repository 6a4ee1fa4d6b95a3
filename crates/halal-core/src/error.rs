use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum HalalError {
    #[error("failed to load reference data from {path}: {reason}")]
    ReferenceLoad { path: PathBuf, reason: String },

    #[error("unsupported reference file '{0}'. Use a .csv, .xlsx or .json file")]
    UnsupportedReference(PathBuf),

    #[error("invalid barcode format '{0}'. Must be 8, 12, or 13 digits")]
    InvalidBarcode(String),

    #[error("no barcode detected in image")]
    NoBarcodeDetected,

    #[error("barcode decoding failed: {0}")]
    BarcodeDecode(String),

    #[error("product lookup failed: {0}")]
    ProductLookup(String),

    #[error("product lookup returned HTTP {status} for barcode {barcode}")]
    ProductLookupStatus { barcode: String, status: u16 },

    #[error("logo inference failed: {0}")]
    LogoInference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// User-facing category every failure is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    Error,
    Unknown,
    Info,
}

impl HalalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HalalError::InvalidBarcode(_) | HalalError::NoBarcodeDetected => ErrorCategory::Info,
            HalalError::ProductLookupStatus { .. } | HalalError::LogoInference(_) => {
                ErrorCategory::Unknown
            }
            _ => ErrorCategory::Error,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Error => write!(f, "ERROR"),
            ErrorCategory::Unknown => write!(f, "UNKNOWN"),
            ErrorCategory::Info => write!(f, "INFO"),
        }
    }
}
