pub mod barcode;
pub mod logo;
pub mod openfoodfacts;

use crate::error::HalalError;
use crate::model::ProductRecord;
use barcode::Barcode;

/// Backend that looks up product data by barcode.
pub trait ProductSource: Send + Sync {
    /// Fetch the record for `barcode`. A product the service does not know
    /// is `Ok` with `found == false`; transport and HTTP failures are errors.
    fn fetch(&self, barcode: &Barcode) -> Result<ProductRecord, HalalError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Backend that decodes a barcode from image bytes.
pub trait BarcodeDecoder: Send + Sync {
    /// Returns the decoded payload, or `None` when no barcode is visible.
    /// Failures should be `HalalError::BarcodeDecode`.
    fn decode(&self, image: &[u8]) -> Result<Option<String>, HalalError>;
}

/// Label produced by a logo detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoLabel {
    LogoDetected,
    NoLogo,
}

/// Backend that looks for a halal certification logo in image bytes.
pub trait LogoDetector: Send + Sync {
    /// Returns the predicted label and its confidence in `[0, 1]`.
    fn detect(&self, image: &[u8]) -> Result<(LogoLabel, f32), HalalError>;
}
