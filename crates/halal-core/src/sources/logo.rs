use serde::Serialize;

use crate::model::Status;
use crate::sources::{LogoDetector, LogoLabel};

/// A logo prediction is accepted only above this confidence.
pub const LOGO_CONFIDENCE_THRESHOLD: f32 = 0.55;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoAssessment {
    pub detected: bool,
    pub confidence: f32,
    /// HALAL when a logo was accepted, UNKNOWN otherwise.
    pub status: Status,
}

/// Apply the acceptance threshold to a detector's prediction.
pub fn accept_logo(label: LogoLabel, confidence: f32) -> LogoAssessment {
    let detected = label == LogoLabel::LogoDetected && confidence > LOGO_CONFIDENCE_THRESHOLD;
    LogoAssessment {
        detected,
        confidence,
        status: if detected {
            Status::Halal
        } else {
            Status::Unknown
        },
    }
}

/// Run the detector over an image. Inference failures are logged and
/// reported as no logo with zero confidence.
pub fn recognize_logo(detector: &dyn LogoDetector, image: &[u8]) -> LogoAssessment {
    match detector.detect(image) {
        Ok((label, confidence)) => accept_logo(label, confidence),
        Err(e) => {
            tracing::warn!(error = %e, "logo inference failed, treating as no logo");
            accept_logo(LogoLabel::NoLogo, 0.0)
        }
    }
}
