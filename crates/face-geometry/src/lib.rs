//! Facial Geometry
//!
//! Landmark coordinate types and the pure aspect-ratio calculations used by
//! the fatigue analysis pipeline:
//! - EAR (Eye Aspect Ratio) from the 6-point eye contour
//! - MAR (Mouth Aspect Ratio) from the 20-point outer mouth contour

mod landmarks;
mod ratios;

pub use landmarks::{EyeLandmarks, MouthLandmarks, Point2, EYE_POINTS, MOUTH_POINTS};
pub use ratios::{eye_aspect_ratio, mouth_aspect_ratio};

use thiserror::Error;

/// Geometry error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("{region} landmark set has {actual} points, expected {expected}")]
    BadCardinality {
        region: &'static str,
        expected: usize,
        actual: usize,
    },
}
