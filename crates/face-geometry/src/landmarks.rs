//! Landmark coordinate types

use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// Points in a single eye contour (dlib 36-41 / 42-47)
pub const EYE_POINTS: usize = 6;

/// Points in the outer mouth contour (dlib 48-67)
pub const MOUTH_POINTS: usize = 20;

/// 2D landmark coordinate (image space)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// One eye's 6 contour landmarks, ordered
/// [left corner, upper left, upper right, right corner, lower right, lower left]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EyeLandmarks {
    points: [Point2; EYE_POINTS],
}

impl EyeLandmarks {
    pub fn new(points: [Point2; EYE_POINTS]) -> Self {
        Self { points }
    }

    /// Build from a slice supplied by the landmark extractor.
    /// Fails if the extractor hands over the wrong number of points.
    pub fn from_slice(points: &[Point2]) -> Result<Self, GeometryError> {
        let arr: [Point2; EYE_POINTS] =
            points
                .try_into()
                .map_err(|_| GeometryError::BadCardinality {
                    region: "eye",
                    expected: EYE_POINTS,
                    actual: points.len(),
                })?;
        Ok(Self { points: arr })
    }

    pub fn points(&self) -> &[Point2; EYE_POINTS] {
        &self.points
    }
}

/// The mouth's 20 outer-contour landmarks in dlib ordering (points 48-67)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MouthLandmarks {
    points: [Point2; MOUTH_POINTS],
}

impl MouthLandmarks {
    pub fn new(points: [Point2; MOUTH_POINTS]) -> Self {
        Self { points }
    }

    /// Build from a slice supplied by the landmark extractor.
    pub fn from_slice(points: &[Point2]) -> Result<Self, GeometryError> {
        let arr: [Point2; MOUTH_POINTS] =
            points
                .try_into()
                .map_err(|_| GeometryError::BadCardinality {
                    region: "mouth",
                    expected: MOUTH_POINTS,
                    actual: points.len(),
                })?;
        Ok(Self { points: arr })
    }

    pub fn points(&self) -> &[Point2; MOUTH_POINTS] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_eye_from_slice_wrong_size() {
        let pts = vec![Point2::default(); 5];
        let err = EyeLandmarks::from_slice(&pts).unwrap_err();
        assert_eq!(
            err,
            GeometryError::BadCardinality {
                region: "eye",
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_mouth_from_slice() {
        let pts = vec![Point2::default(); 20];
        assert!(MouthLandmarks::from_slice(&pts).is_ok());
    }
}
