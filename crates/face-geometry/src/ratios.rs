//! Aspect ratio calculations
//!
//! Both ratios divide vertical landmark distances by a horizontal reference
//! distance, making them invariant to face scale and camera distance.

use crate::{EyeLandmarks, MouthLandmarks};

/// Eye Aspect Ratio (EAR) for one eye.
///
/// `EAR = (|p1-p5| + |p2-p4|) / (2 * |p0-p3|)` over the 6 ordered contour
/// points. Typical values: above 0.25 open, below 0.25 closing/blinking,
/// below 0.20 heavily closed.
///
/// A zero-width eye (p0 == p3) is degenerate input and yields a non-finite
/// value; callers guard against zero-area landmark sets.
pub fn eye_aspect_ratio(eye: &EyeLandmarks) -> f32 {
    let p = eye.points();

    // Vertical distances
    let a = p[1].distance_to(&p[5]);
    let b = p[2].distance_to(&p[4]);

    // Horizontal distance
    let c = p[0].distance_to(&p[3]);

    (a + b) / (2.0 * c)
}

/// Mouth Aspect Ratio (MAR) from the 20-point outer contour.
///
/// `MAR = (|p2-p10| + |p4-p8|) / (2 * |p0-p6|)`, indices into the dlib
/// 48-67 mouth contour. Values above ~0.65 indicate a yawn-wide opening.
/// MAR varies more between individuals than EAR; the threshold is tunable.
///
/// Degenerate zero-width input yields a non-finite value, as with EAR.
pub fn mouth_aspect_ratio(mouth: &MouthLandmarks) -> f32 {
    let p = mouth.points();

    // Vertical distances (dlib 51-59, 53-57)
    let a = p[2].distance_to(&p[10]);
    let b = p[4].distance_to(&p[8]);

    // Horizontal distance (dlib 49-55)
    let c = p[0].distance_to(&p[6]);

    (a + b) / (2.0 * c)
}
