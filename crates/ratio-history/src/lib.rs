//! Ratio History Buffer
//!
//! Fixed-capacity FIFO of per-frame aspect ratio readings. The analysis
//! kernel appends one reading per processed frame; the buffer evicts the
//! oldest reading on overflow and is read only for diagnostics and UI
//! display, not for scoring.

mod buffer;

pub use buffer::RatioBuffer;

use serde::{Deserialize, Serialize};

/// One frame's worth of aspect ratios
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioReading {
    /// Averaged eye aspect ratio for the frame
    pub ear: f32,
    /// Mouth aspect ratio for the frame
    pub mar: f32,
}

impl RatioReading {
    pub fn new(ear: f32, mar: f32) -> Self {
        Self { ear, mar }
    }
}
