//! Detection thresholds

use serde::{Deserialize, Serialize};

/// Detection thresholds for the analysis session.
///
/// Immutable once a session is running; not validated by the engine
/// (callers own the contract that frame counts and thresholds are positive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// EAR below this value counts as eyes closed
    pub ear_threshold: f32,

    /// Consecutive closed frames required to confirm a blink
    pub ear_consec_frames: u32,

    /// MAR above this value counts as mouth open (yawn-wide)
    pub mar_threshold: f32,

    /// Consecutive open frames required to confirm a yawn
    pub mar_consec_frames: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ear_threshold: 0.25,
            ear_consec_frames: 20,
            mar_threshold: 0.65,
            mar_consec_frames: 15,
        }
    }
}

impl Thresholds {
    /// Strict thresholds (confirm events faster, flag fatigue earlier)
    pub fn strict() -> Self {
        Self {
            ear_threshold: 0.27,
            ear_consec_frames: 15,
            mar_threshold: 0.60,
            mar_consec_frames: 12,
        }
    }

    /// Lenient thresholds (tolerate noisier landmark input)
    pub fn lenient() -> Self {
        Self {
            ear_threshold: 0.22,
            ear_consec_frames: 25,
            mar_threshold: 0.70,
            mar_consec_frames: 20,
        }
    }
}
