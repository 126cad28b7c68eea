//! Per-frame assessment output

use crate::score::FATIGUE_SCORE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Coarse fatigue band, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FatigueLevel {
    #[default]
    Normal,
    Caution,
    Fatigued,
}

impl FatigueLevel {
    /// Band a score: below 0.3 normal, below the detection threshold
    /// caution, above it fatigued
    pub fn from_score(score: f32) -> Self {
        if score > FATIGUE_SCORE_THRESHOLD {
            FatigueLevel::Fatigued
        } else if score >= 0.3 {
            FatigueLevel::Caution
        } else {
            FatigueLevel::Normal
        }
    }
}

/// Complete per-frame analysis result.
///
/// One instance per processed frame; a frame with missing or degenerate
/// landmarks produces the zeroed default as a sentinel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FatigueAssessment {
    /// Averaged eye aspect ratio for this frame
    pub ear: f32,

    /// Mouth aspect ratio for this frame
    pub mar: f32,

    /// Blink confirmed on this frame
    pub blink_detected: bool,

    /// Yawn confirmed on this frame
    pub yawn_detected: bool,

    /// Blinks per minute over the session
    pub blink_rate: f32,

    /// Yawns per minute over the session
    pub yawn_frequency: f32,

    /// Combined fatigue score in [0.0, 1.0]
    pub fatigue_score: f32,

    /// Score crossed the detection threshold
    pub fatigue_detected: bool,
}

impl FatigueAssessment {
    /// Display band for the score
    pub fn level(&self) -> FatigueLevel {
        FatigueLevel::from_score(self.fatigue_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bands() {
        assert_eq!(FatigueLevel::from_score(0.0), FatigueLevel::Normal);
        assert_eq!(FatigueLevel::from_score(0.29), FatigueLevel::Normal);
        assert_eq!(FatigueLevel::from_score(0.3), FatigueLevel::Caution);
        assert_eq!(FatigueLevel::from_score(0.6), FatigueLevel::Caution);
        assert_eq!(FatigueLevel::from_score(0.61), FatigueLevel::Fatigued);
    }

    #[test]
    fn test_sentinel_default_is_benign() {
        let sentinel = FatigueAssessment::default();
        assert_eq!(sentinel.fatigue_score, 0.0);
        assert!(!sentinel.fatigue_detected);
        assert_eq!(sentinel.level(), FatigueLevel::Normal);
    }
}
