//! Fatigue scoring
//!
//! Additive rule combining instantaneous ratios with per-minute rates into a
//! single bounded score. Within each indicator group the branches are
//! mutually exclusive; across groups the contributions add, so the raw sum
//! can reach 1.4 before clamping.

/// Score above which fatigue is considered detected
pub const FATIGUE_SCORE_THRESHOLD: f32 = 0.6;

/// Compute the fatigue score in [0.0, 1.0].
///
/// Indicator weights:
/// - heavily closed eyes (EAR < 0.20): +0.4; partially closed (< 0.25): +0.2
/// - low blink rate (< 10/min): +0.3; reduced (< 15/min): +0.1
/// - frequent yawning (> 5/min): +0.4; occasional (> 2/min): +0.2
/// - mouth currently yawn-wide (MAR above threshold): +0.3
pub fn fatigue_score(
    avg_ear: f32,
    mar: f32,
    blink_rate: f32,
    yawn_frequency: f32,
    mar_threshold: f32,
) -> f32 {
    let mut score: f32 = 0.0;

    if avg_ear < 0.20 {
        score += 0.4;
    } else if avg_ear < 0.25 {
        score += 0.2;
    }

    if blink_rate < 10.0 {
        score += 0.3;
    } else if blink_rate < 15.0 {
        score += 0.1;
    }

    if yawn_frequency > 5.0 {
        score += 0.4;
    } else if yawn_frequency > 2.0 {
        score += 0.2;
    }

    if mar > mar_threshold {
        score += 0.3;
    }

    score.min(1.0)
}

/// Whether a score crosses into detected fatigue
pub fn is_fatigued(score: f32) -> bool {
    score > FATIGUE_SCORE_THRESHOLD
}
