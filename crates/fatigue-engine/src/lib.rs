//! Fatigue Analysis Engine
//!
//! Temporal analysis of per-frame facial aspect ratios:
//! - Debounced blink and yawn detection
//! - Per-minute blink/yawn rates over the session
//! - Rule-based fatigue scoring and banding
//!
//! The engine is a synchronous per-frame pipeline driven by a single
//! analysis thread in strict frame order; the caller supplies the wall
//! clock so frame processing stays deterministic under test.

pub mod assessment;
pub mod config;
pub mod debounce;
pub mod rate;
pub mod score;
pub mod state;

pub use assessment::{FatigueAssessment, FatigueLevel};
pub use config::Thresholds;
pub use score::{fatigue_score, is_fatigued, FATIGUE_SCORE_THRESHOLD};
pub use state::SessionState;

use face_geometry::{eye_aspect_ratio, mouth_aspect_ratio, EyeLandmarks, MouthLandmarks};
use ratio_history::RatioReading;
use std::time::Instant;
use tracing::{debug, warn};

/// Per-session fatigue analysis pipeline
pub struct FatigueEngine {
    config: Thresholds,
    state: SessionState,
}

impl FatigueEngine {
    /// Create an engine with the given thresholds, session stamped at `now`
    pub fn new(config: Thresholds, now: Instant) -> Self {
        Self {
            config,
            state: SessionState::new(now),
        }
    }

    /// Create an engine with default thresholds
    pub fn with_defaults(now: Instant) -> Self {
        Self::new(Thresholds::default(), now)
    }

    /// Process one frame's landmarks end to end: compute the aspect ratios,
    /// then run the temporal analysis.
    pub fn process_frame(
        &mut self,
        left_eye: &EyeLandmarks,
        right_eye: &EyeLandmarks,
        mouth: &MouthLandmarks,
        now: Instant,
    ) -> FatigueAssessment {
        let ear_left = eye_aspect_ratio(left_eye);
        let ear_right = eye_aspect_ratio(right_eye);
        let mar = mouth_aspect_ratio(mouth);
        self.analyze(ear_left, ear_right, mar, now)
    }

    /// Run the temporal analysis for one frame's ratios.
    ///
    /// A non-finite ratio (degenerate zero-width landmarks) is treated as a
    /// faulty frame: no counter or history update, and the zeroed sentinel
    /// assessment is returned. The next frame's landmarks are independent,
    /// so one bad frame never corrupts session state.
    pub fn analyze(
        &mut self,
        ear_left: f32,
        ear_right: f32,
        mar: f32,
        now: Instant,
    ) -> FatigueAssessment {
        let avg_ear = (ear_left + ear_right) / 2.0;

        if !avg_ear.is_finite() || !mar.is_finite() {
            warn!(avg_ear, mar, "degenerate ratios, skipping frame");
            return FatigueAssessment::default();
        }

        self.state.history.push(RatioReading::new(avg_ear, mar));

        let blink = debounce::blink_step(
            avg_ear,
            self.config.ear_threshold,
            self.config.ear_consec_frames,
            self.state.eye_frame_counter,
        );
        self.state.eye_frame_counter = blink.counter;
        if blink.fired {
            self.state.blink_count += 1;
            debug!(blink_count = self.state.blink_count, "blink confirmed");
        }

        let yawn = debounce::yawn_step(
            mar,
            self.config.mar_threshold,
            self.config.mar_consec_frames,
            self.state.mouth_frame_counter,
        );
        self.state.mouth_frame_counter = yawn.counter;
        if yawn.fired {
            self.state.yawn_count += 1;
            debug!(yawn_count = self.state.yawn_count, "yawn confirmed");
        }

        let elapsed = self.state.elapsed(now);
        let blink_rate = rate::events_per_minute(self.state.blink_count, elapsed);
        let yawn_frequency = rate::events_per_minute(self.state.yawn_count, elapsed);

        let fatigue_score = score::fatigue_score(
            avg_ear,
            mar,
            blink_rate,
            yawn_frequency,
            self.config.mar_threshold,
        );

        FatigueAssessment {
            ear: avg_ear,
            mar,
            blink_detected: blink.fired,
            yawn_detected: yawn.fired,
            blink_rate,
            yawn_frequency,
            fatigue_score,
            fatigue_detected: score::is_fatigued(fatigue_score),
        }
    }

    /// Handle a frame with no usable landmarks (no face detected). The state
    /// machines receive no update, which is "no measurement" rather than a
    /// ratio on either side of a threshold.
    pub fn process_absent(&mut self) -> FatigueAssessment {
        debug!("no landmarks this frame");
        FatigueAssessment::default()
    }

    /// User reset: zero blink/yawn counts and re-stamp the session clock
    pub fn reset(&mut self, now: Instant) {
        self.state.reset(now);
    }

    /// Current session state (for metrics display)
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Active thresholds
    pub fn config(&self) -> &Thresholds {
        &self.config
    }
}
