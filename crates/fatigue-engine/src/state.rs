//! Session state tracking

use ratio_history::RatioBuffer;
use std::time::Instant;
use tracing::info;

/// Mutable per-session analysis state, updated once per processed frame.
///
/// Debounce counters are transient frame-run state; blink and yawn counts
/// are cumulative for the session and only move backwards on an explicit
/// user reset.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Consecutive frames the eyes have been below the EAR threshold
    pub eye_frame_counter: u32,

    /// Consecutive frames the mouth has been above the MAR threshold
    pub mouth_frame_counter: u32,

    /// Confirmed blinks this session
    pub blink_count: u32,

    /// Confirmed yawns this session
    pub yawn_count: u32,

    /// Session start, the reference point for per-minute rates
    pub session_start: Instant,

    /// Recent ratio readings (diagnostics window, not used for scoring)
    pub history: RatioBuffer,
}

impl SessionState {
    /// Create fresh state stamped at `now`
    pub fn new(now: Instant) -> Self {
        Self {
            eye_frame_counter: 0,
            mouth_frame_counter: 0,
            blink_count: 0,
            yawn_count: 0,
            session_start: now,
            history: RatioBuffer::with_default_capacity(),
        }
    }

    /// Elapsed session time as of `now`
    pub fn elapsed(&self, now: Instant) -> std::time::Duration {
        now.duration_since(self.session_start)
    }

    /// User-triggered reset: zeroes the cumulative counts and re-stamps the
    /// session clock. The in-flight debounce counters and ratio history are
    /// deliberately left alone so a blink or yawn already underway still
    /// completes against the new session.
    pub fn reset(&mut self, now: Instant) {
        self.blink_count = 0;
        self.yawn_count = 0;
        self.session_start = now;
        info!("session counters reset");
    }
}
