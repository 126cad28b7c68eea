//! Alert latch state machine

use serde::{Deserialize, Serialize};
use tracing::info;

/// Payload handed to the audio worker when an alert fires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    /// Fatigue score at the moment of the transition
    pub score: f32,
}

/// Latch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LatchState {
    #[default]
    Idle,
    Alerting,
}

/// Boolean latch over the per-frame fatigue flag.
///
/// Fires exactly once on the Idle -> Alerting transition; while fatigue
/// persists the latch stays in Alerting silently, so the audio collaborator
/// is not re-triggered every frame. Any non-fatigued frame drops back to
/// Idle, re-arming the latch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertLatch {
    state: LatchState,
}

impl AlertLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's fatigue verdict; returns the alert to fire, if any
    pub fn observe(&mut self, fatigue_detected: bool, score: f32) -> Option<AlertEvent> {
        match (self.state, fatigue_detected) {
            (LatchState::Idle, true) => {
                self.state = LatchState::Alerting;
                info!(score, "fatigue alert raised");
                Some(AlertEvent { score })
            }
            (LatchState::Alerting, false) => {
                self.state = LatchState::Idle;
                info!("fatigue cleared");
                None
            }
            _ => None,
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }
}
