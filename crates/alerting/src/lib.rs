//! Alerting
//!
//! Edge-triggered alert latch over the per-frame fatigue flag, plus a
//! bounded fire-and-forget channel toward the audio worker so firing an
//! alert never blocks the next frame's analysis.

mod dispatch;
mod latch;

pub use dispatch::AlertDispatcher;
pub use latch::{AlertEvent, AlertLatch, LatchState};
