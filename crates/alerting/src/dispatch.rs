//! Alert dispatch channel

use crate::AlertEvent;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Default channel capacity; alerts are rare, a short queue is plenty
pub const DEFAULT_QUEUE_DEPTH: usize = 8;

/// Sender half of the alert channel.
///
/// Dispatch is fire-and-forget from the analysis thread: a full or closed
/// channel drops the event with a warning instead of blocking the frame
/// loop on playback latency.
#[derive(Debug, Clone)]
pub struct AlertDispatcher {
    tx: mpsc::Sender<AlertEvent>,
}

impl AlertDispatcher {
    /// Create a dispatcher and the receiver for the audio worker task
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<AlertEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Create a dispatcher with the default queue depth
    pub fn with_default_depth() -> (Self, mpsc::Receiver<AlertEvent>) {
        Self::channel(DEFAULT_QUEUE_DEPTH)
    }

    /// Hand an alert to the audio worker without waiting
    pub fn dispatch(&self, event: AlertEvent) {
        match self.tx.try_send(event) {
            Ok(()) => debug!(score = event.score, "alert dispatched"),
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("alert queue full, dropping alert");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!("audio worker gone, dropping alert");
            }
        }
    }
}
