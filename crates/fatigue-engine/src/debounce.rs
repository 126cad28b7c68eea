//! Debounced blink and yawn detection
//!
//! Both detectors require a threshold crossing to hold for N consecutive
//! frames before registering a discrete event, suppressing single-frame
//! landmark noise. Their trigger edges differ deliberately:
//!
//! - A blink is confirmed on the frame where the eye *re-opens* after a
//!   sustained closure (falling-edge of the closure run).
//! - A yawn is confirmed on the frame where the open run first *reaches*
//!   the required length, while the mouth is still open (rising-edge).
//!
//! The asymmetry is intentional and pinned by tests; do not unify the two.

/// Result of advancing one debounce state machine by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceStep {
    /// Counter value to carry into the next frame
    pub counter: u32,
    /// Whether a discrete event was confirmed this frame
    pub fired: bool,
}

/// Advance the blink state machine by one frame.
///
/// While `ear` is below the threshold the closure run grows. On the frame
/// the eye re-opens, a blink fires iff the run lasted at least
/// `consec_frames`; the counter resets either way.
pub fn blink_step(ear: f32, threshold: f32, consec_frames: u32, counter: u32) -> DebounceStep {
    if ear < threshold {
        DebounceStep {
            counter: counter + 1,
            fired: false,
        }
    } else {
        DebounceStep {
            counter: 0,
            fired: counter >= consec_frames,
        }
    }
}

/// Advance the yawn state machine by one frame.
///
/// While `mar` is above the threshold the open run grows; the yawn fires
/// exactly when the run first reaches `consec_frames` and not again on
/// later frames of the same run. Dropping back to the threshold resets.
pub fn yawn_step(mar: f32, threshold: f32, consec_frames: u32, counter: u32) -> DebounceStep {
    if mar > threshold {
        let counter = counter + 1;
        DebounceStep {
            counter,
            fired: counter == consec_frames,
        }
    } else {
        DebounceStep {
            counter: 0,
            fired: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_blinks(ears: &[f32], threshold: f32, consec: u32) -> (u32, u32) {
        let mut counter = 0;
        let mut blinks = 0;
        for &ear in ears {
            let step = blink_step(ear, threshold, consec, counter);
            counter = step.counter;
            if step.fired {
                blinks += 1;
            }
        }
        (counter, blinks)
    }

    fn run_yawns(mars: &[f32], threshold: f32, consec: u32) -> (u32, u32) {
        let mut counter = 0;
        let mut yawns = 0;
        for &mar in mars {
            let step = yawn_step(mar, threshold, consec, counter);
            counter = step.counter;
            if step.fired {
                yawns += 1;
            }
        }
        (counter, yawns)
    }

    #[test]
    fn test_blink_confirmed_on_reopen() {
        // 5 open, 20 closed, 1 open: the final frame confirms the blink
        let mut seq = vec![0.30; 5];
        seq.extend(vec![0.15; 20]);
        seq.push(0.30);

        let (_, blinks) = run_blinks(&seq, 0.25, 20);
        assert_eq!(blinks, 1);
    }

    #[test]
    fn test_short_closure_is_not_a_blink() {
        // Closure shorter than the consecutive-frame requirement
        let mut seq = vec![0.30; 5];
        seq.extend(vec![0.15; 19]);
        seq.push(0.30);

        let (_, blinks) = run_blinks(&seq, 0.25, 20);
        assert_eq!(blinks, 0);
    }

    #[test]
    fn test_blink_not_counted_while_still_closed() {
        // Sustained closure alone never fires; the re-open edge is required
        let seq = vec![0.15; 50];
        let (counter, blinks) = run_blinks(&seq, 0.25, 20);
        assert_eq!(blinks, 0);
        assert_eq!(counter, 50);
    }

    #[test]
    fn test_blink_counter_resets_on_noise() {
        // A single open frame in the middle restarts the run
        let mut seq = vec![0.15; 10];
        seq.push(0.30);
        seq.extend(vec![0.15; 10]);
        seq.push(0.30);

        let (_, blinks) = run_blinks(&seq, 0.25, 20);
        assert_eq!(blinks, 0);
    }

    #[test]
    fn test_yawn_fires_on_nth_open_frame() {
        // 5 closed, then open frames: fires exactly on the 15th open frame
        let mut counter = 0;
        let mut fired_at = None;
        let mut seq = vec![0.40; 5];
        seq.extend(vec![0.70; 20]);

        for (i, &mar) in seq.iter().enumerate() {
            let step = yawn_step(mar, 0.65, 15, counter);
            counter = step.counter;
            if step.fired {
                assert!(fired_at.is_none(), "yawn re-fired at frame {}", i);
                fired_at = Some(i);
            }
        }
        assert_eq!(fired_at, Some(19));
    }

    #[test]
    fn test_yawn_does_not_refire_while_open() {
        let seq = vec![0.70; 100];
        let (_, yawns) = run_yawns(&seq, 0.65, 15);
        assert_eq!(yawns, 1);
    }

    #[test]
    fn test_yawn_refires_after_mouth_closes() {
        let mut seq = vec![0.70; 15];
        seq.extend(vec![0.40; 3]);
        seq.extend(vec![0.70; 15]);

        let (_, yawns) = run_yawns(&seq, 0.65, 15);
        assert_eq!(yawns, 2);
    }

    #[test]
    fn test_yawn_boundary_value_resets() {
        // MAR exactly at the threshold is "not open"
        let step = yawn_step(0.65, 0.65, 15, 10);
        assert_eq!(step.counter, 0);
        assert!(!step.fired);
    }

    #[test]
    fn test_blink_boundary_value_is_open() {
        // EAR exactly at the threshold is "open", so a long run fires
        let step = blink_step(0.25, 0.25, 20, 20);
        assert!(step.fired);
        assert_eq!(step.counter, 0);
    }
}
