//! Per-minute event rates

use std::time::Duration;

/// Convert a cumulative event count over an elapsed session duration into a
/// per-minute rate. Returns 0.0 for a zero-length session (the instant of
/// session start) rather than dividing by zero.
pub fn events_per_minute(count: u32, elapsed: Duration) -> f32 {
    let elapsed_secs = elapsed.as_secs_f32();
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    (count as f32 / elapsed_secs) * 60.0
}
