//! Ring Buffer Implementation

use crate::RatioReading;

/// Default buffer capacity (30 frames = ~1 second at 30fps)
pub const DEFAULT_CAPACITY: usize = 30;

/// Fixed-capacity ring buffer for ratio readings.
///
/// Single-writer, accessed only from the analysis thread; overwrites the
/// oldest reading once full so the buffer never exceeds capacity.
#[derive(Debug, Clone)]
pub struct RatioBuffer {
    /// Pre-allocated storage
    storage: Box<[RatioReading]>,
    /// Capacity of the buffer
    capacity: usize,
    /// Next write position
    head: usize,
    /// Number of valid readings (saturates at capacity)
    len: usize,
}

impl RatioBuffer {
    /// Create a new buffer with given capacity
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be non-zero");
        let storage: Vec<RatioReading> = vec![RatioReading::default(); capacity];
        Self {
            storage: storage.into_boxed_slice(),
            capacity,
            head: 0,
            len: 0,
        }
    }

    /// Create a buffer with the default 30-frame capacity
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Push a reading (overwrites the oldest if full)
    pub fn push(&mut self, reading: RatioReading) {
        self.storage[self.head] = reading;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Number of readings currently buffered
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent reading, if any
    pub fn last(&self) -> Option<RatioReading> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.head + self.capacity - 1) % self.capacity;
        Some(self.storage[idx])
    }

    /// Read the last N readings (most recent first)
    pub fn read_last(&self, count: usize) -> Vec<RatioReading> {
        let count = count.min(self.len);
        let mut readings = Vec::with_capacity(count);
        for i in 0..count {
            let idx = (self.head + self.capacity - 1 - i) % self.capacity;
            readings.push(self.storage[idx]);
        }
        readings
    }

    /// Iterate oldest-to-newest over the buffered readings
    pub fn iter(&self) -> impl Iterator<Item = RatioReading> + '_ {
        let start = (self.head + self.capacity - self.len) % self.capacity;
        (0..self.len).map(move |i| self.storage[(start + i) % self.capacity])
    }

    /// Mean EAR over the buffered window (0.0 when empty)
    pub fn mean_ear(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        self.iter().map(|r| r.ear).sum::<f32>() / self.len as f32
    }

    /// Mean MAR over the buffered window (0.0 when empty)
    pub fn mean_mar(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        self.iter().map(|r| r.mar).sum::<f32>() / self.len as f32
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl Default for RatioBuffer {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
