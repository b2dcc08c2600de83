//! Shared score counters.

use std::sync::atomic::{AtomicU32, Ordering};

/// Score counter safe to bump from any thread without lost updates.
#[derive(Debug, Default)]
pub struct ScoreCounter(AtomicU32);

impl ScoreCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new value.
    pub fn increment(&self) -> u32 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Release);
    }
}
