//! Frame-rate measurement for the render task.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Instant;

/// Average frame rate since the meter was last reset. Fed by the render
/// task, read by anyone holding the `Arc`.
#[derive(Debug)]
pub struct FpsMeter {
    frames: AtomicU64,
    since: Mutex<Instant>,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self {
            frames: AtomicU64::new(0),
            since: Mutex::new(Instant::now()),
        }
    }
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn average_fps(&self) -> f64 {
        let since = *self.since.lock().unwrap_or_else(|e| e.into_inner());
        let elapsed = since.elapsed().as_secs_f64();
        if elapsed <= 0.0 {
            return 0.0;
        }
        self.frames() as f64 / elapsed
    }

    /// Restart the averaging window, e.g. when the render task starts.
    pub fn reset(&self) {
        *self.since.lock().unwrap_or_else(|e| e.into_inner()) = Instant::now();
        self.frames.store(0, Ordering::Relaxed);
    }
}
