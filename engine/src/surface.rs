//! Output surface seam. The engine hands finished frames to a `Surface`
//! and performs no windowing itself.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::panel::Frame;

#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The display behind the surface is gone for good.
    #[error("output surface closed")]
    Closed,
}

/// Sink for finished frames. A failed `present` ends the render task.
pub trait Surface: Send {
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError>;
}

/// Frame counters published by a [`HeadlessSurface`].
#[derive(Debug, Default)]
pub struct SurfaceStats {
    frames: AtomicU64,
    last_pixels: AtomicUsize,
}

impl SurfaceStats {
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    /// Pixel count of the most recently presented frame.
    pub fn last_pixels(&self) -> usize {
        self.last_pixels.load(Ordering::Acquire)
    }
}

/// Surface with no display: counts frames and remembers the size of the
/// last one. Optionally fails after a fixed number of frames.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    stats: Arc<SurfaceStats>,
    close_after: Option<u64>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `SurfaceError::Closed` once `frames` frames have been shown.
    pub fn closing_after(frames: u64) -> Self {
        Self {
            close_after: Some(frames),
            ..Self::default()
        }
    }

    pub fn stats(&self) -> Arc<SurfaceStats> {
        self.stats.clone()
    }
}

impl Surface for HeadlessSurface {
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
        if self
            .close_after
            .is_some_and(|limit| self.stats.frames() >= limit)
        {
            return Err(SurfaceError::Closed);
        }
        self.stats
            .last_pixels
            .store(frame.pixels.len(), Ordering::Release);
        self.stats.frames.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}
