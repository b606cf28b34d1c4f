//! Adaptive frame pacing.
//!
//! The pacer smooths the redraw rate against variable render cost: each
//! frame's wall time lands in a rolling window, and the post-frame sleep is
//! whatever remains of the target interval after subtracting the window's
//! average. Render cost changes slowly relative to the window, so a plain
//! moving average is enough - no feedback control.

use std::thread;
use std::time::{Duration, Instant};

/// Samples kept in the rolling window.
pub const WINDOW_SIZE: usize = 8;

/// Seed value for the window.
///
/// Seeding with a plausible cost instead of zero keeps early frames from
/// under-pacing before real measurements accumulate.
pub const SEED_FRAME_COST: Duration = Duration::from_millis(50);

/// Default target frame interval (40 fps).
pub const DEFAULT_TARGET: Duration = Duration::from_millis(25);

// =============================================================================
// FrameCostWindow
// =============================================================================

/// Fixed-size ring of recent frame costs with a rotating write index.
#[derive(Debug, Clone)]
pub struct FrameCostWindow {
    samples: [Duration; WINDOW_SIZE],
    index: usize,
}

impl FrameCostWindow {
    pub fn new() -> Self {
        Self {
            samples: [SEED_FRAME_COST; WINDOW_SIZE],
            index: 0,
        }
    }

    /// Overwrite the current slot. Does not advance.
    pub fn record(&mut self, cost: Duration) {
        self.samples[self.index] = cost;
    }

    /// Rotate the write index to the next slot.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % WINDOW_SIZE;
    }

    /// Mean of all samples in the window.
    pub fn average(&self) -> Duration {
        self.samples.iter().sum::<Duration>() / WINDOW_SIZE as u32
    }
}

impl Default for FrameCostWindow {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// FramePacer
// =============================================================================

/// Drives any per-frame callable at an adaptively paced rate.
#[derive(Debug)]
pub struct FramePacer {
    target: Duration,
    window: FrameCostWindow,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            window: FrameCostWindow::new(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Sleep remaining after the window average - never negative.
    pub fn sleep_duration(&self) -> Duration {
        self.target.saturating_sub(self.window.average())
    }

    /// Run one paced frame: invoke the callable, record its wall time in the
    /// current slot, sleep `max(0, target - average)`, rotate the slot, and
    /// hand back the callable's result unchanged.
    pub fn frame<T>(&mut self, frame_fn: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let result = frame_fn();
        self.window.record(started.elapsed());

        let pause = self.sleep_duration();
        if !pause.is_zero() {
            thread::sleep(pause);
        }

        self.window.advance();
        result
    }

    /// Run paced frames until the callable signals quit by returning `true`.
    pub fn run_until_quit(&mut self, mut frame_fn: impl FnMut() -> bool) {
        while !self.frame(&mut frame_fn) {}
    }
}

// =============================================================================
// Tests
// =============================================================================
