//! Frame timing utilities
//!
//! The engine core never measures time itself. These helpers live here for
//! frame drivers that need wall-clock or fixed-step deltas.

use std::time::Instant;

/// High-precision timer for variable-step frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    max_delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl Timer {
    /// Create a new timer that clamps each frame delta to `max_delta_time`
    pub fn new(max_delta_time: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            max_delta_time: max_delta_time.max(0.0),
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the timer and return the clamped delta (should be called once per frame)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_time = elapsed.min(self.max_delta_time);
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed (clamped) time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Fixed-step clock for deterministic simulation and tests
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    frame_count: u64,
}

impl FixedStep {
    /// Create a clock that always reports `step` seconds per frame
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            frame_count: 0,
        }
    }

    /// Advance one frame and return the step
    pub fn tick(&mut self) -> f32 {
        self.frame_count += 1;
        self.step
    }

    /// Total simulated time
    pub fn total_time(&self) -> f32 {
        self.step * self.frame_count as f32
    }

    /// Frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
