//! Recording renderer
//!
//! Collects sprite draws in submission order. Useful as a headless backend and
//! for asserting what the render system submitted.

use super::{SpriteDraw, SpriteRenderer};

/// Draw commands captured for one or more frames
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<SpriteDraw>,
    frames: u64,
    total_draws: u64,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws submitted since the last [`clear`](Self::clear)
    pub fn commands(&self) -> &[SpriteDraw] {
        &self.commands
    }

    /// Drop recorded draws, keeping the running totals
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draws submitted over the queue's lifetime
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }
}

impl SpriteRenderer for DrawQueue {
    fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    fn draw_sprite(&mut self, draw: &SpriteDraw) {
        self.commands.push(draw.clone());
        self.total_draws += 1;
    }
}
