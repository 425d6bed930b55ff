//! Rendering boundary
//!
//! The engine does not talk to a graphics API. The render system hands one
//! [`SpriteDraw`] per visible entity to whatever implements
//! [`SpriteRenderer`]; batching, shaders and GPU submission live behind that
//! trait.

pub mod draw_queue;
pub mod texture;

pub use draw_queue::DrawQueue;
pub use texture::{AssetError, TextureHandle, TextureInfo, TextureLoader, TextureRegistry};

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::math::{Color, Vec2};

/// One sprite draw
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    /// Texture to sample
    pub texture: TextureHandle,
    /// World-space center
    pub position: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Width and height in world units
    pub size: Vec2,
    /// Color multiplier
    pub tint: Color,
}

/// Rendering collaborator
pub trait SpriteRenderer {
    /// Called once before the first draw of a frame
    fn begin_frame(&mut self) {}

    /// Issue one draw
    fn draw_sprite(&mut self, draw: &SpriteDraw);

    /// Called once after the last draw of a frame
    fn end_frame(&mut self) {}
}

/// Lets a frame driver keep a handle to the renderer the render system owns.
impl<R: SpriteRenderer> SpriteRenderer for Rc<RefCell<R>> {
    fn begin_frame(&mut self) {
        self.borrow_mut().begin_frame();
    }

    fn draw_sprite(&mut self, draw: &SpriteDraw) {
        self.borrow_mut().draw_sprite(draw);
    }

    fn end_frame(&mut self) {
        self.borrow_mut().end_frame();
    }
}
