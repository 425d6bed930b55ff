//! # Rendering System
//!
//! Issues one sprite draw per `{Position, Sprite}` entity, in query order, to
//! the injected [`SpriteRenderer`]. The world is only read.

use crate::ecs::component::ComponentKinds;
use crate::ecs::components::{Position, Sprite};
use crate::ecs::{EcsError, System, World};
use crate::render::{SpriteDraw, SpriteRenderer};

/// System responsible for handing renderable entities to the renderer
pub struct RenderSystem<R> {
    renderer: R,
}

impl<R: SpriteRenderer> RenderSystem<R> {
    /// Create a render system drawing through `renderer`
    pub const fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// The injected renderer
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Draw every renderable entity once
    pub fn draw(&mut self, world: &World) {
        self.renderer.begin_frame();
        for entity in world.query(ComponentKinds::POSITION | ComponentKinds::SPRITE).iter(world) {
            let (Some(position), Some(sprite)) =
                (world.get_component::<Position>(entity), world.get_component::<Sprite>(entity))
            else {
                continue;
            };
            self.renderer.draw_sprite(&SpriteDraw {
                texture: sprite.texture,
                position: position.coords,
                rotation: position.rotation,
                size: sprite.size,
                tint: sprite.tint,
            });
        }
        self.renderer.end_frame();
    }
}

impl<R: SpriteRenderer> System for RenderSystem<R> {
    fn name(&self) -> &'static str {
        "render"
    }

    fn update(&mut self, world: &mut World, _delta_time: f32) -> Result<(), EcsError> {
        self.draw(world);
        Ok(())
    }
}
