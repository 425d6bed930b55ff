//! ECS Components module
//!
//! Plain data records stored in the world's per-kind tables.

pub mod collision;
pub mod lifetime;
pub mod movement;
pub mod particle_emitter;
pub mod player;
pub mod renderable;
pub mod transform;

pub use collision::{Collider, ColliderTag, Damage, Health};
pub use lifetime::TimeToLive;
pub use movement::Velocity;
pub use particle_emitter::{ParticleEmitter, ParticleTemplate};
pub use player::PlayerControlled;
pub use renderable::Sprite;
pub use transform::Position;
