//! Entity-Component-System implementation
//!
//! A fixed-capacity world of entity slots with one component table per kind,
//! the entity factories for the game's archetypes, and the systems that run
//! over them in a declared order each frame.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod factories;
pub mod query;
pub mod schedule;
pub mod storage;
pub mod system;
pub mod systems;
pub mod world;

#[cfg(test)]
mod tests;

pub use component::{Component, ComponentKinds};
pub use entity::Entity;
pub use error::EcsError;
pub use factories::PlayerTextures;
pub use query::Query;
pub use schedule::{FrameError, Schedule};
pub use system::System;
pub use world::World;
