//! ECS error types

use super::Entity;
use thiserror::Error;

/// Errors raised by world mutation and system updates
///
/// Lookup misses are not errors: component and entity lookups return `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EcsError {
    /// Every entity slot is in use
    #[error("entity capacity exceeded: all {capacity} slots are in use")]
    CapacityExceeded {
        /// Configured world capacity
        capacity: usize,
    },

    /// A mutation targeted a destroyed or stale entity handle
    #[error("entity {0} is not alive")]
    EntityNotAlive(Entity),

    /// The frame driver supplied a negative or non-finite step
    #[error("invalid frame delta time: {0}")]
    InvalidDeltaTime(f32),
}
