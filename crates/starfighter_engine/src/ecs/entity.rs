//! Entity handles
//!
//! An entity is a slot index plus a generation counter. The world bumps a
//! slot's generation each time the slot is freed, so a handle kept past
//! destruction stops matching and every lookup through it misses.

use std::fmt;

/// Entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Create a new entity handle for the given slot and generation
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index this entity occupies in every component table
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Slot index as a table offset
    pub(crate) const fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Entity::new(7, 2).to_string(), "7v2");
    }

    #[test]
    fn test_same_slot_different_generation_differs() {
        assert_ne!(Entity::new(3, 0), Entity::new(3, 1));
        assert_eq!(Entity::new(3, 1).index(), 3);
    }
}
