//! Collision components
//!
//! Circles are enough for sprite-sized ships; there is no swept or mesh
//! collision.

use super::Position;

/// Which side of a fight an entity is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderTag {
    /// The player's ship
    Player,
    /// Enemy fighters
    Enemy,
    /// Player projectiles
    Projectile,
}

/// Collision circle centered on the entity's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Circle radius in world units
    pub radius: f32,
    /// Collision group
    pub tag: ColliderTag,
}

impl Collider {
    /// Create a circle collider
    pub fn circle(radius: f32, tag: ColliderTag) -> Self {
        Self { radius, tag }
    }

    /// Circle-circle overlap test; touching counts as overlapping
    pub fn overlaps(&self, at: &Position, other: &Self, other_at: &Position) -> bool {
        let reach = self.radius + other.radius;
        at.distance_squared(other_at) <= reach * reach
    }
}

/// Hit points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// Current health
    pub current: u32,
    /// Maximum health
    pub max: u32,
}

impl Health {
    /// Create a new health component at full health
    pub fn new(max_health: u32) -> Self {
        Self {
            current: max_health,
            max: max_health,
        }
    }

    /// Take damage
    pub fn take_damage(&mut self, damage: u32) {
        self.current = self.current.saturating_sub(damage);
    }

    /// Check if dead
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// Damage dealt to whatever this entity hits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Damage {
    /// Hit points removed per hit
    pub amount: u32,
}

impl Damage {
    /// Create a damage component
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_against_summed_radii() {
        let a = Collider::circle(2.0, ColliderTag::Projectile);
        let b = Collider::circle(3.0, ColliderTag::Enemy);
        let origin = Position::new(0.0, 0.0);

        assert!(a.overlaps(&origin, &b, &Position::new(4.9, 0.0)));
        assert!(a.overlaps(&origin, &b, &Position::new(3.0, 4.0)));
        assert!(!a.overlaps(&origin, &b, &Position::new(3.0, 4.1)));
    }

    #[test]
    fn test_health_saturates_at_zero() {
        let mut health = Health::new(2);
        health.take_damage(1);
        assert!(!health.is_dead());
        health.take_damage(5);
        assert!(health.is_dead());
        assert_eq!(health.current, 0);
    }
}
