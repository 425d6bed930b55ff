//! Player control component

use crate::config::PlayerArchetype;
use crate::render::TextureHandle;

/// Marks an entity as steered by the player's input
///
/// Carries the control tuning and the weapon cooldown so the input system
/// keeps no state of its own between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerControlled {
    /// Speed along each input axis, units per second
    pub move_speed: f32,
    /// Turn rate, radians per second
    pub turn_speed: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,
    /// Seconds until the weapon can fire again
    pub cooldown_remaining: f32,
    /// Texture for projectiles this ship fires
    pub projectile_texture: TextureHandle,
}

impl PlayerControlled {
    /// Build from archetype tuning
    pub fn from_archetype(archetype: &PlayerArchetype, projectile_texture: TextureHandle) -> Self {
        Self {
            move_speed: archetype.move_speed,
            turn_speed: archetype.turn_speed,
            fire_cooldown: archetype.fire_cooldown,
            cooldown_remaining: 0.0,
            projectile_texture,
        }
    }

    /// Count the cooldown down by `delta_time`
    pub fn tick_cooldown(&mut self, delta_time: f32) {
        self.cooldown_remaining = (self.cooldown_remaining - delta_time).max(0.0);
    }

    /// Whether the weapon is ready
    pub fn can_fire(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }

    /// Start the cooldown after a shot
    pub fn trigger_cooldown(&mut self) {
        self.cooldown_remaining = self.fire_cooldown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_cycle() {
        let mut player = PlayerControlled::from_archetype(&PlayerArchetype::default(), TextureHandle::default());
        player.fire_cooldown = 0.5;
        assert!(player.can_fire());

        player.trigger_cooldown();
        assert!(!player.can_fire());
        player.tick_cooldown(0.3);
        assert!(!player.can_fire());
        player.tick_cooldown(0.3);
        assert!(player.can_fire());
        assert!(player.cooldown_remaining >= 0.0);
    }
}
