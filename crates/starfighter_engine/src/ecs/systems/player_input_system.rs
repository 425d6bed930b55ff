//! Player input system
//!
//! Turns one input snapshot per frame into ship velocity and projectile
//! spawns. The input source is injected so the system is deterministic for a
//! given snapshot.

use crate::config::ProjectileArchetype;
use crate::ecs::component::ComponentKinds;
use crate::ecs::components::{PlayerControlled, Position, Velocity};
use crate::ecs::factories::create_projectile;
use crate::ecs::{EcsError, System, World};
use crate::input::{InputSnapshot, InputSource};

/// Steers every `PlayerControlled` entity from an [`InputSource`]
pub struct PlayerInputSystem<I> {
    input: I,
    projectile: ProjectileArchetype,
}

impl<I: InputSource> PlayerInputSystem<I> {
    /// Create a player input system reading from `input`
    pub const fn new(input: I, projectile: ProjectileArchetype) -> Self {
        Self { input, projectile }
    }
}

impl<I: InputSource> System for PlayerInputSystem<I> {
    fn name(&self) -> &'static str {
        "player_input"
    }

    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError> {
        let snapshot = InputSnapshot::capture(&self.input);

        let mut query = world.query(ComponentKinds::PLAYER_CONTROLLED | ComponentKinds::VELOCITY);
        while let Some(entity) = query.next_entity(world) {
            let Some(player) = world.get_component_mut::<PlayerControlled>(entity) else {
                continue;
            };
            player.tick_cooldown(delta_time);
            let (move_speed, turn_speed) = (player.move_speed, player.turn_speed);
            let wants_shot = snapshot.fire && player.can_fire();
            let projectile_texture = player.projectile_texture;

            if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                velocity.linear = snapshot.move_axis() * move_speed;
                velocity.angular = snapshot.turn_axis() * turn_speed;
            }

            if !wants_shot {
                continue;
            }
            let Some(origin) = world.get_component::<Position>(entity).copied() else {
                continue;
            };
            let shot = create_projectile(world, &self.projectile, projectile_texture, origin.coords, origin.rotation)?;
            log::trace!("Player {entity} fired {shot}");
            if let Some(player) = world.get_component_mut::<PlayerControlled>(entity) {
                player.trigger_cooldown();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerArchetype;
    use crate::ecs::factories::{create_player_spaceship, PlayerTextures};
    use crate::foundation::math::Vec2;
    use crate::input::{InputManager, KeyCode};
    use crate::render::TextureHandle;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    type SharedInput = Rc<RefCell<InputManager>>;

    fn setup() -> (World, crate::ecs::Entity, SharedInput, PlayerInputSystem<SharedInput>) {
        let mut world = World::new(16);
        let textures = PlayerTextures {
            ship: TextureHandle::default(),
            projectile: TextureHandle::default(),
            exhaust: TextureHandle::default(),
        };
        let mut archetype = PlayerArchetype::default();
        archetype.move_speed = 100.0;
        archetype.turn_speed = 2.0;
        archetype.fire_cooldown = 0.25;
        let player = create_player_spaceship(&mut world, &archetype, &textures, Vec2::zeros()).unwrap();
        let input = Rc::new(RefCell::new(InputManager::new()));
        let system = PlayerInputSystem::new(Rc::clone(&input), ProjectileArchetype::default());
        (world, player, input, system)
    }

    fn projectiles(world: &World) -> usize {
        world.query(ComponentKinds::TIME_TO_LIVE).collect(world).len()
    }

    #[test]
    fn test_keys_map_to_velocity() {
        let (mut world, player, input, mut system) = setup();
        input.borrow_mut().handle_key_input(KeyCode::Right, true);
        input.borrow_mut().handle_key_input(KeyCode::Q, true);

        system.update(&mut world, 0.016).unwrap();

        let velocity = world.get_component::<Velocity>(player).unwrap();
        assert_relative_eq!(velocity.linear.x, 100.0);
        assert_relative_eq!(velocity.linear.y, 0.0);
        assert_relative_eq!(velocity.angular, 2.0);

        input.borrow_mut().release_all();
        system.update(&mut world, 0.016).unwrap();
        assert_eq!(*world.get_component::<Velocity>(player).unwrap(), Velocity::zero());
    }

    #[test]
    fn test_diagonal_is_normalised() {
        let (mut world, player, input, mut system) = setup();
        input.borrow_mut().handle_key_input(KeyCode::W, true);
        input.borrow_mut().handle_key_input(KeyCode::D, true);

        system.update(&mut world, 0.016).unwrap();

        assert_relative_eq!(world.get_component::<Velocity>(player).unwrap().speed(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let (mut world, player, input, mut system) = setup();
        input.borrow_mut().handle_key_input(KeyCode::Space, true);

        system.update(&mut world, 0.125).unwrap();
        assert_eq!(projectiles(&world), 1);
        system.update(&mut world, 0.125).unwrap();
        assert_eq!(projectiles(&world), 1);
        system.update(&mut world, 0.125).unwrap();
        assert_eq!(projectiles(&world), 2);

        assert_relative_eq!(world.get_component::<PlayerControlled>(player).unwrap().cooldown_remaining, 0.25);
    }

    #[test]
    fn test_full_world_surfaces_capacity_error() {
        let (_, _, input, mut system) = setup();
        let mut world = World::new(1);
        let textures = PlayerTextures {
            ship: TextureHandle::default(),
            projectile: TextureHandle::default(),
            exhaust: TextureHandle::default(),
        };
        create_player_spaceship(&mut world, &PlayerArchetype::default(), &textures, Vec2::zeros()).unwrap();
        input.borrow_mut().handle_key_input(KeyCode::Space, true);

        let err = system.update(&mut world, 0.016).unwrap_err();
        assert_eq!(err, EcsError::CapacityExceeded { capacity: 1 });
    }
}
