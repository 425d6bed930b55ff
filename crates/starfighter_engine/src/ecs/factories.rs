//! Entity factories
//!
//! Each factory creates one entity and attaches its archetype's component
//! recipe. A factory either returns a fully built entity or writes nothing.

use rand::Rng;

use super::components::{
    Collider, ColliderTag, Damage, Health, ParticleEmitter, ParticleTemplate, PlayerControlled, Position, Sprite,
    TimeToLive, Velocity,
};
use super::error::EcsError;
use super::{Entity, World};
use crate::config::{EnemyArchetype, ParticleArchetype, PlayerArchetype, ProjectileArchetype};
use crate::foundation::math::{constants::PI, heading, Vec2};
use crate::render::TextureHandle;

/// Textures the player archetype needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTextures {
    /// Ship sprite
    pub ship: TextureHandle,
    /// Sprite for fired projectiles
    pub projectile: TextureHandle,
    /// Exhaust particle sprite
    pub exhaust: TextureHandle,
}

fn build(
    world: &mut World,
    recipe: impl FnOnce(&mut World, Entity) -> Result<(), EcsError>,
) -> Result<Entity, EcsError> {
    let entity = world.create_entity()?;
    if let Err(err) = recipe(world, entity) {
        world.destroy_entity(entity);
        return Err(err);
    }
    Ok(entity)
}

/// Create the player's ship at `at`, facing +Y
pub fn create_player_spaceship(
    world: &mut World,
    archetype: &PlayerArchetype,
    textures: &PlayerTextures,
    at: Vec2,
) -> Result<Entity, EcsError> {
    let entity = build(world, |world, entity| {
        world.add_component(entity, Position::at(at))?;
        world.add_component(entity, Velocity::zero())?;
        world.add_component(entity, Sprite::new(textures.ship, archetype.size).with_tint(archetype.tint))?;
        world.add_component(entity, PlayerControlled::from_archetype(archetype, textures.projectile))?;
        world.add_component(entity, Collider::circle(archetype.collider_radius, ColliderTag::Player))?;
        world.add_component(entity, Health::new(archetype.health))?;
        world.add_component(entity, Damage::new(archetype.damage))?;
        world.add_component(entity, ParticleEmitter::from_archetype(&archetype.exhaust, textures.exhaust))
    })?;
    log::debug!("Spawned player ship {entity} at ({:.1}, {:.1})", at.x, at.y);
    Ok(entity)
}

/// Create an enemy fighter at `at`, flying toward -Y
pub fn create_enemy_fighter(
    world: &mut World,
    archetype: &EnemyArchetype,
    texture: TextureHandle,
    at: Vec2,
) -> Result<Entity, EcsError> {
    let entity = build(world, |world, entity| {
        world.add_component(entity, Position::at(at).with_rotation(PI))?;
        world.add_component(entity, Velocity::new(0.0, -archetype.speed))?;
        world.add_component(entity, Sprite::new(texture, archetype.size).with_tint(archetype.tint))?;
        world.add_component(entity, Collider::circle(archetype.collider_radius, ColliderTag::Enemy))?;
        world.add_component(entity, Health::new(archetype.health))?;
        world.add_component(entity, Damage::new(archetype.damage))
    })?;
    log::trace!("Spawned enemy fighter {entity}");
    Ok(entity)
}

/// Create a projectile at `at` travelling along `rotation`
pub fn create_projectile(
    world: &mut World,
    archetype: &ProjectileArchetype,
    texture: TextureHandle,
    at: Vec2,
    rotation: f32,
) -> Result<Entity, EcsError> {
    let entity = build(world, |world, entity| {
        world.add_component(entity, Position::at(at).with_rotation(rotation))?;
        world.add_component(entity, Velocity::from_linear(heading(rotation) * archetype.speed))?;
        world.add_component(entity, Sprite::new(texture, archetype.size).with_tint(archetype.tint))?;
        world.add_component(entity, Collider::circle(archetype.collider_radius, ColliderTag::Projectile))?;
        world.add_component(entity, TimeToLive::new(archetype.lifetime))?;
        world.add_component(entity, Damage::new(archetype.damage))
    })?;
    log::trace!("Spawned projectile {entity}");
    Ok(entity)
}

/// Create a single particle with the given initial velocity
pub fn create_particle(
    world: &mut World,
    template: &ParticleTemplate,
    at: Vec2,
    velocity: Vec2,
) -> Result<Entity, EcsError> {
    let entity = build(world, |world, entity| {
        world.add_component(entity, Position::at(at))?;
        world.add_component(entity, Velocity::from_linear(velocity))?;
        world.add_component(entity, Sprite::new(template.texture, template.size).with_tint(template.tint))?;
        world.add_component(entity, TimeToLive::new(template.lifetime))
    })?;
    log::trace!("Spawned particle {entity}");
    Ok(entity)
}

/// Particle template for death bursts
pub fn burst_template(archetype: &ParticleArchetype, texture: TextureHandle) -> ParticleTemplate {
    ParticleTemplate {
        texture,
        size: archetype.size,
        tint: archetype.tint,
        lifetime: archetype.lifetime,
        speed_min: archetype.speed_min,
        speed_max: archetype.speed_max,
    }
}

/// Spawn `archetype.burst_count` particles flying outward from `at`
///
/// Returns how many particles were spawned. Stops at the first creation
/// failure; particles already spawned stay alive.
pub fn spawn_particle_burst(
    world: &mut World,
    archetype: &ParticleArchetype,
    texture: TextureHandle,
    at: Vec2,
    rng: &mut impl Rng,
) -> Result<u32, EcsError> {
    let template = burst_template(archetype, texture);
    for _ in 0..archetype.burst_count {
        let angle = rng.gen_range(-PI..PI);
        let speed = sample_between(rng, template.speed_min, template.speed_max);
        create_particle(world, &template, at, heading(angle) * speed)?;
    }
    log::trace!("Spawned burst of {} particles", archetype.burst_count);
    Ok(archetype.burst_count)
}

/// Uniform sample in `[min, max]`, or `min` when the range is empty
pub(crate) fn sample_between(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}
