//! Collision system
//!
//! Tests two tag-partitioned pairings each frame, projectiles against enemies
//! and then enemies against the player, with a circle-circle overlap test.
//! Pairs resolve in query order and destruction is immediate, so both
//! entities are re-checked for liveness before every pairwise test.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ParticleArchetype;
use crate::ecs::component::ComponentKinds;
use crate::ecs::components::{Collider, ColliderTag, Damage, Health, Position};
use crate::ecs::factories::spawn_particle_burst;
use crate::ecs::{EcsError, Entity, System, World};
use crate::render::TextureHandle;

/// Damage applied when the attacker carries no `Damage` component
const DEFAULT_DAMAGE: u32 = 1;

/// Outcome of one collision pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReport {
    /// Overlapping pairs that were resolved
    pub hits: u32,
    /// Entities destroyed because their health ran out
    pub kills: u32,
}

impl CollisionReport {
    fn absorb(&mut self, other: Self) {
        self.hits += other.hits;
        self.kills += other.kills;
    }
}

/// Resolves projectile and ramming hits, spawning bursts for deaths
pub struct CollisionSystem {
    burst: ParticleArchetype,
    burst_texture: TextureHandle,
    rng: StdRng,
    last_report: CollisionReport,
    totals: CollisionReport,
}

impl CollisionSystem {
    /// Create a collision system whose death bursts use `burst` and `burst_texture`
    pub fn new(burst: ParticleArchetype, burst_texture: TextureHandle, seed: u64) -> Self {
        Self {
            burst,
            burst_texture,
            rng: StdRng::seed_from_u64(seed),
            last_report: CollisionReport::default(),
            totals: CollisionReport::default(),
        }
    }

    /// Report of the most recent pass
    pub const fn last_report(&self) -> CollisionReport {
        self.last_report
    }

    /// Accumulated report over every pass
    pub const fn totals(&self) -> CollisionReport {
        self.totals
    }

    /// Run one pass and return its report
    pub fn resolve(&mut self, world: &mut World) -> Result<CollisionReport, EcsError> {
        let mut report = CollisionReport::default();
        let projectiles = tagged(world, ColliderTag::Projectile);
        let enemies = tagged(world, ColliderTag::Enemy);
        let players = tagged(world, ColliderTag::Player);

        for &projectile in &projectiles {
            for &enemy in &enemies {
                if !world.is_alive(projectile) {
                    break;
                }
                if !world.is_alive(enemy) || !overlapping(world, projectile, enemy) {
                    continue;
                }
                log::debug!("Projectile {projectile} hit enemy {enemy}");
                report.hits += 1;
                let damage = damage_of(world, projectile);
                world.destroy_entity(projectile);
                if self.apply_damage(world, enemy, damage)? {
                    report.kills += 1;
                }
            }
        }

        for &enemy in &enemies {
            for &player in &players {
                if !world.is_alive(enemy) {
                    break;
                }
                if !world.is_alive(player) || !overlapping(world, enemy, player) {
                    continue;
                }
                log::debug!("Enemy {enemy} rammed player {player}");
                report.hits += 1;
                let damage = damage_of(world, enemy);
                self.kill(world, enemy)?;
                report.kills += 1;
                if self.apply_damage(world, player, damage)? {
                    log::info!("Player {player} destroyed");
                    report.kills += 1;
                }
            }
        }

        Ok(report)
    }

    /// Damage `target`; destroys it with a burst when its health runs out
    fn apply_damage(&mut self, world: &mut World, target: Entity, damage: u32) -> Result<bool, EcsError> {
        let dead = world.get_component_mut::<Health>(target).map_or(true, |health| {
            health.take_damage(damage);
            health.is_dead()
        });
        if dead {
            self.kill(world, target)?;
        }
        Ok(dead)
    }

    fn kill(&mut self, world: &mut World, target: Entity) -> Result<(), EcsError> {
        let at = world.get_component::<Position>(target).map(|p| p.coords);
        world.destroy_entity(target);
        if let Some(at) = at {
            spawn_particle_burst(world, &self.burst, self.burst_texture, at, &mut self.rng)?;
        }
        Ok(())
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn update(&mut self, world: &mut World, _delta_time: f32) -> Result<(), EcsError> {
        let report = self.resolve(world)?;
        if report.hits > 0 {
            log::debug!("Collision pass: {} hits, {} kills", report.hits, report.kills);
        }
        self.last_report = report;
        self.totals.absorb(report);
        Ok(())
    }
}

fn tagged(world: &World, tag: ColliderTag) -> Vec<Entity> {
    world
        .query(ComponentKinds::POSITION | ComponentKinds::COLLIDER)
        .iter(world)
        .filter(|&entity| world.get_component::<Collider>(entity).is_some_and(|c| c.tag == tag))
        .collect()
}

fn overlapping(world: &World, a: Entity, b: Entity) -> bool {
    match (
        world.get_component::<Collider>(a),
        world.get_component::<Position>(a),
        world.get_component::<Collider>(b),
        world.get_component::<Position>(b),
    ) {
        (Some(ca), Some(pa), Some(cb), Some(pb)) => ca.overlaps(pa, cb, pb),
        _ => false,
    }
}

fn damage_of(world: &World, attacker: Entity) -> u32 {
    world.get_component::<Damage>(attacker).map_or(DEFAULT_DAMAGE, |d| d.amount)
}
