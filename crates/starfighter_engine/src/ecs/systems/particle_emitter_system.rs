//! Particle emitter system
//!
//! Counts each emitter down and spawns particles inside its cone. Overshoot is
//! carried into the next countdown so the spawn rate does not drift with the
//! frame rate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ecs::component::ComponentKinds;
use crate::ecs::components::{ParticleEmitter, Position};
use crate::ecs::factories::{create_particle, sample_between};
use crate::ecs::{EcsError, System, World};
use crate::foundation::math::heading;

/// Spawns particles for every `ParticleEmitter` with a `Position`
pub struct ParticleEmitterSystem {
    rng: StdRng,
    spawned: u64,
}

impl ParticleEmitterSystem {
    /// Create an emitter system with a deterministic random stream
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            spawned: 0,
        }
    }

    /// Particles spawned since creation
    pub const fn spawned(&self) -> u64 {
        self.spawned
    }
}

/// Advance an emitter's countdown and return how many spawns are due
fn due_spawns(emitter: &mut ParticleEmitter, delta_time: f32) -> u32 {
    emitter.countdown -= delta_time;
    let mut due = 0;
    while emitter.countdown <= 0.0 && due < emitter.max_per_frame {
        emitter.countdown += emitter.interval;
        due += 1;
    }
    if emitter.countdown <= 0.0 {
        log::warn!(
            "Emitter fell behind by {:.3}s; capped at {} spawns this frame",
            -emitter.countdown,
            emitter.max_per_frame
        );
        emitter.countdown = emitter.interval;
    }
    due
}

impl System for ParticleEmitterSystem {
    fn name(&self) -> &'static str {
        "particle_emitter"
    }

    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError> {
        let mut query = world.query(ComponentKinds::PARTICLE_EMITTER | ComponentKinds::POSITION);
        while let Some(entity) = query.next_entity(world) {
            let Some(origin) = world.get_component::<Position>(entity).copied() else {
                continue;
            };
            let Some(emitter) = world.get_component_mut::<ParticleEmitter>(entity) else {
                continue;
            };
            if !emitter.is_active() {
                continue;
            }

            let due = due_spawns(emitter, delta_time);
            if due == 0 {
                continue;
            }
            let template = emitter.template.clone();
            let center = origin.rotation + emitter.direction;
            let spread = emitter.spread;

            for _ in 0..due {
                let angle = if spread > 0.0 {
                    center + self.rng.gen_range(-spread..=spread)
                } else {
                    center
                };
                let speed = sample_between(&mut self.rng, template.speed_min, template.speed_max);
                create_particle(world, &template, origin.coords, heading(angle) * speed)?;
            }
            self.spawned += u64::from(due);
        }
        Ok(())
    }
}
