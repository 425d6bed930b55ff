//! Headless frame driver
//!
//! Stands in for a window: it supplies delta times, plays a scripted pilot
//! through the shared input state and spawns enemy waves between frames.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starfighter_engine::config::{ArenaConfig, EnemyArchetype};
use starfighter_engine::ecs::factories::create_enemy_fighter;
use starfighter_engine::ecs::World;
use starfighter_engine::foundation::math::Vec2;
use starfighter_engine::foundation::time::{FixedStep, Timer};
use starfighter_engine::input::{InputManager, KeyCode};
use starfighter_engine::render::TextureHandle;
use starfighter_engine::{EngineError, FrameDriver};

use crate::config::{DemoConfig, Pacing};

enum Clock {
    Fixed(FixedStep),
    RealTime { timer: Timer, target: f32 },
}

/// Spawns rows of enemy fighters along the top edge of the arena
pub struct WaveSpawner {
    archetype: EnemyArchetype,
    texture: TextureHandle,
    arena: ArenaConfig,
    size: u32,
    rng: StdRng,
    waves: u32,
}

impl WaveSpawner {
    /// Create a spawner for waves of `size` enemies
    pub fn new(archetype: EnemyArchetype, texture: TextureHandle, arena: ArenaConfig, size: u32, seed: u64) -> Self {
        Self {
            archetype,
            texture,
            arena,
            size,
            rng: StdRng::seed_from_u64(seed),
            waves: 0,
        }
    }

    /// Spawn one wave, evenly spread across the arena with a little jitter
    pub fn spawn(&mut self, world: &mut World) -> Result<(), EngineError> {
        let half = self.arena.half_extents();
        let spacing = self.arena.width / (self.size as f32 + 1.0);
        let jitter = spacing * 0.25;
        for slot in 1..=self.size {
            let x = -half.x + spacing * slot as f32 + self.rng.gen_range(-jitter..=jitter);
            create_enemy_fighter(world, &self.archetype, self.texture, Vec2::new(x, half.y))?;
        }
        self.waves += 1;
        log::info!("Wave {} incoming: {} fighters", self.waves, self.size);
        Ok(())
    }

    /// Waves spawned so far
    pub const fn waves(&self) -> u32 {
        self.waves
    }
}

/// Scripted headless driver
pub struct ScriptedDriver {
    clock: Clock,
    frames: u64,
    frame: u64,
    strafe_frames: u64,
    wave_interval: u64,
    input: Rc<RefCell<InputManager>>,
    waves: WaveSpawner,
}

impl ScriptedDriver {
    /// Create a driver for `demo`, writing keys into `input`
    pub fn new(demo: &DemoConfig, fixed_delta_time: f32, input: Rc<RefCell<InputManager>>, waves: WaveSpawner) -> Self {
        let clock = match demo.pacing {
            Pacing::Fixed => Clock::Fixed(FixedStep::new(fixed_delta_time)),
            Pacing::RealTime => Clock::RealTime {
                timer: Timer::default(),
                target: fixed_delta_time,
            },
        };
        let driver = Self {
            clock,
            frames: demo.frames,
            frame: 0,
            strafe_frames: demo.strafe_frames,
            wave_interval: demo.wave_interval,
            input,
            waves,
        };
        driver.apply_script();
        driver
    }

    /// Frames completed
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// The wave spawner
    pub const fn waves(&self) -> &WaveSpawner {
        &self.waves
    }

    /// Key state for the upcoming frame: fire constantly, strafe back and forth
    fn apply_script(&self) {
        let strafing_left = (self.frame / self.strafe_frames) % 2 == 0;
        let mut input = self.input.borrow_mut();
        input.handle_key_input(KeyCode::Space, true);
        input.handle_key_input(KeyCode::A, strafing_left);
        input.handle_key_input(KeyCode::D, !strafing_left);
    }
}

impl FrameDriver for ScriptedDriver {
    fn should_close(&self) -> bool {
        self.frame >= self.frames
    }

    fn next_delta_time(&mut self) -> f32 {
        match &mut self.clock {
            Clock::Fixed(step) => step.tick(),
            Clock::RealTime { timer, target } => {
                let elapsed = timer.tick();
                if elapsed < *target {
                    std::thread::sleep(Duration::from_secs_f32(*target - elapsed));
                }
                elapsed.max(*target)
            }
        }
    }

    fn end_frame(&mut self, world: &mut World) -> Result<(), EngineError> {
        if self.frame % self.wave_interval == 0 {
            self.waves.spawn(world)?;
        }
        self.frame += 1;
        self.apply_script();
        Ok(())
    }
}
