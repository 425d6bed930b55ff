//! Core engine implementation
//!
//! The engine owns the world and the frame schedule and drives them from a
//! [`FrameDriver`], which stands in for the windowing layer: it supplies the
//! frame delta time and reports when to stop.

use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::ecs::{EcsError, FrameError, Schedule, World};
use crate::render::AssetError;

/// Supplies frames to [`Engine::run`]
pub trait FrameDriver {
    /// Checked between frames; `true` ends the loop
    fn should_close(&self) -> bool;

    /// Seconds elapsed since the previous frame
    fn next_delta_time(&mut self) -> f32;

    /// Called after every successful frame
    ///
    /// The driver may update its input state or spawn entities here.
    fn end_frame(&mut self, _world: &mut World) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Main engine struct
///
/// The engine coordinates the world and its systems and manages the main loop.
pub struct Engine {
    world: World,
    schedule: Schedule,
    config: EngineConfig,
    frame_count: u64,
    running: bool,
    halted: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, schedule: Schedule) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing engine: {} entity slots, {} systems",
            config.entity_capacity,
            schedule.len()
        );

        Ok(Self {
            world: World::new(config.entity_capacity),
            schedule,
            config,
            frame_count: 0,
            running: true,
            halted: false,
        })
    }

    /// Run a single frame
    ///
    /// A failed frame stops the engine; it does not continue from a
    /// partially updated world. Every later call returns
    /// [`EngineError::Halted`].
    pub fn step(&mut self, delta_time: f32) -> Result<(), EngineError> {
        if self.halted {
            return Err(EngineError::Halted);
        }
        let delta_time = if delta_time.is_finite() {
            delta_time.min(self.config.max_delta_time)
        } else {
            delta_time
        };
        if let Err(source) = self.schedule.run_frame(&mut self.world, delta_time) {
            log::error!("Frame {} failed: {source}", self.frame_count);
            self.halt();
            return Err(EngineError::Frame {
                frame: self.frame_count,
                source,
            });
        }
        self.frame_count += 1;
        Ok(())
    }

    /// Run frames until the driver asks to close or shutdown is requested
    ///
    /// Returns the total number of frames run.
    pub fn run(&mut self, driver: &mut impl FrameDriver) -> Result<u64, EngineError> {
        if self.halted {
            return Err(EngineError::Halted);
        }
        log::info!("Starting main loop...");

        while self.running && !driver.should_close() {
            let delta_time = driver.next_delta_time();
            self.step(delta_time)?;
            if let Err(err) = driver.end_frame(&mut self.world) {
                log::error!("Frame {} driver update failed: {err}", self.frame_count);
                self.halt();
                return Err(err);
            }
        }

        self.running = false;
        log::info!("Engine stopped after {} frames", self.frame_count);
        Ok(self.frame_count)
    }

    fn halt(&mut self) {
        self.running = false;
        self.halted = true;
    }

    /// Request engine shutdown; takes effect between frames
    pub fn request_shutdown(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop would keep going
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a failure has stopped the engine for good
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Get the ECS world
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the ECS world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The frame schedule
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Active configuration
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frames completed so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A frame failed and the engine halted
    #[error("frame {frame} failed: {source}")]
    Frame {
        /// Index of the failing frame
        frame: u64,
        /// What went wrong
        source: FrameError,
    },

    /// World mutation outside a frame failed
    #[error("world error: {0}")]
    World(#[from] EcsError),

    /// Asset lookup failed
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// An earlier failure halted the engine
    #[error("engine halted after an earlier failure")]
    Halted,
}
