//! Starfighter headless demo
//!
//! Loads `starfighter.toml` (or the path given as the first argument), spawns
//! the player and scripted enemy waves, runs the engine for the configured
//! number of frames and logs a summary.

mod assets;
mod config;
mod driver;

use std::cell::RefCell;
use std::rc::Rc;

use starfighter_engine::config::ConfigError;
use starfighter_engine::ecs::components::{Health, Position};
use starfighter_engine::ecs::factories::create_player_spaceship;
use starfighter_engine::ecs::systems::standard_schedule;
use starfighter_engine::foundation::logging;
use starfighter_engine::foundation::math::Vec2;
use starfighter_engine::input::InputManager;
use starfighter_engine::render::{AssetError, DrawQueue, TextureRegistry};
use starfighter_engine::{Engine, EngineError};
use thiserror::Error;

use crate::assets::GameTextures;
use crate::config::{GameConfig, DEFAULT_CONFIG_PATH};
use crate::driver::{ScriptedDriver, WaveSpawner};

/// Startup and run failures
#[derive(Error, Debug)]
enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn main() {
    if let Err(err) = run() {
        log::error!("Starfighter failed: {err}");
        eprintln!("starfighter: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load_or_default(&config_path)?;
    logging::init(&config.engine.log_level);
    log::info!("Starting Starfighter with config '{config_path}'");

    let mut registry = TextureRegistry::new();
    let textures = GameTextures::load(&config.textures, &mut registry)?;

    let renderer = Rc::new(RefCell::new(DrawQueue::new()));
    let input = Rc::new(RefCell::new(InputManager::new()));
    let schedule = standard_schedule(
        &config.engine,
        &config.archetypes,
        Rc::clone(&renderer),
        Rc::clone(&input),
        textures.spark,
    );
    let mut engine = Engine::new(config.engine.clone(), schedule)?;

    let spawn = Vec2::new(0.0, -config.engine.arena.half_extents().y * 0.75);
    let player = create_player_spaceship(engine.world_mut(), &config.archetypes.player, &textures.player, spawn)
        .map_err(EngineError::from)?;
    log::info!("Player ship ready at ({:.0}, {:.0})", spawn.x, spawn.y);

    let waves = WaveSpawner::new(
        config.archetypes.enemy.clone(),
        textures.enemy,
        config.engine.arena.clone(),
        config.demo.wave_size,
        config.engine.rng_seed.wrapping_add(2),
    );
    let mut driver = ScriptedDriver::new(&config.demo, config.engine.fixed_delta_time, input, waves);

    let frames = engine.run(&mut driver)?;

    let world = engine.world();
    let queue = renderer.borrow();
    log::info!("Ran {frames} frames, {} waves", driver.waves().waves());
    log::info!(
        "{} entities alive, {} draws in the last frame, {} draws total",
        world.len(),
        queue.commands().len(),
        queue.total_draws()
    );
    match (world.get_component::<Position>(player), world.get_component::<Health>(player)) {
        (Some(position), Some(health)) => log::info!(
            "Player survived at ({:.0}, {:.0}) with {}/{} health",
            position.coords.x,
            position.coords.y,
            health.current,
            health.max
        ),
        _ => log::info!("Player ship was destroyed"),
    }
    Ok(())
}
