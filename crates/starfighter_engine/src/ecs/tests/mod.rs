//! Scenario tests spanning the world, factories and systems

mod world_lifecycle;
