//! Ordered system execution
//!
//! A [`Schedule`] runs its systems once per frame in the order they were
//! added. There is no dependency graph: the declared order is the contract
//! that keeps frames consistent.

use thiserror::Error;

use super::error::EcsError;
use super::system::System;
use super::world::World;

/// Failure of a single frame
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// The frame was rejected before any system ran
    #[error(transparent)]
    Ecs(#[from] EcsError),

    /// A system returned an error; later systems did not run
    #[error("system `{system}` failed: {source}")]
    System {
        /// Name of the failing system
        system: &'static str,
        /// The system's error
        source: EcsError,
    },
}

/// Systems in declared execution order
#[derive(Default)]
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system; it runs after every system already added
    pub fn add_system(&mut self, system: impl System + 'static) {
        log::debug!("Scheduling system `{}` at position {}", system.name(), self.systems.len());
        self.systems.push(Box::new(system));
    }

    /// Builder form of [`Schedule::add_system`]
    #[must_use]
    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.add_system(system);
        self
    }

    /// Names in execution order
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    /// Number of systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no systems are scheduled
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Run every system once, stopping at the first error
    pub fn run_frame(&mut self, world: &mut World, delta_time: f32) -> Result<(), FrameError> {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(EcsError::InvalidDeltaTime(delta_time).into());
        }

        for system in &mut self.systems {
            system.update(world, delta_time).map_err(|source| FrameError::System {
                system: system.name(),
                source,
            })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schedule")
            .field("systems", &self.system_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    }

    impl System for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn update(&mut self, _world: &mut World, _delta_time: f32) -> Result<(), EcsError> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                Err(EcsError::CapacityExceeded { capacity: 0 })
            } else {
                Ok(())
            }
        }
    }

    fn recorder(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>, fail: bool) -> Recorder {
        Recorder {
            name,
            log: Rc::clone(log),
            fail,
        }
    }

    #[test]
    fn test_runs_in_declared_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut schedule = Schedule::new()
            .with_system(recorder("first", &log, false))
            .with_system(recorder("second", &log, false))
            .with_system(recorder("third", &log, false));
        let mut world = World::new(4);

        schedule.run_frame(&mut world, 0.016).unwrap();
        schedule.run_frame(&mut world, 0.016).unwrap();

        assert_eq!(schedule.system_names(), vec!["first", "second", "third"]);
        assert_eq!(*log.borrow(), vec!["first", "second", "third", "first", "second", "third"]);
    }

    #[test]
    fn test_stops_at_first_error() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut schedule = Schedule::new()
            .with_system(recorder("ok", &log, false))
            .with_system(recorder("broken", &log, true))
            .with_system(recorder("skipped", &log, false));
        let mut world = World::new(4);

        let err = schedule.run_frame(&mut world, 0.016).unwrap_err();

        assert_eq!(
            err,
            FrameError::System {
                system: "broken",
                source: EcsError::CapacityExceeded { capacity: 0 },
            }
        );
        assert_eq!(*log.borrow(), vec!["ok", "broken"]);
    }

    #[test]
    fn test_rejects_bad_delta_time() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut schedule = Schedule::new().with_system(recorder("never", &log, false));
        let mut world = World::new(4);

        assert!(matches!(
            schedule.run_frame(&mut world, -1.0),
            Err(FrameError::Ecs(EcsError::InvalidDeltaTime(_)))
        ));
        assert!(schedule.run_frame(&mut world, f32::NAN).is_err());
        assert!(schedule.run_frame(&mut world, 0.0).is_ok());
        assert_eq!(*log.borrow(), vec!["never"]);
    }
}
