//! Lifetime Component
//!
//! Counts down the time an entity has left before the cleanup system
//! despawns it.

/// Remaining lifetime in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeToLive {
    /// Seconds left
    pub remaining: f32,
}

impl TimeToLive {
    /// Create a new lifetime component
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    /// Count down by `delta_time`; returns whether the lifetime is used up
    pub fn tick(&mut self, delta_time: f32) -> bool {
        self.remaining -= delta_time;
        self.is_expired()
    }

    /// Check if this entity's lifetime has expired
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_not_expired() {
        let mut lifetime = TimeToLive::new(5.0);
        assert!(!lifetime.tick(2.0));
    }

    #[test]
    fn test_lifetime_expired() {
        let mut lifetime = TimeToLive::new(5.0);
        assert!(lifetime.tick(6.0));
    }

    #[test]
    fn test_exactly_zero_is_expired() {
        let mut lifetime = TimeToLive::new(0.5);
        assert!(lifetime.tick(0.5));
    }
}
