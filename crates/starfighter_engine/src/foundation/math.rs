//! Math utilities and types
//!
//! Provides the 2D math types used by components and systems.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA color with components in `0.0..=1.0`
pub type Color = Vec4;

/// Unit vector a rotation of `rotation` radians points along.
///
/// Rotation zero faces +Y ("up" in arena space); positive rotation turns
/// counter-clockwise.
pub fn heading(rotation: f32) -> Vec2 {
    Vec2::new(-rotation.sin(), rotation.cos())
}

/// Commonly used constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;
}

/// Color presets
pub mod colors {
    use super::Color;

    /// Opaque white, the neutral sprite tint
    pub fn white() -> Color {
        Color::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Build a color from 0-255 channel values
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heading_zero_faces_up() {
        let h = heading(0.0);
        assert_relative_eq!(h.x, 0.0);
        assert_relative_eq!(h.y, 1.0);
    }

    #[test]
    fn test_heading_quarter_turn_faces_left() {
        let h = heading(constants::PI / 2.0);
        assert_relative_eq!(h.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(h.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rgba8() {
        let c = colors::rgba8(255, 0, 51, 255);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(c.z, 0.2);
    }
}
