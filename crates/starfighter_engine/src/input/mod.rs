//! Input management system
//!
//! [`InputSource`] is the input collaborator the player input system polls.
//! [`InputManager`] is the state tracker a windowing layer feeds key and
//! button events into.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::foundation::math::Vec2;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Q key
    Q,
    /// E key
    E,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Input collaborator
///
/// Must report the state as of the start of the current frame.
pub trait InputSource {
    /// Whether `key` is held down
    fn is_key_down(&self, key: KeyCode) -> bool;

    /// Whether `button` is held down
    fn is_button_pressed(&self, button: MouseButton) -> bool;
}

impl<I: InputSource> InputSource for Rc<RefCell<I>> {
    fn is_key_down(&self, key: KeyCode) -> bool {
        self.borrow().is_key_down(key)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.borrow().is_button_pressed(button)
    }
}

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
}

impl InputManager {
    /// Create a new input manager with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons_down.insert(button);
        } else {
            self.buttons_down.remove(&button);
        }
    }

    /// Release everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
    }
}

impl InputSource for InputManager {
    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

/// Ship controls sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Thrust toward +Y
    pub up: bool,
    /// Thrust toward -Y
    pub down: bool,
    /// Thrust toward -X
    pub left: bool,
    /// Thrust toward +X
    pub right: bool,
    /// Rotate counter-clockwise
    pub turn_left: bool,
    /// Rotate clockwise
    pub turn_right: bool,
    /// Fire the primary weapon
    pub fire: bool,
}

impl InputSnapshot {
    /// Poll `source` once for every control
    pub fn capture(source: &dyn InputSource) -> Self {
        let any = |keys: &[KeyCode]| keys.iter().any(|&key| source.is_key_down(key));
        Self {
            up: any(&[KeyCode::W, KeyCode::Up]),
            down: any(&[KeyCode::S, KeyCode::Down]),
            left: any(&[KeyCode::A, KeyCode::Left]),
            right: any(&[KeyCode::D, KeyCode::Right]),
            turn_left: any(&[KeyCode::Q]),
            turn_right: any(&[KeyCode::E]),
            fire: any(&[KeyCode::Space]) || source.is_button_pressed(MouseButton::Left),
        }
    }

    /// Movement direction, unit length or zero
    pub fn move_axis(&self) -> Vec2 {
        let axis = |positive: bool, negative: bool| f32::from(i8::from(positive) - i8::from(negative));
        let raw = Vec2::new(axis(self.right, self.left), axis(self.up, self.down));
        raw.try_normalize(f32::EPSILON).unwrap_or_else(Vec2::zeros)
    }

    /// Turn direction: +1 counter-clockwise, -1 clockwise, 0 none
    pub fn turn_axis(&self) -> f32 {
        f32::from(i8::from(self.turn_left) - i8::from(self.turn_right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_manager_tracks_press_and_release() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);
        assert!(input.is_key_down(KeyCode::Space));
        input.handle_key_input(KeyCode::Space, false);
        assert!(!input.is_key_down(KeyCode::Space));

        input.handle_mouse_button(MouseButton::Left, true);
        input.release_all();
        assert!(!input.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn test_snapshot_maps_arrows_and_wasd() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Up, true);
        input.handle_key_input(KeyCode::D, true);
        let snapshot = InputSnapshot::capture(&input);
        assert!(snapshot.up && snapshot.right);
        assert!(!snapshot.fire);

        let axis = snapshot.move_axis();
        assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-6);
        assert!(axis.x > 0.0 && axis.y > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let snapshot = InputSnapshot {
            left: true,
            right: true,
            turn_left: true,
            turn_right: true,
            ..InputSnapshot::default()
        };
        assert_eq!(snapshot.move_axis(), Vec2::zeros());
        assert_relative_eq!(snapshot.turn_axis(), 0.0);
    }

    #[test]
    fn test_mouse_fires() {
        let mut input = InputManager::new();
        input.handle_mouse_button(MouseButton::Left, true);
        assert!(InputSnapshot::capture(&input).fire);
    }

    #[test]
    fn test_shared_handle_sees_later_events() {
        let shared = Rc::new(RefCell::new(InputManager::new()));
        let polled = Rc::clone(&shared);
        shared.borrow_mut().handle_key_input(KeyCode::Q, true);
        assert!(polled.is_key_down(KeyCode::Q));
    }
}
