//! # Input State
//!
//! This module defines the per-frame input snapshot consumed by the camera.
//! It is produced by the `InputManager` and never mutated afterwards.

use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Represents the state of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawInputState {
    /// Key is not pressed
    #[default]
    NotPressed,
    /// Key was just pressed this frame
    Pressed,
    /// Key has been held down for multiple frames
    Held,
    /// Key was just released this frame
    Released,
}

impl RawInputState {
    /// Determines if the input is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    /// Derives the transition from the previous and current pressed flags
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// Keyboard and mouse input for a single frame.
///
/// Keys missing from `keyboard_states` count as not pressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// State of every tracked keyboard key
    pub keyboard_states: HashMap<KeyCode, RawInputState>,
    /// Mouse movement since the last frame (x, y)
    pub mouse_delta: Option<(f64, f64)>,
}

impl InputSnapshot {
    /// Creates a snapshot with no keys down and no mouse movement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this snapshot with `key` set to `state`.
    pub fn with_key(mut self, key: KeyCode, state: RawInputState) -> Self {
        self.keyboard_states.insert(key, state);
        self
    }

    /// Returns this snapshot with the given mouse movement.
    pub fn with_mouse_delta(mut self, delta_x: f64, delta_y: f64) -> Self {
        self.mouse_delta = Some((delta_x, delta_y));
        self
    }

    /// Gets the state of a keyboard key
    pub fn get_key_state(&self, key: KeyCode) -> RawInputState {
        self.keyboard_states.get(&key).copied().unwrap_or_default()
    }

    /// Returns `true` if `key` is pressed or held
    pub fn is_key_active(&self, key: KeyCode) -> bool {
        self.get_key_state(key).is_active()
    }

    /// Gets the mouse movement delta, zero when the mouse did not move
    pub fn get_mouse_delta(&self) -> (f64, f64) {
        self.mouse_delta.unwrap_or((0.0, 0.0))
    }
}
