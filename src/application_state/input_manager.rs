//! # Input Manager
//!
//! Collects window and device events between frames and turns them into one
//! `InputSnapshot` per frame.

use std::collections::HashMap;

use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{InputSnapshot, RawInputState};

/// Keys that drive the first-person camera.
pub const KEY_CODES: [KeyCode; 4] = [KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyA, KeyCode::KeyD];

/// Tracks the pressed state of the camera keys and the accumulated mouse motion.
#[derive(Debug)]
pub struct InputManager {
    /// Pressed flags as of the previous snapshot
    keyboard_inputs_old: HashMap<KeyCode, bool>,
    /// Pressed flags as of the latest event
    keyboard_inputs_new: HashMap<KeyCode, bool>,
    /// Mouse motion accumulated since the previous snapshot
    mouse_delta: Option<(f64, f64)>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Creates a new InputManager with every tracked key released.
    pub fn new() -> Self {
        let released: HashMap<KeyCode, bool> = KEY_CODES.iter().map(|key| (*key, false)).collect();

        Self {
            keyboard_inputs_old: released.clone(),
            keyboard_inputs_new: released,
            mouse_delta: None,
        }
    }

    /// Processes a window event. Only keyboard events of tracked keys matter.
    pub fn intake_input(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    state,
                    physical_key: PhysicalKey::Code(key),
                    ..
                },
            ..
        } = event
        {
            self.intake_key(*key, *state == ElementState::Pressed);
        }
    }

    /// Records that `key` went down (`pressed`) or up. Untracked keys are ignored.
    pub fn intake_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(key_state) = self.keyboard_inputs_new.get_mut(&key) {
            *key_state = pressed;
        }
    }

    /// Adds raw mouse motion to the delta of the current frame.
    pub fn intake_mouse_motion(&mut self, delta: (f64, f64)) {
        let (x, y) = self.mouse_delta.unwrap_or((0.0, 0.0));
        self.mouse_delta = Some((x + delta.0, y + delta.1));
    }

    /// Builds the snapshot for the frame that just ended and starts a new one.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let keyboard_states = self
            .keyboard_inputs_new
            .iter()
            .map(|(key, &new_state)| {
                let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
                (*key, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        self.keyboard_inputs_old.clone_from(&self.keyboard_inputs_new);

        InputSnapshot {
            keyboard_states,
            mouse_delta: self.mouse_delta.take(),
        }
    }

    /// Releases every key, e.g. when the window loses focus.
    pub fn reset_inputs(&mut self) {
        for pressed in self.keyboard_inputs_new.values_mut() {
            *pressed = false;
        }
        self.mouse_delta = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_transitions_span_snapshots() {
        let mut manager = InputManager::new();

        manager.intake_key(KeyCode::KeyW, true);
        assert_eq!(manager.take_snapshot().get_key_state(KeyCode::KeyW), RawInputState::Pressed);
        assert_eq!(manager.take_snapshot().get_key_state(KeyCode::KeyW), RawInputState::Held);

        manager.intake_key(KeyCode::KeyW, false);
        assert_eq!(manager.take_snapshot().get_key_state(KeyCode::KeyW), RawInputState::Released);
        assert_eq!(manager.take_snapshot().get_key_state(KeyCode::KeyW), RawInputState::NotPressed);
    }

    #[test]
    fn mouse_motion_accumulates_until_the_snapshot() {
        let mut manager = InputManager::new();
        manager.intake_mouse_motion((3.0, -1.0));
        manager.intake_mouse_motion((2.0, 4.0));

        assert_eq!(manager.take_snapshot().mouse_delta, Some((5.0, 3.0)));
        assert_eq!(manager.take_snapshot().mouse_delta, None);
    }

    #[test]
    fn untracked_keys_are_ignored() {
        let mut manager = InputManager::new();
        manager.intake_key(KeyCode::KeyQ, true);
        assert!(!manager.take_snapshot().keyboard_states.contains_key(&KeyCode::KeyQ));
    }
}
