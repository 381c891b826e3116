//! Input management system
//!
//! Keyboard state is pumped into an [`InputManager`] once per frame by an
//! [`InputSource`]; actions only ever read the manager.

use std::collections::HashSet;

/// Something that produces input once per frame (a window, a bot, a test)
pub trait InputSource {
    /// Refresh `input` for the coming frame
    fn pump(&mut self, input: &mut InputManager);
}

/// Input source that never presses anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn pump(&mut self, _input: &mut InputManager) {}
}

/// Keyboard state for the current frame
#[derive(Debug, Default)]
pub struct InputManager {
    pressed: HashSet<KeyCode>,
    close_requested: bool,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    /// Release every key
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Check whether `key` is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Check whether any of `keys` is held
    pub fn any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_key_down(*key))
    }

    /// Ask the director to stop
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Whether a close was requested
    pub const fn close_requested(&self) -> bool {
        self.close_requested
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Space bar
    Space,
    /// Escape key
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);
        assert!(input.is_key_down(KeyCode::Space));
        assert!(input.any_down(&[KeyCode::Left, KeyCode::Space]));

        input.handle_key_input(KeyCode::Space, false);
        assert!(!input.is_key_down(KeyCode::Space));
    }

    #[test]
    fn test_release_all_keeps_close_request() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Left, true);
        input.request_close();
        input.release_all();
        assert!(!input.is_key_down(KeyCode::Left));
        assert!(input.close_requested());
    }
}
