//! Input management system
//!
//! Tracks the set of keys held this frame and last frame. Gameplay reads input
//! through [`InputSource`] so scripted sources can stand in for a window.

use std::collections::HashSet;

/// Read-only keyboard queries for one frame
pub trait InputSource {
    /// Whether `key` is down this frame
    fn is_held(&self, key: KeyCode) -> bool;

    /// Whether `key` went down this frame after being up last frame
    fn was_pressed(&self, key: KeyCode) -> bool;
}

/// Input manager
#[derive(Debug, Clone, Default)]
pub struct InputManager {
    current: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: this frame's key state becomes last frame's
    ///
    /// Keys stay held until a release event arrives.
    pub fn begin_frame(&mut self) {
        self.previous.clone_from(&self.current);
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.current.insert(key);
        } else {
            self.current.remove(&key);
        }
    }

    /// Replace the held set wholesale
    pub fn set_held(&mut self, keys: impl IntoIterator<Item = KeyCode>) {
        self.current = keys.into_iter().collect();
    }

    /// Release every key
    pub fn release_all(&mut self) {
        self.current.clear();
    }
}

impl InputSource for InputManager {
    fn is_held(&self, key: KeyCode) -> bool {
        self.current.contains(&key)
    }

    fn was_pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// E key
    E,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// O key
    O,
    /// Q key
    Q,
    /// U key
    U,
    /// Number row 0
    Num0,
    /// Space key
    Space,
    /// Enter key
    Enter,
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
