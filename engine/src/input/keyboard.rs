//! Keyboard Input Module
//!
//! Contains key codes and held-key tracking for the movement keys.
//! Decoupled from any windowing library so the controller can be driven
//! headless (tests, scripted walkthroughs) or from a real event loop.

/// Generic key codes for the controller's input surface, independent of
/// windowing system.
///
/// Only the keys this control scheme binds are listed; everything else
/// maps to [`KeyCode::Unknown`] at the host's translation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Move forward
    W,
    /// Strafe left
    A,
    /// Move backward
    S,
    /// Strafe right
    D,
    /// Jump (edge-triggered)
    Space,
    /// Perspective toggle (edge-triggered)
    C,
    /// Provoke the owner into a persistent chase (edge-triggered)
    X,
    /// Cursor release, handled by the host
    Escape,
    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current held state of the four movement keys.
///
/// Held state persists across frames until the matching release event
/// arrives, allowing smooth continuous movement while keys are down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held state based on a key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Release all movement keys.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Forward/backward contribution (-1, 0, or 1). Opposed keys cancel.
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Right/left contribution (-1, 0, or 1). Opposed keys cancel.
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}
