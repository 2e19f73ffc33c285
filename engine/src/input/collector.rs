//! Input Collection Module
//!
//! Assembles raw key and pointer events into the per-tick input snapshot
//! the player controller consumes. Held movement keys persist across
//! frames; jump, perspective-toggle, and chase keys are edge-triggered
//! (they fire on the frame the key goes down, never while held); pointer
//! deltas accumulate until consumed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use prowl_engine::input::{InputCollector, KeyCode};
//!
//! let mut collector = InputCollector::new();
//!
//! // Pump events as they arrive from the window layer
//! collector.handle_key(KeyCode::W, true);
//! collector.handle_mouse_delta(4.0, -1.5);
//!
//! // Once per tick: snapshot, hand to the controller, then clear edges
//! let input = collector.snapshot();
//! controller.tick(dt, &input);
//! collector.end_frame();
//! ```

use super::keyboard::{KeyCode, MovementKeys};

/// Rising-edge detector for a single key.
///
/// `triggered` is latched on the press transition and stays set until
/// `end_frame` clears it, so a snapshot taken any time during the frame
/// observes the edge exactly once.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeTrigger {
    was_pressed: bool,
    triggered: bool,
}

impl EdgeTrigger {
    /// Feed the current held state; latches on the press transition only.
    fn update(&mut self, pressed: bool) {
        if pressed && !self.was_pressed {
            self.triggered = true;
        }
        self.was_pressed = pressed;
    }

    fn clear(&mut self) {
        self.triggered = false;
    }
}

/// One tick's worth of input, as consumed by the player controller.
///
/// Movement keys are level-triggered (held state), the three action
/// flags are rising edges, and `look_delta` is the pointer movement
/// accumulated since the previous frame (positive x = right, positive
/// y = up).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Held directional keys
    pub movement: MovementKeys,
    /// Accumulated pointer delta (x right, y up) since last frame
    pub look_delta: (f32, f32),
    /// Jump key went down this frame
    pub jump_pressed: bool,
    /// Perspective-toggle key went down this frame
    pub toggle_perspective: bool,
    /// Chase-trigger key went down this frame
    pub provoke_chase: bool,
}

impl FrameInput {
    /// An input snapshot with nothing pressed and no pointer motion.
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Tracks raw input events and produces per-tick [`FrameInput`] snapshots.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    movement: MovementKeys,
    jump: EdgeTrigger,
    toggle: EdgeTrigger,
    chase: EdgeTrigger,
    mouse_delta_x: f32,
    mouse_delta_y: f32,
}

impl InputCollector {
    /// Create a collector with all inputs released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key is part of this control scheme.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if self.movement.handle_key(key, pressed) {
            return true;
        }
        match key {
            KeyCode::Space => {
                self.jump.update(pressed);
                true
            }
            KeyCode::C => {
                self.toggle.update(pressed);
                true
            }
            KeyCode::X => {
                self.chase.update(pressed);
                true
            }
            _ => false,
        }
    }

    /// Accumulate a pointer movement delta.
    ///
    /// Positive `delta_x` is rightward motion, positive `delta_y` is
    /// upward motion. Multiple events within one frame add up.
    pub fn handle_mouse_delta(&mut self, delta_x: f32, delta_y: f32) {
        self.mouse_delta_x += delta_x;
        self.mouse_delta_y += delta_y;
    }

    /// Check if any movement key is currently held.
    pub fn is_any_movement_pressed(&self) -> bool {
        self.movement.any_pressed()
    }

    /// Produce the snapshot for the current tick.
    ///
    /// Does not clear anything; call [`end_frame`](Self::end_frame) after
    /// the controller has consumed the snapshot.
    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            movement: self.movement,
            look_delta: (self.mouse_delta_x, self.mouse_delta_y),
            jump_pressed: self.jump.triggered,
            toggle_perspective: self.toggle.triggered,
            provoke_chase: self.chase.triggered,
        }
    }

    /// Clear per-frame state: pointer delta and edge triggers.
    ///
    /// Held movement keys are NOT cleared; they persist until their
    /// release event arrives.
    pub fn end_frame(&mut self) {
        self.mouse_delta_x = 0.0;
        self.mouse_delta_y = 0.0;
        self.jump.clear();
        self.toggle.clear();
        self.chase.clear();
    }

    /// Fully reset all input state, including held keys.
    ///
    /// Use when the window loses focus so stale held keys cannot keep
    /// the character walking.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
