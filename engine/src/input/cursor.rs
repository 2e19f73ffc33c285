//! Cursor Capture Module
//!
//! Tracks pointer capture/release state for mouse-look gameplay. The
//! controller engages capture during init; the host owns the actual
//! window and applies the state whenever it is marked dirty.
//!
//! # Usage
//!
//! ```rust,ignore
//! use prowl_engine::input::CursorManager;
//!
//! let mut cursor = CursorManager::new();
//! cursor.capture();
//!
//! // Host side, once per frame:
//! if cursor.is_dirty() {
//!     window.set_cursor_visible(cursor.should_cursor_be_visible());
//!     cursor.clear_dirty();
//! }
//! ```

/// Actions the CursorManager recommends after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No action needed
    None,
    /// Cursor state changed; the host should apply it to the window
    ApplyState,
}

/// Pointer capture state for mouse-look play.
///
/// Capture means the cursor is hidden and grabbed so pointer deltas feed
/// the look accumulator. Released means the cursor is visible and free.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the cursor is captured (hidden, grabbed) for mouse look
    captured: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if state changed and needs to be applied to the window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a manager with the cursor released.
    ///
    /// Capture is engaged explicitly at controller init rather than on
    /// construction, so a host can build everything before grabbing the
    /// pointer.
    pub fn new() -> Self {
        Self {
            captured: false,
            has_focus: true,
            state_dirty: true, // Need to apply initial state
        }
    }

    /// Check if the cursor is currently captured.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Check if the window has focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    /// Capture the cursor: hide it and grab it for mouse look.
    pub fn capture(&mut self) {
        if !self.captured {
            self.captured = true;
            self.state_dirty = true;
        }
    }

    /// Release the cursor: show it and stop grabbing.
    pub fn release(&mut self) {
        if self.captured {
            self.captured = false;
            self.state_dirty = true;
        }
    }

    /// Handle ESC key press: release the cursor if captured.
    ///
    /// Returns the action to take. If `ApplyState`, the host applies the
    /// new cursor state to the window.
    pub fn handle_escape(&mut self) -> CursorAction {
        if self.captured {
            self.release();
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Handle a click while released: re-capture the cursor.
    pub fn handle_click(&mut self) -> CursorAction {
        if !self.captured {
            self.capture();
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Handle window focus gained: restore the captured state.
    pub fn handle_focus_gained(&mut self) -> CursorAction {
        self.has_focus = true;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// Handle window focus lost.
    ///
    /// The capture preference is remembered and restored on refocus.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
    }

    /// Whether the cursor should be visible right now.
    ///
    /// Hidden only while captured with window focus.
    pub fn should_cursor_be_visible(&self) -> bool {
        !(self.captured && self.has_focus)
    }

    /// Whether the cursor should be grabbed by the window right now.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.captured && self.has_focus
    }

    /// Human-readable status line for the current cursor state.
    pub fn status_message(&self) -> &'static str {
        if self.captured {
            "Cursor captured. ESC to release."
        } else {
            "Cursor released. Click to re-capture."
        }
    }
}
