//! Input Module
//!
//! Window-system agnostic input handling: key codes, held-key tracking,
//! rising-edge detection, pointer-delta accumulation, and cursor capture
//! state. The host translates its native events into these types and the
//! controller consumes one [`FrameInput`] snapshot per tick.

pub mod collector;
pub mod cursor;
pub mod keyboard;

pub use collector::{FrameInput, InputCollector};
pub use cursor::{CursorAction, CursorManager};
pub use keyboard::{KeyCode, MovementKeys};
