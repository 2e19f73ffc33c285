//! Prowl Engine Library
//!
//! The simulation core of a stealth-exploration game: a deterministic,
//! tick-driven player controller and the seams it drives. The library
//! renders nothing and owns no window; a host loop feeds it input
//! snapshots and physics contact events and mirrors its outputs onto
//! whatever platform it runs on.
//!
//! # Modules
//!
//! - [`player`] - The per-tick controller, its tuning and its lifecycle
//! - [`input`] - Key/pointer state collection and cursor capture
//! - [`camera`] - Look angles and the two-mount camera rig
//! - [`physics`] - Body and raycast seams plus AABB intersection
//! - [`world`] - Collider sets and the shared noise pool
//! - [`audio`] - Looping and one-shot playback seams
//!
//! # Example
//!
//! ```ignore
//! use prowl_engine::input::{InputCollector, KeyCode};
//! use prowl_engine::player::{PlayerController, TickHooks};
//!
//! let mut collector = InputCollector::new();
//! let mut controller = PlayerController::builder()
//!     // ...collaborators...
//!     .build()?;
//!
//! controller.init();
//! loop {
//!     // pump window events into the collector
//!     collector.handle_key(KeyCode::W, true);
//!
//!     let input = collector.snapshot();
//!     controller.tick(delta_time, &input);
//!     collector.end_frame();
//!
//!     // step physics, then report contact changes:
//!     // controller.contact_stay() / controller.contact_end()
//! }
//! ```

pub mod audio;
pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{CursorManager, FrameInput, InputCollector, KeyCode, MovementKeys};
// Re-export player types
pub use player::{PlayerConfig, PlayerController, TickHooks};
// Re-export world types for convenience
pub use world::{Collider, ColliderSet, NoiseRegistry};
