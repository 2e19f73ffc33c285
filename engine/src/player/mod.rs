//! Player Module
//!
//! Provides the player-character controller and its seams.
//!
//! # Components
//!
//! - [`PlayerController`] - Per-tick controller driving locomotion, camera,
//!   footsteps, jumping, chase provocation and interaction detection
//! - [`PlayerControllerBuilder`] - Assembles a controller from its
//!   collaborators, failing fast when one is missing
//! - [`PlayerConfig`] - Tuning values (speed, jump force, noise, reach)
//! - [`TickHooks`] - Lifecycle contract the host loop drives
//! - [`AnimationSink`], [`PromptSink`], [`OwnerAi`] - Outbound seams

pub mod config;
pub mod controller;
pub mod hooks;
pub mod sinks;

pub use config::PlayerConfig;
pub use controller::{BuildError, PlayerController, PlayerControllerBuilder};
pub use hooks::TickHooks;
pub use sinks::{AnimationSink, OwnerAi, PromptSink};
