//! Player tuning constants and configuration.
//!
//! This module defines the tuning parameters for the player controller:
//! movement, jumping, noise emission, and interaction reach. Values are
//! fixed once the controller is built.

/// Tuning constants for the player controller.
///
/// All values are configurable via struct fields before the controller is
/// constructed; the controller holds them immutably afterwards.
///
/// # Example
///
/// ```ignore
/// use prowl_engine::player::config::PlayerConfig;
///
/// // Use default tuning
/// let config = PlayerConfig::default();
///
/// // A heavier, louder character
/// let loud = PlayerConfig {
///     footstep_noise: 0.3,
///     ..PlayerConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Walking speed in units per second.
    pub move_speed: f32,

    /// Turn rate in degrees per second.
    /// Reserved: look rotation currently applies pointer deltas 1:1 and
    /// does not consume this value.
    pub rotation_speed: f32,

    /// Upward impulse magnitude applied on jump, in kg·units/sec.
    pub jump_force: f32,

    /// Noise magnitude emitted per second of footsteps while moving on
    /// the ground. Scaled by delta time each tick.
    pub footstep_noise: f32,

    /// Maximum reach of the interaction ray in units.
    pub interact_range: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,      // 5.0 units/sec
            rotation_speed: 90.0, // 90°/sec (reserved)
            jump_force: 250.0,    // 250.0 kg·units/sec
            footstep_noise: 0.1,  // 0.1 noise/sec while walking
            interact_range: 0.5,  // 0.5 units reach
        }
    }
}

impl PlayerConfig {
    /// Creates a new PlayerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }
}
