//! Look-Angle Accumulation Module
//!
//! Tracks the player's view orientation as a yaw/pitch pair in degrees.
//! Pointer deltas are applied 1:1 (degrees per unit of delta) with no
//! sensitivity scaling and no smoothing.
//!
//! Key behaviors:
//! - Yaw is unbounded and accumulates monotonically; it wraps naturally
//!   once converted to a rotation
//! - Pitch saturates at straight up/down (±90 degrees), clamped after
//!   every accumulation rather than rejected
//! - NO smoothing - instant response
//!
//! # Usage
//! ```rust,ignore
//! let mut look = LookAngles::new();
//!
//! // Each tick, feed the frame's accumulated pointer delta (degrees)
//! look.apply_delta(input.look_delta.0, input.look_delta.1);
//!
//! // Horizontal basis for movement, full view direction for aiming
//! let forward = look.forward_flat();
//! let view = look.view_direction();
//! ```

use glam::Vec3;

/// Pitch saturation floor: straight down.
pub const PITCH_MIN_DEG: f32 = -90.0;
/// Pitch saturation ceiling: straight up.
pub const PITCH_MAX_DEG: f32 = 90.0;

/// Player view orientation in degrees.
///
/// When yaw=0 and pitch=0 the view faces -Z. Yaw increases turning right,
/// pitch increases looking up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookAngles {
    /// Horizontal angle (degrees). Unrestricted, wraps around.
    pub yaw: f32,
    /// Vertical angle (degrees). Clamped to [-90, 90].
    pub pitch: f32,
}

impl LookAngles {
    /// Create look angles at rest (facing -Z, level).
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer-movement delta to the view orientation.
    ///
    /// # Arguments
    /// * `dx_deg` - Horizontal delta in degrees. Positive = look right
    /// * `dy_deg` - Vertical delta in degrees. Positive = look up
    ///
    /// Pitch is clamped to [-90, 90] after accumulation, so any overshoot
    /// saturates instead of carrying over.
    pub fn apply_delta(&mut self, dx_deg: f32, dy_deg: f32) {
        self.yaw += dx_deg;
        self.pitch = (self.pitch + dy_deg).clamp(PITCH_MIN_DEG, PITCH_MAX_DEG);
    }

    /// Set the pitch directly (degrees, clamped to [-90, 90]).
    #[inline]
    pub fn set_pitch(&mut self, pitch_deg: f32) {
        self.pitch = pitch_deg.clamp(PITCH_MIN_DEG, PITCH_MAX_DEG);
    }

    /// Current yaw in radians, for rotation seams that expect radians.
    #[inline]
    pub fn yaw_radians(&self) -> f32 {
        self.yaw.to_radians()
    }

    /// The horizontal forward direction (yaw plane only, pitch ignored).
    ///
    /// This is the movement basis: walking forward while looking at the
    /// floor still moves along the ground plane. The vector is unit length
    /// by construction.
    #[inline]
    pub fn forward_flat(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    /// The horizontal right direction (yaw plane only).
    #[inline]
    pub fn right_flat(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// The full view direction derived from yaw and pitch.
    ///
    /// The vector is normalized.
    #[inline]
    pub fn view_direction(&self) -> Vec3 {
        view_direction(self.yaw, self.pitch)
    }
}

/// Compute a normalized view direction from yaw/pitch given in degrees.
///
/// # Coordinate System
/// - +X = right
/// - +Y = up
/// - -Z = forward
///
/// When yaw=0 and pitch=0 the result is -Z.
pub fn view_direction(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    let pitch = pitch_deg.to_radians();
    Vec3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
    .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_default_faces_negative_z() {
        let look = LookAngles::new();
        assert_eq!(look.yaw, 0.0);
        assert_eq!(look.pitch, 0.0);
        assert!(vec_approx_eq(look.forward_flat(), Vec3::new(0.0, 0.0, -1.0)));
        assert!(vec_approx_eq(look.view_direction(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_apply_delta_accumulates() {
        let mut look = LookAngles::new();
        look.apply_delta(10.0, 5.0);
        look.apply_delta(10.0, 5.0);
        assert!((look.yaw - 20.0).abs() < EPSILON);
        assert!((look.pitch - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_saturates_looking_up() {
        let mut look = LookAngles::new();
        // Ten large upward deltas summing to +1000 degrees
        for _ in 0..10 {
            look.apply_delta(0.0, 100.0);
        }
        assert_eq!(look.pitch, PITCH_MAX_DEG);
    }

    #[test]
    fn test_pitch_saturates_looking_down() {
        let mut look = LookAngles::new();
        for _ in 0..10 {
            look.apply_delta(0.0, -100.0);
        }
        assert_eq!(look.pitch, PITCH_MIN_DEG);
    }

    #[test]
    fn test_pitch_recovers_after_saturation() {
        let mut look = LookAngles::new();
        look.apply_delta(0.0, 1000.0);
        assert_eq!(look.pitch, 90.0);

        // Overshoot does not carry over: the next delta acts from the clamp
        look.apply_delta(0.0, -45.0);
        assert!((look.pitch - 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut look = LookAngles::new();
        look.apply_delta(720.0, 0.0);
        look.apply_delta(45.0, 0.0);
        assert!((look.yaw - 765.0).abs() < EPSILON);
    }

    #[test]
    fn test_forward_flat_tracks_yaw() {
        let mut look = LookAngles::new();
        look.apply_delta(90.0, 0.0);
        // Turning 90 degrees right faces +X
        assert!(vec_approx_eq(look.forward_flat(), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_forward_flat_ignores_pitch() {
        let mut look = LookAngles::new();
        look.apply_delta(0.0, -60.0);
        // Looking at the floor must not shrink the movement basis
        assert!(vec_approx_eq(look.forward_flat(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_right_flat_perpendicular_to_forward() {
        let mut look = LookAngles::new();
        look.apply_delta(37.0, 0.0);
        let dot = look.forward_flat().dot(look.right_flat());
        assert!(dot.abs() < EPSILON);
    }

    #[test]
    fn test_view_direction_normalized() {
        let mut look = LookAngles::new();
        look.apply_delta(123.0, 45.0);
        assert!((look.view_direction().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_view_direction_at_pitch_ceiling() {
        let mut look = LookAngles::new();
        look.apply_delta(0.0, 90.0);
        assert!(vec_approx_eq(look.view_direction(), Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_view_direction_tilts_up() {
        let mut look = LookAngles::new();
        look.apply_delta(0.0, 30.0);
        let view = look.view_direction();
        assert!(view.y > 0.0);
        assert!(view.z < 0.0);
    }

    #[test]
    fn test_set_pitch_clamped() {
        let mut look = LookAngles::new();
        look.set_pitch(500.0);
        assert_eq!(look.pitch, PITCH_MAX_DEG);
        look.set_pitch(-500.0);
        assert_eq!(look.pitch, PITCH_MIN_DEG);
    }
}
