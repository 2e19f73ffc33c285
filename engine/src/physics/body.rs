//! Physics body boundary.
//!
//! The player controller never integrates motion itself; it drives an
//! externally-owned body through this trait. The real solver lives behind
//! it, out of scope here.

use glam::Vec3;

/// Handle to the player's rigid body in the host's physics world.
pub trait PhysicsBody {
    /// Current body origin in world space.
    fn position(&self) -> Vec3;

    /// Rotate the body about the vertical axis. Radians.
    fn set_yaw(&mut self, yaw_radians: f32);

    /// Translate the body by `delta`, respecting whatever collision response
    /// the host solver applies.
    fn integrate_position(&mut self, delta: Vec3);

    /// Apply an instantaneous impulse (momentum change) to the body.
    fn apply_impulse(&mut self, impulse: Vec3);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubBody {
        position: Vec3,
        yaw: f32,
    }

    impl PhysicsBody for StubBody {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_yaw(&mut self, yaw_radians: f32) {
            self.yaw = yaw_radians;
        }

        fn integrate_position(&mut self, delta: Vec3) {
            self.position += delta;
        }

        fn apply_impulse(&mut self, _impulse: Vec3) {}
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut body: Box<dyn PhysicsBody> = Box::new(StubBody {
            position: Vec3::ZERO,
            yaw: 0.0,
        });
        body.integrate_position(Vec3::new(1.0, 0.0, 0.0));
        body.integrate_position(Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(body.position(), Vec3::new(1.0, 0.0, -2.0));
    }
}
