//! Camera Rig Module
//!
//! Two fixed camera mounts on one player body: a first-person mount at eye
//! level and a third-person mount on a boom behind and above. Exactly one
//! mount is active at any time; the perspective toggle is an instantaneous
//! active-state swap with no blend or transition.
//!
//! The rig is window-system agnostic - it only manages mount state and the
//! world pose / view ray of whichever mount is active. Input handling and
//! rendering happen elsewhere.

use glam::Vec3;

use super::look::{self, PITCH_MAX_DEG, PITCH_MIN_DEG};

/// First-person eye height above the body origin (realistic eye level).
pub const FIRST_PERSON_EYE_HEIGHT: f32 = 1.6;
/// Third-person boom height above the body origin.
pub const THIRD_PERSON_BOOM_HEIGHT: f32 = 2.0;
/// Third-person boom length behind the body.
pub const THIRD_PERSON_BOOM_LENGTH: f32 = 3.0;

/// Which camera mount the player currently views through.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Perspective {
    /// Default: over-the-shoulder camera behind/above the player
    #[default]
    ThirdPerson,
    /// First-person: camera at player eye level
    FirstPerson,
}

impl Perspective {
    /// The other perspective.
    pub fn flipped(self) -> Self {
        match self {
            Perspective::ThirdPerson => Perspective::FirstPerson,
            Perspective::FirstPerson => Perspective::ThirdPerson,
        }
    }
}

/// One camera attachment point on the player body.
///
/// The offset is local: `(x right, y up, z behind)`, rotated by the body yaw
/// when the world pose is computed. A mount keeps its last applied tilt
/// while inactive; the look pass re-applies the accumulated pitch once the
/// mount becomes active again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraMount {
    /// Local offset from the body origin: (right, up, behind)
    pub offset: Vec3,
    /// Local tilt in degrees, clamped to [-90, 90]
    pub pitch_deg: f32,
    /// Whether this mount is the one being viewed through
    pub active: bool,
}

impl CameraMount {
    fn new(offset: Vec3, active: bool) -> Self {
        Self {
            offset,
            pitch_deg: 0.0,
            active,
        }
    }

    /// World position of this mount for a body at `body_pos` facing
    /// `yaw_deg`.
    pub fn world_position(&self, body_pos: Vec3, yaw_deg: f32) -> Vec3 {
        let yaw = yaw_deg.to_radians();
        // Local basis rotated into world space (y is unaffected by yaw)
        let right = Vec3::new(yaw.cos(), 0.0, yaw.sin());
        let behind = Vec3::new(-yaw.sin(), 0.0, yaw.cos());
        body_pos + right * self.offset.x + Vec3::Y * self.offset.y + behind * self.offset.z
    }
}

/// The player's two-mount camera rig.
///
/// Invariant: exactly one mount is active at any time. Both constructors and
/// every state change preserve this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    /// Eye-level mount, active in first person
    pub first_person: CameraMount,
    /// Boom mount behind/above, active in third person
    pub third_person: CameraMount,
    perspective: Perspective,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            first_person: CameraMount::new(Vec3::new(0.0, FIRST_PERSON_EYE_HEIGHT, 0.0), false),
            third_person: CameraMount::new(
                Vec3::new(0.0, THIRD_PERSON_BOOM_HEIGHT, THIRD_PERSON_BOOM_LENGTH),
                true,
            ),
            perspective: Perspective::ThirdPerson,
        }
    }
}

impl CameraRig {
    /// Create a rig in third person (the starting perspective).
    pub fn new() -> Self {
        Self::default()
    }

    /// The current perspective.
    #[inline]
    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// Whether the eye-level mount is the active one.
    #[inline]
    pub fn is_first_person(&self) -> bool {
        self.perspective == Perspective::FirstPerson
    }

    /// Select a perspective, activating its mount and deactivating the
    /// other in the same call. Idempotent.
    pub fn set_perspective(&mut self, perspective: Perspective) {
        self.perspective = perspective;
        self.first_person.active = perspective == Perspective::FirstPerson;
        self.third_person.active = perspective == Perspective::ThirdPerson;
    }

    /// Swap to the other perspective instantly. Returns the new perspective.
    pub fn toggle(&mut self) -> Perspective {
        self.set_perspective(self.perspective.flipped());
        self.perspective
    }

    /// The mount currently being viewed through.
    #[inline]
    pub fn active_mount(&self) -> &CameraMount {
        match self.perspective {
            Perspective::FirstPerson => &self.first_person,
            Perspective::ThirdPerson => &self.third_person,
        }
    }

    fn active_mount_mut(&mut self) -> &mut CameraMount {
        match self.perspective {
            Perspective::FirstPerson => &mut self.first_person,
            Perspective::ThirdPerson => &mut self.third_person,
        }
    }

    /// Apply the accumulated look pitch to the active mount.
    ///
    /// Only the active mount is tilted; the inactive one keeps its last
    /// applied value until it is viewed through again.
    pub fn apply_pitch(&mut self, pitch_deg: f32) {
        self.active_mount_mut().pitch_deg = pitch_deg.clamp(PITCH_MIN_DEG, PITCH_MAX_DEG);
    }

    /// World position of the active mount.
    pub fn active_position(&self, body_pos: Vec3, yaw_deg: f32) -> Vec3 {
        self.active_mount().world_position(body_pos, yaw_deg)
    }

    /// Origin and normalized direction of the active mount's view ray.
    ///
    /// # Arguments
    /// * `body_pos` - Player body origin in world space
    /// * `yaw_deg` - Body yaw in degrees (shared by both mounts)
    pub fn view_ray(&self, body_pos: Vec3, yaw_deg: f32) -> (Vec3, Vec3) {
        let mount = self.active_mount();
        let origin = mount.world_position(body_pos, yaw_deg);
        let direction = look::view_direction(yaw_deg, mount.pitch_deg);
        (origin, direction)
    }
}
