//! Camera Module
//!
//! Look-angle accumulation and the two-mount camera rig.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod look;
pub mod rig;

pub use look::{view_direction, LookAngles, PITCH_MAX_DEG, PITCH_MIN_DEG};
pub use rig::{
    CameraMount, CameraRig, Perspective,
    FIRST_PERSON_EYE_HEIGHT, THIRD_PERSON_BOOM_HEIGHT, THIRD_PERSON_BOOM_LENGTH,
};
