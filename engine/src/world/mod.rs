//! World Module
//!
//! Scene-side state the controller interacts with: classified collision
//! geometry for ray queries and the shared noise pool the owner listens to.

pub mod colliders;
pub mod noise;

pub use colliders::{Collider, ColliderSet};
pub use noise::NoiseRegistry;
