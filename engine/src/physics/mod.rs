//! Physics boundary module
//!
//! The controller's side of the physics seam: the body handle it drives and
//! the ray queries it makes. The solver itself is an external collaborator;
//! nothing here integrates contacts or resolves penetration.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Impulses in kg·m/s
//!
//! # Submodules
//!
//! - [`body`] - The rigid-body handle trait the controller drives
//! - [`raycast`] - Ray type, classified hits, and ray-AABB intersection

pub mod body;
pub mod raycast;

// Re-export commonly used types at the physics module level
pub use body::PhysicsBody;
pub use raycast::{aabb_surface_normal, ray_aabb_intersect, HitKind, Ray, RayHit, Raycaster};
