//! Raycast module
//!
//! Ray queries against axis-aligned boxes, and the raycast service boundary
//! the player controller consumes. Hits carry a classification so callers
//! branch on an enum, never on name strings.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use prowl_engine::physics::raycast::{ray_aabb_intersect, Ray};
//! use glam::Vec3;
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//! let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
//! let aabb_max = Vec3::new(1.0, 1.0, 1.0);
//!
//! if let Some(t) = ray_aabb_intersect(ray.origin, ray.direction, aabb_min, aabb_max) {
//!     println!("Hit at distance {}: {:?}", t, ray.point_at(t));
//! }
//! ```

use glam::Vec3;

/// Classification of a raycast hit target.
///
/// Resolved at the raycast-service boundary: whatever owns the colliders
/// assigns the kind, so consumers never inspect tags or names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Object eligible for the interaction prompt and use-action
    Interactable,
    /// Inert level geometry (walls, floors, furniture)
    Scenery,
}

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray
    pub origin: Vec3,
    /// Direction of the ray (normalized at construction)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing the direction. A zero direction stays
    /// zero and cannot hit anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// The point at distance `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Information about the nearest object a ray struck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space position where the ray struck
    pub position: Vec3,
    /// Surface normal at the hit point (normalized)
    pub normal: Vec3,
    /// What category of object was struck
    pub kind: HitKind,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

impl RayHit {
    /// Whether the struck object accepts interaction.
    #[inline]
    pub fn is_interactable(&self) -> bool {
        self.kind == HitKind::Interactable
    }
}

/// The raycast service the player controller queries each tick.
///
/// Implementations return the nearest hit within `max_distance`, or `None`
/// when nothing lies along the ray.
pub trait Raycaster {
    fn cast(&self, ray: &Ray, max_distance: f32) -> Option<RayHit>;
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Compute inverse direction for efficient division
    // Handle near-zero directions by using large values
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    // Entry/exit times for the two YZ planes (x = aabb_min.x and x = aabb_max.x)
    let t1 = (aabb_min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb_max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    // The two XZ planes (y = aabb_min.y and y = aabb_max.y)
    let t3 = (aabb_min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb_max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    // The two XY planes (z = aabb_min.z and z = aabb_max.z)
    let t5 = (aabb_min.z - ray_origin.z) * inv_dir.z;
    let t6 = (aabb_max.z - ray_origin.z) * inv_dir.z;

    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    if t_max >= t_min && t_max >= 0.0 {
        // Return the nearest positive intersection
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// Computes the outward surface normal for a point on an AABB surface.
///
/// Determines which face of the AABB the point is on by finding the axis
/// where the point sits closest to a face, in unit-cube space.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = (aabb_max - aabb_min) * 0.5;
    let local = point - center;

    let normalized = Vec3::new(
        local.x / half_extents.x,
        local.y / half_extents.y,
        local.z / half_extents.z,
    );

    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.x && abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}
