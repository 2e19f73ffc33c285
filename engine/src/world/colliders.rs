//! World collider module
//!
//! A flat set of classified axis-aligned boxes standing in for the scene's
//! collision geometry, with a nearest-hit ray query. This is the in-repo
//! implementation of the raycast service boundary; a host with its own
//! physics world can substitute one.

use glam::Vec3;

use crate::physics::raycast::{
    aabb_surface_normal, ray_aabb_intersect, HitKind, Ray, RayHit, Raycaster,
};

/// One axis-aligned box in the scene, classified for interaction queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Minimum corner of the box
    pub min: Vec3,
    /// Maximum corner of the box
    pub max: Vec3,
    /// How a ray hit on this box is classified
    pub kind: HitKind,
    /// Display name for logs and tools
    pub label: &'static str,
}

impl Collider {
    /// Creates a collider from explicit corners.
    pub fn new(min: Vec3, max: Vec3, kind: HitKind, label: &'static str) -> Self {
        Self {
            min,
            max,
            kind,
            label,
        }
    }

    /// Creates a collider from a center point and full extents.
    pub fn from_center_size(center: Vec3, size: Vec3, kind: HitKind, label: &'static str) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
            kind,
            label,
        }
    }

    /// World-space center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// The scene's collider collection.
///
/// Uses brute-force iteration for ray queries; staged scenes here hold a
/// handful of boxes. For large scenes, consider spatial partitioning.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
}

impl ColliderSet {
    /// Creates an empty collider set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collider to the set.
    pub fn insert(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// Returns the number of colliders in the set.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Returns true if the set contains no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Removes all colliders.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    /// Returns an iterator over the colliders.
    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }

    /// Finds the collider containing the nearest hit along `ray`, if any
    /// lies within `max_distance`. Also reports which collider was struck.
    pub fn cast_labeled(&self, ray: &Ray, max_distance: f32) -> Option<(RayHit, &Collider)> {
        let mut closest: Option<(RayHit, &Collider)> = None;
        let mut closest_dist = max_distance;

        for collider in &self.colliders {
            if let Some(t) = ray_aabb_intersect(ray.origin, ray.direction, collider.min, collider.max)
            {
                if t >= 0.0 && t < closest_dist {
                    let position = ray.point_at(t);
                    let hit = RayHit {
                        position,
                        normal: aabb_surface_normal(position, collider.min, collider.max),
                        kind: collider.kind,
                        distance: t,
                    };
                    closest = Some((hit, collider));
                    closest_dist = t;
                }
            }
        }

        closest
    }
}

impl Raycaster for ColliderSet {
    fn cast(&self, ray: &Ray, max_distance: f32) -> Option<RayHit> {
        self.cast_labeled(ray, max_distance).map(|(hit, _)| hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(center: Vec3, kind: HitKind, label: &'static str) -> Collider {
        Collider::from_center_size(center, Vec3::splat(1.0), kind, label)
    }

    #[test]
    fn test_empty_set_no_hit() {
        let set = ColliderSet::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(set.cast(&ray, 100.0).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut set = ColliderSet::new();
        set.insert(unit_box_at(Vec3::new(0.0, 0.0, -5.0), HitKind::Scenery, "far wall"));
        set.insert(unit_box_at(Vec3::new(0.0, 0.0, -2.0), HitKind::Interactable, "case"));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = set.cast(&ray, 100.0).unwrap();
        assert_eq!(hit.kind, HitKind::Interactable);
        assert!((hit.distance - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_scenery_blocks_interactable_behind_it() {
        let mut set = ColliderSet::new();
        set.insert(unit_box_at(Vec3::new(0.0, 0.0, -2.0), HitKind::Scenery, "crate"));
        set.insert(unit_box_at(Vec3::new(0.0, 0.0, -5.0), HitKind::Interactable, "case"));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = set.cast(&ray, 100.0).unwrap();
        assert_eq!(hit.kind, HitKind::Scenery);
    }

    #[test]
    fn test_max_distance_cutoff() {
        let mut set = ColliderSet::new();
        set.insert(unit_box_at(Vec3::new(0.0, 0.0, -5.0), HitKind::Interactable, "case"));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        // Nearest face is 4.5 away; a 0.5 range ray cannot reach it
        assert!(set.cast(&ray, 0.5).is_none());
        assert!(set.cast(&ray, 5.0).is_some());
    }

    #[test]
    fn test_cast_labeled_reports_collider() {
        let mut set = ColliderSet::new();
        set.insert(unit_box_at(Vec3::new(0.0, 0.0, -2.0), HitKind::Interactable, "display case"));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (hit, collider) = set.cast_labeled(&ray, 100.0).unwrap();
        assert_eq!(collider.label, "display case");
        assert!(hit.is_interactable());
    }

    #[test]
    fn test_from_center_size() {
        let collider = Collider::from_center_size(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(2.0, 4.0, 6.0),
            HitKind::Scenery,
            "block",
        );
        assert_eq!(collider.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(collider.max, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(collider.center(), Vec3::new(1.0, 2.0, 3.0));
    }
}
