//! Interaction Tests - Raycast Geometry and View Rays
//!
//! Scene-level tests for the collider set, the slab intersection helpers,
//! and the camera rig's view ray, checked against hand-computed geometry.

use glam::Vec3;
use prowl_engine::camera::{CameraRig, Perspective};
use prowl_engine::physics::{aabb_surface_normal, ray_aabb_intersect, HitKind, Ray, Raycaster};
use prowl_engine::world::{Collider, ColliderSet};

const EPSILON: f32 = 0.001;

fn box_at(z: f32, kind: HitKind, label: &'static str) -> Collider {
    Collider::from_center_size(Vec3::new(0.0, 0.0, z), Vec3::splat(1.0), kind, label)
}

// ============================================================================
// Slab intersection
// ============================================================================

#[test]
fn test_ray_hits_box_face_on() {
    let t = ray_aabb_intersect(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::splat(-1.0),
        Vec3::splat(1.0),
    );

    // Front face of the unit box sits 4 units down the ray
    assert!(t.is_some());
    assert!((t.unwrap() - 4.0).abs() < EPSILON);
}

#[test]
fn test_ray_pointing_away_misses() {
    let t = ray_aabb_intersect(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::splat(-1.0),
        Vec3::splat(1.0),
    );
    assert!(t.is_none());
}

#[test]
fn test_ray_from_inside_reports_exit() {
    let t = ray_aabb_intersect(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::splat(-1.0),
        Vec3::splat(1.0),
    );

    // Starting inside, the reported distance is the exit face
    assert!(t.is_some());
    assert!((t.unwrap() - 1.0).abs() < EPSILON);
}

#[test]
fn test_surface_normal_points_out_of_each_face() {
    let min = Vec3::splat(-1.0);
    let max = Vec3::splat(1.0);

    let top = aabb_surface_normal(Vec3::new(0.2, 1.0, -0.3), min, max);
    assert!((top - Vec3::Y).length() < EPSILON);

    let front = aabb_surface_normal(Vec3::new(0.1, 0.4, -1.0), min, max);
    assert!((front - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
}

// ============================================================================
// Collider set queries
// ============================================================================

#[test]
fn test_nearest_hit_wins() {
    let mut set = ColliderSet::new();
    set.insert(box_at(-6.0, HitKind::Interactable, "far case"));
    set.insert(box_at(-2.0, HitKind::Interactable, "near case"));

    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    let (hit, collider) = set.cast_labeled(&ray, 10.0).unwrap();

    assert_eq!(collider.label, "near case");
    assert!((hit.distance - 1.5).abs() < EPSILON);
}

#[test]
fn test_scenery_occludes_interactable() {
    let mut set = ColliderSet::new();
    set.insert(box_at(-4.0, HitKind::Interactable, "case"));
    set.insert(box_at(-2.0, HitKind::Scenery, "curtain"));

    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    let hit = set.cast(&ray, 10.0).unwrap();

    // The near scenery hit masks the interactable behind it
    assert_eq!(hit.kind, HitKind::Scenery);
    assert!(!hit.is_interactable());
}

#[test]
fn test_reach_cutoff_excludes_distant_hits() {
    let mut set = ColliderSet::new();
    set.insert(box_at(-2.0, HitKind::Interactable, "case"));

    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    // Front face at 1.5: beyond a 0.5 reach, within a 2.0 reach
    assert!(set.cast(&ray, 0.5).is_none());
    assert!(set.cast(&ray, 2.0).is_some());
}

#[test]
fn test_hit_carries_position_and_normal() {
    let mut set = ColliderSet::new();
    set.insert(box_at(-2.0, HitKind::Interactable, "case"));

    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    let hit = set.cast(&ray, 10.0).unwrap();

    assert!((hit.position - Vec3::new(0.0, 0.0, -1.5)).length() < EPSILON);
    assert!((hit.normal - Vec3::new(0.0, 0.0, 1.0)).length() < EPSILON);
}

#[test]
fn test_empty_set_never_hits() {
    let set = ColliderSet::new();
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    assert!(set.cast(&ray, 100.0).is_none());
}

// ============================================================================
// View rays from the rig
// ============================================================================

#[test]
fn test_first_person_view_ray_tracks_yaw() {
    let mut rig = CameraRig::new();
    rig.set_perspective(Perspective::FirstPerson);

    let body = Vec3::new(4.0, 0.0, -1.0);
    let (origin, direction) = rig.view_ray(body, 90.0);

    // Eye mount rides the body; yaw 90 looks down +X
    assert!((origin - Vec3::new(4.0, 1.6, -1.0)).length() < EPSILON);
    assert!((direction - Vec3::new(1.0, 0.0, 0.0)).length() < EPSILON);
}

#[test]
fn test_third_person_view_ray_starts_behind() {
    let rig = CameraRig::new();

    let (origin, direction) = rig.view_ray(Vec3::ZERO, 0.0);
    assert!((origin - Vec3::new(0.0, 2.0, 3.0)).length() < EPSILON);
    assert!((direction - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
}

#[test]
fn test_view_ray_pitch_tilts_direction() {
    let mut rig = CameraRig::new();
    rig.set_perspective(Perspective::FirstPerson);
    rig.apply_pitch(-30.0);

    let (_, direction) = rig.view_ray(Vec3::ZERO, 0.0);

    // Looking 30 degrees down drops the direction's y to -0.5
    assert!((direction.y + 0.5).abs() < EPSILON);
    assert!((direction.length() - 1.0).abs() < EPSILON);
}

#[test]
fn test_view_ray_against_scene_prompt_rule() {
    let mut set = ColliderSet::new();
    set.insert(Collider::from_center_size(
        Vec3::new(0.0, 1.3, -3.55),
        Vec3::new(1.2, 1.0, 0.7),
        HitKind::Interactable,
        "case",
    ));

    let body = Vec3::new(0.0, 0.0, -2.75);

    // Third person: boom origin is too far back for a 0.5 reach
    let rig = CameraRig::new();
    let (origin, direction) = rig.view_ray(body, 0.0);
    let ray = Ray::new(origin, direction);
    assert!(set.cast(&ray, 0.5).is_none());

    // First person: the eye sits 0.45 from the case face
    let mut rig = CameraRig::new();
    rig.set_perspective(Perspective::FirstPerson);
    let (origin, direction) = rig.view_ray(body, 0.0);
    let ray = Ray::new(origin, direction);
    let hit = set.cast(&ray, 0.5).unwrap();
    assert!(hit.is_interactable());
    assert!((hit.distance - 0.45).abs() < EPSILON);
}
