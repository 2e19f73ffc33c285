//! Manor Stage
//!
//! Host-side pieces for the walkthrough demo: the collider layout of the
//! manor hall, a toy kinematic body that turns jump impulses into a
//! vertical arc, and logging implementations of every controller seam.
//! Shared state sits behind `Arc<Mutex<..>>` so the walkthrough can read
//! back what the controller pushed out after the script finishes.

use std::sync::{Arc, Mutex};

use glam::Vec3;
use log::info;

use crate::audio::{LoopSource, OneShotSource};
use crate::physics::{HitKind, PhysicsBody};
use crate::player::{AnimationSink, OwnerAi, PromptSink};
use crate::world::{Collider, ColliderSet};

/// Player mass in kilograms, for converting impulses into velocity.
pub const PLAYER_MASS: f32 = 80.0;

/// Downward acceleration applied by the toy integrator, m/s^2.
const GRAVITY: f32 = 9.81;

/// Height of the hall floor's top surface.
const FLOOR_TOP: f32 = 0.0;

/// The manor hall: a stone floor, four walls, one locked display case
/// and a side table the interaction prompt must ignore.
pub struct Stage {
    colliders: ColliderSet,
}

impl Stage {
    /// Builds the hall the walkthrough plays out in. The display case
    /// front sits at z = -3.2, spanning eye height, so a player standing
    /// at z = -2.75 in first person is just inside interaction reach.
    pub fn manor_hall() -> Self {
        let mut colliders = ColliderSet::new();

        // 40 x 40 floor slab, top surface at y = 0
        colliders.insert(Collider::new(
            Vec3::new(-20.0, -1.0, -20.0),
            Vec3::new(20.0, FLOOR_TOP, 20.0),
            HitKind::Scenery,
            "floor",
        ));

        colliders.insert(Collider::new(
            Vec3::new(-20.0, 0.0, -21.0),
            Vec3::new(20.0, 5.0, -20.0),
            HitKind::Scenery,
            "north wall",
        ));
        colliders.insert(Collider::new(
            Vec3::new(-20.0, 0.0, 20.0),
            Vec3::new(20.0, 5.0, 21.0),
            HitKind::Scenery,
            "south wall",
        ));
        colliders.insert(Collider::new(
            Vec3::new(-21.0, 0.0, -20.0),
            Vec3::new(-20.0, 5.0, 20.0),
            HitKind::Scenery,
            "west wall",
        ));
        colliders.insert(Collider::new(
            Vec3::new(20.0, 0.0, -20.0),
            Vec3::new(21.0, 5.0, 20.0),
            HitKind::Scenery,
            "east wall",
        ));

        // The one thing in the hall the player may interact with
        colliders.insert(Collider::from_center_size(
            Vec3::new(0.0, 1.3, -3.55),
            Vec3::new(1.2, 1.0, 0.7),
            HitKind::Interactable,
            "locked display case",
        ));
        colliders.insert(Collider::from_center_size(
            Vec3::new(2.5, 0.4, -3.0),
            Vec3::new(0.8, 0.8, 0.8),
            HitKind::Scenery,
            "side table",
        ));

        Self { colliders }
    }

    /// The hall's ray-queryable geometry.
    pub fn colliders(&self) -> &ColliderSet {
        &self.colliders
    }
}

/// Read-only view of the body for logging and reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodySnapshot {
    pub position: Vec3,
    pub yaw_radians: f32,
    pub velocity: Vec3,
}

#[derive(Debug, Default)]
struct BodyState {
    position: Vec3,
    yaw_radians: f32,
    velocity: Vec3,
}

/// Toy kinematic body backing the walkthrough.
///
/// Controller translations land directly on the position. Impulses become
/// velocity changes (dv = impulse / mass) which [`SimBody::step`]
/// integrates under gravity until the floor catches the body again.
/// Clones share the same state, so the host keeps one handle while the
/// controller owns another.
#[derive(Debug, Clone)]
pub struct SimBody {
    state: Arc<Mutex<BodyState>>,
}

impl SimBody {
    /// Spawns a body resting at the given position.
    pub fn spawn(position: Vec3) -> Self {
        Self {
            state: Arc::new(Mutex::new(BodyState {
                position,
                yaw_radians: 0.0,
                velocity: Vec3::ZERO,
            })),
        }
    }

    /// Advances the vertical simulation one step. Returns whether the
    /// body rests on the floor afterwards.
    pub fn step(&self, delta_time: f32) -> bool {
        let mut state = self.state.lock().unwrap();
        state.velocity.y -= GRAVITY * delta_time;
        let rise = state.velocity.y * delta_time;
        state.position.y += rise;

        if state.position.y <= FLOOR_TOP && state.velocity.y <= 0.0 {
            state.position.y = FLOOR_TOP;
            state.velocity.y = 0.0;
            true
        } else {
            false
        }
    }

    /// Current body state, for logs and the closing report.
    pub fn snapshot(&self) -> BodySnapshot {
        let state = self.state.lock().unwrap();
        BodySnapshot {
            position: state.position,
            yaw_radians: state.yaw_radians,
            velocity: state.velocity,
        }
    }
}

impl PhysicsBody for SimBody {
    fn position(&self) -> Vec3 {
        self.state.lock().unwrap().position
    }

    fn set_yaw(&mut self, yaw_radians: f32) {
        self.state.lock().unwrap().yaw_radians = yaw_radians;
    }

    fn integrate_position(&mut self, delta: Vec3) {
        self.state.lock().unwrap().position += delta;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        self.state.lock().unwrap().velocity += impulse / PLAYER_MASS;
    }
}

/// Animation seam that logs walk/idle transitions.
#[derive(Debug, Clone, Default)]
pub struct LogAnimation {
    moving: Arc<Mutex<Option<bool>>>,
}

impl AnimationSink for LogAnimation {
    fn set_moving(&mut self, moving: bool) {
        let mut last = self.moving.lock().unwrap();
        if *last != Some(moving) {
            info!("animation: {}", if moving { "walk cycle" } else { "idle" });
        }
        *last = Some(moving);
    }
}

/// Named audio loop that logs starts and stops.
#[derive(Debug, Clone)]
pub struct LogLoop {
    name: &'static str,
    playing: Arc<Mutex<bool>>,
}

impl LogLoop {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            playing: Arc::new(Mutex::new(false)),
        }
    }
}

impl LoopSource for LogLoop {
    fn play(&mut self) {
        *self.playing.lock().unwrap() = true;
        info!("audio: {} loop started", self.name);
    }

    fn stop(&mut self) {
        *self.playing.lock().unwrap() = false;
        info!("audio: {} loop stopped", self.name);
    }

    fn is_playing(&self) -> bool {
        *self.playing.lock().unwrap()
    }
}

/// Named one-shot clip that logs and counts each trigger.
#[derive(Debug, Clone)]
pub struct LogOneShot {
    name: &'static str,
    triggers: Arc<Mutex<u32>>,
}

impl LogOneShot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            triggers: Arc::new(Mutex::new(0)),
        }
    }

    pub fn trigger_count(&self) -> u32 {
        *self.triggers.lock().unwrap()
    }
}

impl OneShotSource for LogOneShot {
    fn play_one_shot(&mut self) {
        *self.triggers.lock().unwrap() += 1;
        info!("audio: {} one-shot", self.name);
    }
}

/// Prompt seam that logs visibility changes and latches whether the
/// prompt ever showed.
#[derive(Debug, Clone, Default)]
pub struct LogPrompt {
    alpha: Arc<Mutex<f32>>,
    shown: Arc<Mutex<bool>>,
}

impl LogPrompt {
    pub fn alpha(&self) -> f32 {
        *self.alpha.lock().unwrap()
    }

    pub fn was_shown(&self) -> bool {
        *self.shown.lock().unwrap()
    }
}

impl PromptSink for LogPrompt {
    fn set_visibility(&mut self, alpha: f32) {
        let mut last = self.alpha.lock().unwrap();
        if *last != alpha {
            if alpha > 0.0 {
                info!("prompt: press E to interact");
            } else {
                info!("prompt: hidden");
            }
        }
        *last = alpha;
        if alpha > 0.0 {
            *self.shown.lock().unwrap() = true;
        }
    }
}

/// Owner seam that logs and records every provocation.
#[derive(Debug, Clone, Default)]
pub struct ChaseLog {
    intensities: Arc<Mutex<Vec<u32>>>,
}

impl ChaseLog {
    pub fn provocations(&self) -> Vec<u32> {
        self.intensities.lock().unwrap().clone()
    }
}

impl OwnerAi for ChaseLog {
    fn trigger_persistent_chase(&mut self, intensity: u32) {
        info!("owner: persistent chase engaged, intensity {}", intensity);
        self.intensities.lock().unwrap().push(intensity);
    }
}
