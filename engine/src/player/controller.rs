//! Player controller module
//!
//! The per-tick state machine at the center of the crate. Each tick runs a
//! fixed sequence: locomotion, look/perspective, footstep audio and noise,
//! jump, chase provocation, interaction detection. Interaction runs after
//! the perspective toggle so the raycast always uses the mount the player
//! is currently viewing through.
//!
//! Grounded state is not computed here. The physics collaborator reports
//! contact through [`TickHooks::contact_stay`] / [`TickHooks::contact_end`],
//! and the tick reads whatever those last recorded. Losing ground contact
//! silences footsteps in the handler itself, not on the next tick.
//!
//! # Usage
//! ```rust,ignore
//! let mut controller = PlayerController::builder()
//!     .body(body)
//!     .raycaster(scene)
//!     .animation(animator)
//!     .footsteps(footstep_loop)
//!     .jump_sound(jump_grunt)
//!     .owner_ai(owner)
//!     .prompt(prompt)
//!     .noise(noise_handle)
//!     .build()?;
//!
//! controller.init();
//! // each frame:
//! controller.tick(delta_time, &input);
//! ```

use std::sync::Arc;

use glam::Vec3;
use log::{debug, trace};
use thiserror::Error;

use crate::audio::{LoopSource, OneShotSource};
use crate::camera::{CameraRig, LookAngles, Perspective};
use crate::input::{CursorManager, FrameInput};
use crate::physics::{PhysicsBody, Ray, Raycaster};
use crate::world::NoiseRegistry;

use super::config::PlayerConfig;
use super::hooks::TickHooks;
use super::sinks::{AnimationSink, OwnerAi, PromptSink};

/// Chase intensity reported to the owner when provoked.
const CHASE_INTENSITY: u32 = 12;

/// Construction failure. Every collaborator is required; the first missing
/// one is reported by name.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A collaborator reference was never supplied to the builder.
    #[error("player controller misconfigured: missing {0}")]
    MissingCollaborator(&'static str),
}

/// The player-character controller.
///
/// Owns its own state (movement flag, grounded flag, look angles, camera
/// rig, cursor) and drives every external system through injected trait
/// objects. Hosts construct it with [`PlayerController::builder`] and run
/// it through the [`TickHooks`] lifecycle.
pub struct PlayerController {
    /// Immutable tuning values
    config: PlayerConfig,
    /// Accumulated view orientation in degrees
    look: LookAngles,
    /// Two-mount camera rig (exactly one mount active)
    rig: CameraRig,
    /// Pointer capture state, applied to the window by the host
    cursor: CursorManager,
    /// Whether directional input produced a nonzero raw sum this tick
    is_moving: bool,
    /// Whether the body is in ground contact, per the physics collaborator
    is_grounded: bool,

    body: Box<dyn PhysicsBody>,
    raycaster: Box<dyn Raycaster>,
    animation: Box<dyn AnimationSink>,
    footsteps: Box<dyn LoopSource>,
    jump_sound: Box<dyn OneShotSource>,
    owner_ai: Box<dyn OwnerAi>,
    prompt: Box<dyn PromptSink>,
    noise: Arc<NoiseRegistry>,
}

impl PlayerController {
    /// Start assembling a controller.
    pub fn builder() -> PlayerControllerBuilder {
        PlayerControllerBuilder::new()
    }

    /// Whether directional input was nonzero on the last tick.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Whether the body currently has ground contact.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    /// Whether the eye-level camera mount is active.
    #[inline]
    pub fn is_first_person(&self) -> bool {
        self.rig.is_first_person()
    }

    /// The current camera perspective.
    #[inline]
    pub fn perspective(&self) -> Perspective {
        self.rig.perspective()
    }

    /// The accumulated look angles in degrees.
    #[inline]
    pub fn look(&self) -> LookAngles {
        self.look
    }

    /// The tuning values this controller was built with.
    #[inline]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Cursor capture state, for the host to mirror onto its window.
    #[inline]
    pub fn cursor(&self) -> &CursorManager {
        &self.cursor
    }

    /// Mutable cursor state, for the host to feed escape/click/focus events.
    #[inline]
    pub fn cursor_mut(&mut self) -> &mut CursorManager {
        &mut self.cursor
    }

    /// Locomotion pass: sum directional input, normalize, push one
    /// translation request, and report the movement flag.
    fn update_locomotion(&mut self, delta_time: f32, input: &FrameInput) {
        let forward_axis = input.movement.forward_axis();
        let right_axis = input.movement.right_axis();
        self.is_moving = forward_axis != 0 || right_axis != 0;

        if self.is_moving {
            let raw = self.look.forward_flat() * forward_axis as f32
                + self.look.right_flat() * right_axis as f32;
            // Normalizing keeps diagonal movement at the same speed as
            // axis-aligned movement
            let step = raw.normalize() * self.config.move_speed * delta_time;
            self.body.integrate_position(step);
        }

        // The flag goes out every tick, changed or not
        self.animation.set_moving(self.is_moving);
    }

    /// Look pass: accumulate pointer deltas, rotate the body, tilt the
    /// active mount, then handle the perspective toggle edge.
    fn update_look(&mut self, input: &FrameInput) {
        self.look.apply_delta(input.look_delta.0, input.look_delta.1);
        self.body.set_yaw(self.look.yaw_radians());
        self.rig.apply_pitch(self.look.pitch);

        if input.toggle_perspective {
            let perspective = self.rig.toggle();
            debug!("perspective toggled to {:?}", perspective);
        }
    }

    /// Footstep pass: keep the loop playing and feed the noise pool while
    /// walking on the ground, stop the loop otherwise.
    fn update_footsteps(&mut self, delta_time: f32) {
        if self.is_moving && self.is_grounded {
            if !self.footsteps.is_playing() {
                self.footsteps.play();
            }
            let magnitude = self.config.footstep_noise * delta_time;
            self.noise.add(magnitude);
            trace!("footstep noise +{}", magnitude);
        } else if self.footsteps.is_playing() {
            self.footsteps.stop();
        }
    }

    /// Jump pass: a key-down edge while grounded fires one impulse and one
    /// grunt. Airborne edges are dropped, never queued.
    fn update_jump(&mut self, input: &FrameInput) {
        if input.jump_pressed && self.is_grounded {
            self.body.apply_impulse(Vec3::Y * self.config.jump_force);
            self.jump_sound.play_one_shot();
            debug!("jump: impulse {}", self.config.jump_force);
        }
    }

    /// Chase pass: a key-down edge provokes the owner. Fire-and-forget.
    fn update_chase(&mut self, input: &FrameInput) {
        if input.provoke_chase {
            self.owner_ai.trigger_persistent_chase(CHASE_INTENSITY);
            debug!("owner provoked: persistent chase, intensity {}", CHASE_INTENSITY);
        }
    }

    /// Interaction pass: cast from the active mount and show the prompt
    /// only when the nearest hit in reach is interactable. Recomputed from
    /// scratch every tick.
    fn update_interaction(&mut self) {
        let (origin, direction) = self.rig.view_ray(self.body.position(), self.look.yaw);
        let ray = Ray::new(origin, direction);
        let hit = self.raycaster.cast(&ray, self.config.interact_range);
        let visible = hit.is_some_and(|h| h.is_interactable());
        self.prompt.set_visibility(if visible { 1.0 } else { 0.0 });
    }
}

impl TickHooks for PlayerController {
    fn init(&mut self) {
        self.cursor.capture();
        self.rig.set_perspective(Perspective::ThirdPerson);
        self.prompt.set_visibility(0.0);
        debug!("player controller ready: third person, cursor captured");
    }

    fn tick(&mut self, delta_time: f32, input: &FrameInput) {
        self.update_locomotion(delta_time, input);
        self.update_look(input);
        self.update_footsteps(delta_time);
        self.update_jump(input);
        self.update_chase(input);
        self.update_interaction();
    }

    fn contact_stay(&mut self) {
        if !self.is_grounded {
            debug!("grounded");
        }
        self.is_grounded = true;
    }

    fn contact_end(&mut self) {
        if self.is_grounded {
            debug!("airborne");
        }
        self.is_grounded = false;
        // Footsteps go silent with the ground contact, not a tick later
        if self.footsteps.is_playing() {
            self.footsteps.stop();
        }
    }
}

/// Assembles a [`PlayerController`], failing fast on missing collaborators.
#[derive(Default)]
pub struct PlayerControllerBuilder {
    config: PlayerConfig,
    body: Option<Box<dyn PhysicsBody>>,
    raycaster: Option<Box<dyn Raycaster>>,
    animation: Option<Box<dyn AnimationSink>>,
    footsteps: Option<Box<dyn LoopSource>>,
    jump_sound: Option<Box<dyn OneShotSource>>,
    owner_ai: Option<Box<dyn OwnerAi>>,
    prompt: Option<Box<dyn PromptSink>>,
    noise: Option<Arc<NoiseRegistry>>,
}

impl PlayerControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default tuning values.
    pub fn config(mut self, config: PlayerConfig) -> Self {
        self.config = config;
        self
    }

    /// The body handle in the host's physics world.
    pub fn body(mut self, body: impl PhysicsBody + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    /// The scene's raycast service.
    pub fn raycaster(mut self, raycaster: impl Raycaster + 'static) -> Self {
        self.raycaster = Some(Box::new(raycaster));
        self
    }

    /// The animation player receiving the movement flag.
    pub fn animation(mut self, animation: impl AnimationSink + 'static) -> Self {
        self.animation = Some(Box::new(animation));
        self
    }

    /// The looping footstep channel.
    pub fn footsteps(mut self, footsteps: impl LoopSource + 'static) -> Self {
        self.footsteps = Some(Box::new(footsteps));
        self
    }

    /// The one-shot jump channel.
    pub fn jump_sound(mut self, jump_sound: impl OneShotSource + 'static) -> Self {
        self.jump_sound = Some(Box::new(jump_sound));
        self
    }

    /// The owner's AI.
    pub fn owner_ai(mut self, owner_ai: impl OwnerAi + 'static) -> Self {
        self.owner_ai = Some(Box::new(owner_ai));
        self
    }

    /// The interaction prompt.
    pub fn prompt(mut self, prompt: impl PromptSink + 'static) -> Self {
        self.prompt = Some(Box::new(prompt));
        self
    }

    /// The shared noise pool.
    pub fn noise(mut self, noise: Arc<NoiseRegistry>) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Builds the controller. Every collaborator is required; a missing one
    /// is a fatal misconfiguration, reported rather than defaulted.
    pub fn build(self) -> Result<PlayerController, BuildError> {
        let body = self
            .body
            .ok_or(BuildError::MissingCollaborator("physics body"))?;
        let raycaster = self
            .raycaster
            .ok_or(BuildError::MissingCollaborator("raycast service"))?;
        let animation = self
            .animation
            .ok_or(BuildError::MissingCollaborator("animation sink"))?;
        let footsteps = self
            .footsteps
            .ok_or(BuildError::MissingCollaborator("footstep loop"))?;
        let jump_sound = self
            .jump_sound
            .ok_or(BuildError::MissingCollaborator("jump sound"))?;
        let owner_ai = self
            .owner_ai
            .ok_or(BuildError::MissingCollaborator("owner ai"))?;
        let prompt = self
            .prompt
            .ok_or(BuildError::MissingCollaborator("prompt sink"))?;
        let noise = self
            .noise
            .ok_or(BuildError::MissingCollaborator("noise registry"))?;

        Ok(PlayerController {
            config: self.config,
            look: LookAngles::new(),
            rig: CameraRig::new(),
            cursor: CursorManager::new(),
            is_moving: false,
            // Grounded is the initial state; the body starts on the floor
            is_grounded: true,
            body,
            raycaster,
            animation,
            footsteps,
            jump_sound,
            owner_ai,
            prompt,
            noise,
        })
    }
}
