//! Scripted Walkthrough
//!
//! Drives the player controller through a fixed route in the manor hall:
//! look around, walk up to the display case, lean in for a closer look,
//! hop, provoke the owner, and retreat to the entrance. The script runs
//! the same host loop a windowed build would: pump events into the
//! collector, snapshot, tick the controller, advance physics, report
//! ground contact.

use std::sync::Arc;

use glam::Vec3;
use log::info;

use crate::input::{CursorAction, InputCollector, KeyCode};
use crate::player::{BuildError, PlayerController, TickHooks};
use crate::world::NoiseRegistry;

use super::stage::{ChaseLog, LogAnimation, LogLoop, LogOneShot, LogPrompt, SimBody, Stage};

/// Fixed simulation step, 60 ticks per second.
const TICK: f32 = 1.0 / 60.0;

/// What the walkthrough observed, for the binary's closing summary.
#[derive(Debug, Clone)]
pub struct WalkthroughReport {
    pub ticks: u32,
    pub final_position: Vec3,
    pub noise_accumulated: f32,
    pub prompt_was_shown: bool,
    pub jumps: u32,
    pub provocations: Vec<u32>,
}

/// One windowless host: input collection, the controller, and the toy
/// physics step, advanced a tick at a time.
struct Host {
    controller: PlayerController,
    collector: InputCollector,
    body: SimBody,
    on_floor: bool,
    ticks: u32,
}

impl Host {
    fn tick(&mut self) {
        let input = self.collector.snapshot();
        self.controller.tick(TICK, &input);
        self.collector.end_frame();

        // Physics step after the controller, contact report after physics
        let on_floor = self.body.step(TICK);
        if on_floor {
            self.controller.contact_stay();
        } else if self.on_floor {
            self.controller.contact_end();
        }
        self.on_floor = on_floor;
        self.ticks += 1;
    }

    fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    fn press(&mut self, key: KeyCode) {
        self.collector.handle_key(key, true);
    }

    fn release(&mut self, key: KeyCode) {
        self.collector.handle_key(key, false);
    }

    /// Press, let the edge land in one tick, release.
    fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.tick();
        self.release(key);
    }
}

/// Runs the scripted route and returns what happened.
pub fn run_walkthrough() -> Result<WalkthroughReport, BuildError> {
    let noise = NoiseRegistry::shared();
    let body = SimBody::spawn(Vec3::ZERO);
    let stage = Stage::manor_hall();
    let footsteps = LogLoop::new("footsteps");
    let jump_grunt = LogOneShot::new("jump grunt");
    let prompt = LogPrompt::default();
    let owner = ChaseLog::default();

    let controller = PlayerController::builder()
        .body(body.clone())
        .raycaster(stage.colliders().clone())
        .animation(LogAnimation::default())
        .footsteps(footsteps.clone())
        .jump_sound(jump_grunt.clone())
        .owner_ai(owner.clone())
        .prompt(prompt.clone())
        .noise(Arc::clone(&noise))
        .build()?;

    let mut host = Host {
        controller,
        collector: InputCollector::new(),
        body: body.clone(),
        on_floor: true,
        ticks: 0,
    };

    host.controller.init();
    info!("cursor: {}", host.controller.cursor().status_message());

    info!("phase: looking around the hall");
    for _ in 0..15 {
        host.collector.handle_mouse_delta(6.0, 0.0);
        host.tick();
    }
    for _ in 0..15 {
        host.collector.handle_mouse_delta(-6.0, 0.0);
        host.tick();
    }
    for _ in 0..3 {
        host.collector.handle_mouse_delta(0.0, 20.0);
        host.tick();
    }
    for _ in 0..3 {
        host.collector.handle_mouse_delta(0.0, -20.0);
        host.tick();
    }

    info!("phase: walking to the display case");
    host.press(KeyCode::W);
    host.run(33);
    host.release(KeyCode::W);
    host.tick();

    info!("phase: leaning in for a closer look");
    host.tap(KeyCode::C);
    host.run(30);

    info!("phase: startled hop");
    host.tap(KeyCode::Space);
    for _ in 0..240 {
        if host.on_floor {
            break;
        }
        host.tick();
    }

    info!("phase: provoking the owner");
    host.tap(KeyCode::X);

    info!("phase: retreating to the entrance");
    host.tap(KeyCode::C);
    for _ in 0..15 {
        host.collector.handle_mouse_delta(12.0, 0.0);
        host.tick();
    }
    host.press(KeyCode::W);
    host.run(30);
    host.release(KeyCode::W);
    host.tick();

    info!("phase: pausing at the door");
    if host.controller.cursor_mut().handle_escape() == CursorAction::ApplyState {
        info!("cursor: {}", host.controller.cursor().status_message());
    }

    let snapshot = host.body.snapshot();
    let report = WalkthroughReport {
        ticks: host.ticks,
        final_position: snapshot.position,
        noise_accumulated: noise.level(),
        prompt_was_shown: prompt.was_shown(),
        jumps: jump_grunt.trigger_count(),
        provocations: owner.provocations(),
    };
    info!(
        "walkthrough complete: {} ticks, noise {:.4}",
        report.ticks, report.noise_accumulated
    );
    Ok(report)
}
