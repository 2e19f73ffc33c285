//! Host-driven lifecycle module
//!
//! The controller never owns a loop. A host (game binary, test harness)
//! constructs it, calls `init` once, then drives it: one `tick` per
//! simulation step with that step's input snapshot, plus contact
//! notifications forwarded from the physics collaborator whenever its
//! solver reports them.
//!
//! # Usage
//! ```rust,ignore
//! controller.init();
//! loop {
//!     let input = collector.snapshot();
//!     controller.tick(delta_time, &input);
//!     collector.end_frame();
//!     // physics step, then forward its contact reports:
//!     if body_touching_ground { controller.contact_stay(); }
//!     if body_left_ground { controller.contact_end(); }
//! }
//! ```

use crate::input::FrameInput;

/// Lifecycle surface a host drives.
///
/// Contact calls may land before or after the same frame's `tick`; both
/// handlers are idempotent, so delivery order within a frame does not
/// matter.
pub trait TickHooks {
    /// One-time setup after construction, before the first tick.
    fn init(&mut self);

    /// One simulation step. `delta_time` is the step length in seconds,
    /// `input` the snapshot collected for this step.
    fn tick(&mut self, delta_time: f32, input: &FrameInput);

    /// The body is still in contact with walkable ground. May be called
    /// repeatedly while contact persists.
    fn contact_stay(&mut self);

    /// The body's ground contact ended.
    fn contact_end(&mut self);
}
