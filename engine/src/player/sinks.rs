//! Collaborator sink traits.
//!
//! One trait per external system the controller pushes state into. All are
//! fire-and-forget: the controller never reads anything back through them.

/// Receives the player's movement flag each tick.
///
/// Implementations typically switch between idle and walk cycles. The flag
/// arrives every tick, including when unchanged.
pub trait AnimationSink {
    fn set_moving(&mut self, moving: bool);
}

/// Receives the interaction prompt's visibility.
///
/// `alpha` is in `[0, 1]`; the controller only ever sends the endpoints.
/// Setting the current value again is expected and must be harmless.
pub trait PromptSink {
    fn set_visibility(&mut self, alpha: f32);
}

/// The owner's AI, reachable for exactly one thing: being provoked.
pub trait OwnerAi {
    /// Begin a persistent chase of the player at the given intensity.
    /// No result is awaited and nothing is retried.
    fn trigger_persistent_chase(&mut self, intensity: u32);
}
