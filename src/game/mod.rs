//! Game Module
//!
//! Contains game-specific systems that build on top of the engine: the
//! manor stage (colliders, a toy kinematic body, logging collaborators)
//! and a scripted walkthrough that exercises the player controller
//! end to end.

pub mod stage;
pub mod walkthrough;

pub use stage::{
    BodySnapshot, ChaseLog, LogAnimation, LogLoop, LogOneShot, LogPrompt, SimBody, Stage,
    PLAYER_MASS,
};
pub use walkthrough::{run_walkthrough, WalkthroughReport};
