//! Ball physics for Bounce
//!
//! This crate provides the per-frame simulation of a single ball, including:
//! - Gravity and explicit Euler integration (one step per frame)
//! - Wall, floor and ceiling response with configurable variants
//! - Rest detection to stop endless micro-bouncing

pub mod ball;
pub mod bounds;
pub mod contact;
pub mod rules;
pub mod step;
mod vec2;

// Re-export commonly used types
pub use ball::{Ball, BallParams, DEFAULT_BOUNCE, DEFAULT_GRAVITY, DEFAULT_RADIUS, DEFAULT_VELOCITY};
pub use bounds::Bounds;
pub use contact::Contacts;
pub use rules::{CeilingResponse, StepRules, WallResponse, DEFAULT_REST_THRESHOLD};
pub use step::{collide, step, StepOutcome};
pub use vec2::Vec2;
