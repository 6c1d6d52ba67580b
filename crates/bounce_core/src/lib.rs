//! Core types for Bounce
//!
//! - [`Simulation`] - A ball stepped by gravity and drawn once per frame
//! - [`AnimationLoop`] - Idle / running / halted lifecycle around a simulation
//! - [`Variant`] - The two historical behaviours and what each one implies
//! - [`SetupError`], [`FrameError`] - Start-up and per-frame failures

mod animation;
mod error;
mod simulation;
mod variant;

pub use animation::{AnimationLoop, HaltReason, LoopControl, LoopState};
pub use error::{FrameError, SetupError};
pub use simulation::Simulation;
pub use variant::{ErrorPolicy, StartMode, Variant};

// Re-export the physics and drawing types that appear in the public API
pub use bounce_physics::{Ball, BallParams, Bounds, Contacts, StepRules, Vec2, WallResponse};
pub use bounce_render::{Color, DrawError, DrawingContext, SurfaceError};
