//! Error types for start-up and per-frame failures
//!
//! Both kinds are terminal for the animation: there are no retries.

use std::fmt;

use bounce_physics::Vec2;
use bounce_render::{DrawError, SurfaceError};

/// Failure before the first frame
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// Drawing surface or its context is missing
    Surface(SurfaceError),
    /// Host window could not be created
    Window(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Surface(err) => write!(f, "{}", err),
            SetupError::Window(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Surface(err) => Some(err),
            SetupError::Window(_) => None,
        }
    }
}

impl From<SurfaceError> for SetupError {
    fn from(err: SurfaceError) -> Self {
        SetupError::Surface(err)
    }
}

/// Failure while running one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameError {
    /// A drawing call failed
    Draw(DrawError),
    /// The physics step produced NaN or infinity
    NonFinite { position: Vec2, velocity: Vec2 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Draw(err) => write!(f, "{}", err),
            FrameError::NonFinite { position, velocity } => write!(
                f,
                "Ball state is not finite: position ({}, {}), velocity ({}, {})",
                position.x, position.y, velocity.x, velocity.y
            ),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Draw(err) => Some(err),
            FrameError::NonFinite { .. } => None,
        }
    }
}

impl From<DrawError> for FrameError {
    fn from(err: DrawError) -> Self {
        FrameError::Draw(err)
    }
}
