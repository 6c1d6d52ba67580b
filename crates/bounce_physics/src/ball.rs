//! Ball state and fixed ball parameters

use crate::bounds::Bounds;
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Default ball radius in surface pixels
pub const DEFAULT_RADIUS: f64 = 20.0;
/// Default per-frame downward velocity increment
pub const DEFAULT_GRAVITY: f64 = 0.1;
/// Default fraction of vertical speed kept after a floor bounce
pub const DEFAULT_BOUNCE: f64 = 0.8;
/// Default starting velocity (pixels per frame)
pub const DEFAULT_VELOCITY: Vec2 = Vec2::new(2.0, 2.0);

/// Mutable ball state: position and velocity
///
/// Owned by the caller and threaded through [`crate::step`]; nothing about a
/// ball lives in shared state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre of the ball in surface coordinates
    pub position: Vec2,
    /// Velocity in pixels per frame
    pub velocity: Vec2,
}

impl Ball {
    /// Create a ball at `position` moving with `velocity`
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Create a ball at the centre of `bounds` with the default velocity
    pub fn centered(bounds: Bounds) -> Self {
        Self::new(bounds.center(), DEFAULT_VELOCITY)
    }

    /// Set the velocity of this ball
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Whether position and velocity are all finite numbers
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Constants that never change during a simulation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallParams {
    /// Ball radius
    pub radius: f64,
    /// Added to vy every frame
    pub gravity: f64,
    /// Bounce coefficient in [0, 1): fraction of vy kept after a floor hit
    pub bounce: f64,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            gravity: DEFAULT_GRAVITY,
            bounce: DEFAULT_BOUNCE,
        }
    }
}

impl BallParams {
    /// Create parameters, clamping bounce into [0.0, 1.0] and radius to be non-negative
    pub fn new(radius: f64, gravity: f64, bounce: f64) -> Self {
        Self {
            radius: radius.max(0.0),
            gravity,
            bounce: bounce.clamp(0.0, 1.0),
        }
    }
}
