//! Collision response rules
//!
//! The two historical variants of the animation disagree on how the ceiling
//! responds and whether side walls clamp position. Both behaviours are kept as
//! presets instead of picking one.

use serde::{Deserialize, Serialize};

/// Threshold below which vy is snapped to zero after a floor bounce
pub const DEFAULT_REST_THRESHOLD: f64 = 0.15;

/// Response to hitting the left or right wall
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallResponse {
    /// Move the ball back inside, then negate vx
    #[default]
    ClampAndReflect,
    /// Negate vx only; the ball may overlap the wall for a frame
    ReflectOnly,
}

/// Response to hitting the ceiling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingResponse {
    /// `vy = -vy`
    #[default]
    Elastic,
    /// `vy = -vy * bounce`, same as the floor
    Damped,
}

/// Collision response of one simulation variant
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRules {
    /// Side wall behaviour
    pub walls: WallResponse,
    /// Ceiling behaviour
    pub ceiling: CeilingResponse,
    /// After a floor bounce, |vy| below this snaps to exactly zero
    pub rest_threshold: f64,
}

impl Default for StepRules {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl StepRules {
    /// Plain variant: clamping walls, elastic ceiling, no rest snap
    ///
    /// A zero threshold never snaps, so a settled ball keeps micro-bouncing.
    pub const PLAIN: Self = Self {
        walls: WallResponse::ClampAndReflect,
        ceiling: CeilingResponse::Elastic,
        rest_threshold: 0.0,
    };

    /// Guarded variant: clamping walls, ceiling damped like the floor, rest snap
    pub const GUARDED: Self = Self {
        walls: WallResponse::ClampAndReflect,
        ceiling: CeilingResponse::Damped,
        rest_threshold: DEFAULT_REST_THRESHOLD,
    };

    /// Set the wall response
    pub fn with_walls(mut self, walls: WallResponse) -> Self {
        self.walls = walls;
        self
    }
}
