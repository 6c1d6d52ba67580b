//! Drawing surface bounds

use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// The rectangular region `[0, width] x [0, height]` the ball lives in
///
/// Origin is the top-left corner and y grows downward, matching a 2D canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds for a surface of the given size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Centre point of the surface
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a circle of the given radius fits on both axes
    pub fn fits(&self, radius: f64) -> bool {
        self.width >= 2.0 * radius && self.height >= 2.0 * radius
    }

    /// Whether a circle at `center` lies fully inside the surface
    pub fn contains_circle(&self, center: Vec2, radius: f64) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }
}

impl From<(u32, u32)> for Bounds {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}
