//! The per-frame update step
//!
//! One call advances the ball by exactly one frame: gravity is added to the
//! vertical velocity, velocity is integrated into position (explicit Euler,
//! one unit of time per frame), then the edges of the surface are resolved.

use crate::ball::{Ball, BallParams};
use crate::bounds::Bounds;
use crate::contact::Contacts;
use crate::rules::{CeilingResponse, StepRules, WallResponse};

/// Result of advancing a ball by one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    /// Ball state after the frame
    pub ball: Ball,
    /// Edges touched during the frame
    pub contacts: Contacts,
}

/// Advance `ball` by one frame
///
/// Pure: the input is untouched and the next state is returned, so several
/// simulations can run side by side and tests can replay exact sequences.
pub fn step(ball: &Ball, params: &BallParams, rules: &StepRules, bounds: Bounds) -> StepOutcome {
    let mut next = *ball;

    // Gravity, then integrate
    next.velocity.y += params.gravity;
    next.position += next.velocity;

    let (ball, contacts) = collide(&next, params, rules, bounds);
    StepOutcome { ball, contacts }
}

/// Resolve collisions with the surface edges without integrating
///
/// Right wall is checked before left and floor before ceiling; on a surface
/// smaller than the ball's diameter only the first matching edge is applied.
pub fn collide(ball: &Ball, params: &BallParams, rules: &StepRules, bounds: Bounds) -> (Ball, Contacts) {
    let mut ball = *ball;
    let mut contacts = Contacts::empty();
    let r = params.radius;

    // Side walls
    if ball.position.x + r > bounds.width {
        if rules.walls == WallResponse::ClampAndReflect {
            ball.position.x = bounds.width - r;
        }
        ball.velocity.x = -ball.velocity.x;
        contacts |= Contacts::RIGHT;
    } else if ball.position.x - r < 0.0 {
        if rules.walls == WallResponse::ClampAndReflect {
            ball.position.x = r;
        }
        ball.velocity.x = -ball.velocity.x;
        contacts |= Contacts::LEFT;
    }

    // Floor and ceiling
    if ball.position.y + r > bounds.height {
        ball.position.y = bounds.height - r;
        ball.velocity.y = -ball.velocity.y * params.bounce;
        contacts |= Contacts::FLOOR;

        // Stop the endless micro-bounce once the rebound is negligible
        if ball.velocity.y.abs() < rules.rest_threshold {
            ball.velocity.y = 0.0;
            contacts |= Contacts::RESTED;
        }
    } else if ball.position.y - r < 0.0 {
        ball.position.y = r;
        ball.velocity.y = match rules.ceiling {
            CeilingResponse::Elastic => -ball.velocity.y,
            CeilingResponse::Damped => -ball.velocity.y * params.bounce,
        };
        contacts |= Contacts::CEILING;
    }

    (ball, contacts)
}
