//! The ball simulation: one physics step plus one draw per frame

use bounce_physics::{step, Ball, BallParams, Bounds, Contacts, StepRules, WallResponse};
use bounce_render::{draw_ball, Color, DrawingContext};

use crate::error::FrameError;
use crate::variant::Variant;

/// A ball, its constants, its collision rules and its fill colour
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    ball: Ball,
    params: BallParams,
    rules: StepRules,
    color: Color,
}

impl Simulation {
    /// Create a simulation from explicit parts, filled red
    pub fn new(ball: Ball, params: BallParams, rules: StepRules) -> Self {
        Self {
            ball,
            params,
            rules,
            color: Color::RED,
        }
    }

    /// Ball at the centre of `bounds` with the default constants and the
    /// variant's rules
    ///
    /// A surface narrower or shorter than the ball's diameter is accepted, but
    /// only one edge per axis can apply each frame.
    pub fn centered(bounds: Bounds, variant: Variant) -> Self {
        let params = BallParams::default();
        if !bounds.fits(params.radius) {
            log::warn!(
                "Surface {}x{} is smaller than the ball diameter {}",
                bounds.width,
                bounds.height,
                params.radius * 2.0
            );
        }
        Self::new(Ball::centered(bounds), params, variant.rules())
    }

    /// Set the fill colour
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replace how the side walls respond, keeping the rest of the rules
    pub fn with_walls(mut self, walls: WallResponse) -> Self {
        self.rules = self.rules.with_walls(walls);
        self
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Advance the physics by one frame without drawing
    ///
    /// A step that would leave the ball with a NaN or infinite component is
    /// rejected and the previous state kept.
    pub fn step(&mut self, bounds: Bounds) -> Result<Contacts, FrameError> {
        let outcome = step(&self.ball, &self.params, &self.rules, bounds);
        if !outcome.ball.is_finite() {
            return Err(FrameError::NonFinite {
                position: outcome.ball.position,
                velocity: outcome.ball.velocity,
            });
        }
        self.ball = outcome.ball;
        Ok(outcome.contacts)
    }

    /// Draw the current state: clear the whole surface, then one filled disc
    pub fn render<C: DrawingContext + ?Sized>(
        &self,
        ctx: &mut C,
        bounds: Bounds,
    ) -> Result<(), FrameError> {
        draw_ball(ctx, bounds, self.ball.position, self.params.radius, self.color)?;
        Ok(())
    }

    /// One frame: physics step then draw
    pub fn advance<C: DrawingContext + ?Sized>(
        &mut self,
        ctx: &mut C,
        bounds: Bounds,
    ) -> Result<Contacts, FrameError> {
        let contacts = self.step(bounds)?;
        self.render(ctx, bounds)?;
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_physics::Vec2;
    use bounce_render::{CommandRecorder, DrawCommand};

    const BOUNDS: Bounds = Bounds::new(500.0, 300.0);

    #[test]
    fn test_centered_start() {
        let sim = Simulation::centered(BOUNDS, Variant::Guarded);
        assert_eq!(sim.ball().position, Vec2::new(250.0, 150.0));
        assert_eq!(sim.ball().velocity, Vec2::new(2.0, 2.0));
        assert_eq!(sim.color(), Color::RED);
    }

    #[test]
    fn test_advance_steps_then_draws() {
        let mut sim = Simulation::centered(BOUNDS, Variant::Plain);
        let mut rec = CommandRecorder::new();

        let contacts = sim.advance(&mut rec, BOUNDS).unwrap();
        assert!(contacts.is_empty());

        let ball = sim.ball();
        assert!((ball.velocity.y - 2.1).abs() < 1e-12);
        assert!((ball.position.x - 252.0).abs() < 1e-12);
        assert!((ball.position.y - 152.1).abs() < 1e-12);

        // The disc is drawn at the post-step position
        let arc = rec
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Arc { x, y, radius, .. } => Some((*x, *y, *radius)),
                _ => None,
            })
            .unwrap();
        assert!((arc.0 - 252.0).abs() < 1e-12);
        assert!((arc.1 - 152.1).abs() < 1e-12);
        assert_eq!(arc.2, 20.0);
    }

    #[test]
    fn test_advance_clears_whole_surface_first() {
        let mut sim = Simulation::centered(BOUNDS, Variant::Guarded);
        let mut rec = CommandRecorder::new();
        sim.advance(&mut rec, BOUNDS).unwrap();

        assert_eq!(
            rec.commands()[0],
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 500.0,
                height: 300.0
            }
        );
    }

    #[test]
    fn test_non_finite_step_keeps_previous_state() {
        let params = BallParams::new(20.0, f64::INFINITY, 0.8);
        let ball = Ball::centered(BOUNDS);
        let mut sim = Simulation::new(ball, params, StepRules::PLAIN);

        let err = sim.step(BOUNDS).unwrap_err();
        assert!(matches!(err, FrameError::NonFinite { .. }));
        assert_eq!(sim.ball(), &ball);
    }

    #[test]
    fn test_draw_error_surfaces_as_frame_error() {
        let mut params = BallParams::default();
        params.radius = -1.0;
        let mut sim = Simulation::new(Ball::centered(BOUNDS), params, StepRules::PLAIN);
        let mut rec = CommandRecorder::new();

        let err = sim.advance(&mut rec, BOUNDS).unwrap_err();
        assert!(matches!(err, FrameError::Draw(_)));
    }

    #[test]
    fn test_with_color() {
        let sim = Simulation::centered(BOUNDS, Variant::Plain).with_color(Color::WHITE);
        assert_eq!(sim.color(), Color::WHITE);
    }

    #[test]
    fn test_with_walls_reflect_only_lets_ball_overlap() {
        let ball = Ball::new(Vec2::new(479.0, 150.0), Vec2::new(5.0, 0.0));
        let mut sim =
            Simulation::new(ball, BallParams::default(), StepRules::GUARDED).with_walls(WallResponse::ReflectOnly);

        let contacts = sim.step(BOUNDS).unwrap();
        assert_eq!(contacts, Contacts::RIGHT);
        assert_eq!(sim.ball().position.x, 484.0);
        assert_eq!(sim.ball().velocity.x, -5.0);
    }

    #[test]
    fn test_with_walls_keeps_variant_ceiling() {
        // Damped ceiling survives the wall override
        let ball = Ball::new(Vec2::new(250.0, 21.0), Vec2::new(0.0, -5.0));
        let mut sim = Simulation::new(ball, BallParams::default(), Variant::Guarded.rules())
            .with_walls(WallResponse::ReflectOnly);

        let contacts = sim.step(BOUNDS).unwrap();
        assert_eq!(contacts, Contacts::CEILING);
        assert!((sim.ball().velocity.y - 3.92).abs() < 1e-12);
    }

    #[test]
    fn test_centered_on_tiny_surface_still_builds() {
        let tiny = Bounds::new(30.0, 30.0);
        let sim = Simulation::centered(tiny, Variant::Guarded);
        assert_eq!(sim.ball().position, Vec2::new(15.0, 15.0));
    }
}
