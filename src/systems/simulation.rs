//! Simulation system
//!
//! Wraps the animation loop with frame timing statistics for the debug log.

use std::time::{Duration, Instant};
use bounce_core::{
    AnimationLoop, Bounds, Color, DrawingContext, FrameError, LoopControl, SetupError, Simulation,
    Variant, Vec2,
};

use bounce::config::SimulationConfig;

/// How often frame statistics are logged
const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Drives one [`AnimationLoop`] frame per redraw
pub struct SimulationSystem {
    animation: AnimationLoop,
    variant: Variant,
    stats_since: Instant,
    stats_frames: u64,
}

impl SimulationSystem {
    /// Create an idle system with the ball centred in `bounds`
    pub fn new(config: &SimulationConfig, bounds: Bounds, color: Color) -> Self {
        let variant = config.variant;
        let simulation = Simulation::centered(bounds, variant)
            .with_walls(config.walls)
            .with_color(color);
        Self {
            animation: AnimationLoop::new(simulation, variant.error_policy()),
            variant,
            stats_since: Instant::now(),
            stats_frames: 0,
        }
    }

    /// Start the loop; returns whether a first frame should be requested
    pub fn start(&mut self) -> bool {
        log::debug!("Starting {} variant", self.variant);
        self.stats_since = Instant::now();
        self.animation.start() == LoopControl::Continue
    }

    /// Report a start-up failure; the loop never runs
    pub fn fail_setup(&mut self, err: &SetupError) {
        self.animation.fail_setup(err);
    }

    pub fn stop(&mut self) {
        self.animation.stop();
    }

    /// Run one frame against `ctx`
    pub fn frame<C: DrawingContext + ?Sized>(
        &mut self,
        ctx: &mut C,
        bounds: Bounds,
    ) -> Result<LoopControl, FrameError> {
        let control = self.animation.frame(ctx, bounds)?;
        if control == LoopControl::Continue {
            self.record_frame();
        }
        Ok(control)
    }

    /// Current ball position
    pub fn position(&self) -> Vec2 {
        self.animation.simulation().ball().position
    }

    pub fn frames(&self) -> u64 {
        self.animation.frames()
    }

    fn record_frame(&mut self) {
        self.stats_frames += 1;
        let elapsed = self.stats_since.elapsed();
        if elapsed >= STATS_INTERVAL {
            let fps = self.stats_frames as f64 / elapsed.as_secs_f64();
            let pos = self.position();
            log::debug!(
                "{} frames total, {:.1} fps, ball at ({:.1}, {:.1})",
                self.frames(),
                fps,
                pos.x,
                pos.y
            );
            self.stats_since = Instant::now();
            self.stats_frames = 0;
        }
    }
}
