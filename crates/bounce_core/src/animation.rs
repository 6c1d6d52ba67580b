//! Frame-driven animation loop
//!
//! The host owns the scheduling primitive (a redraw request, an animation
//! frame callback). It calls [`AnimationLoop::frame`] once per scheduled frame
//! and asks for another only while the loop answers [`LoopControl::Continue`].
//! At most one frame is ever pending.

use bounce_physics::Bounds;
use bounce_render::DrawingContext;

use crate::error::{FrameError, SetupError};
use crate::simulation::Simulation;
use crate::variant::{ErrorPolicy, Variant};

/// Why a loop stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// `stop()` was called
    Stopped,
    /// A frame returned an error
    FrameFailed,
    /// The drawing surface was never acquired
    SetupFailed,
}

/// Lifecycle state of an [`AnimationLoop`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopState {
    Idle,
    Running,
    Halted(HaltReason),
}

/// Whether the host should schedule another frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// A [`Simulation`] driven one frame at a time
#[derive(Clone, Debug)]
pub struct AnimationLoop {
    simulation: Simulation,
    policy: ErrorPolicy,
    state: LoopState,
    frames: u64,
}

impl AnimationLoop {
    /// Create an idle loop
    pub fn new(simulation: Simulation, policy: ErrorPolicy) -> Self {
        Self {
            simulation,
            policy,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Idle loop with the ball centred in `bounds` and the variant's rules and policy
    pub fn for_variant(variant: Variant, bounds: Bounds) -> Self {
        Self::new(Simulation::centered(bounds, variant), variant.error_policy())
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// True once the loop can never schedule another frame
    pub fn is_halted(&self) -> bool {
        matches!(self.state, LoopState::Halted(_))
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Number of frames completed successfully
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }


    /// Move from idle to running
    ///
    /// Returns `Continue` when the host should schedule the first frame. A
    /// halted loop stays halted.
    pub fn start(&mut self) -> LoopControl {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                log::info!("Animation started");
                LoopControl::Continue
            }
            LoopState::Running => LoopControl::Continue,
            LoopState::Halted(_) => LoopControl::Stop,
        }
    }

    /// Halt the loop; no further frames advance the simulation
    pub fn stop(&mut self) {
        if !self.is_halted() {
            log::info!("Animation stopped after {} frames", self.frames);
            self.state = LoopState::Halted(HaltReason::Stopped);
        }
    }

    /// Report a start-up failure and halt without ever running a frame
    pub fn fail_setup(&mut self, err: &SetupError) {
        log::error!("{}", err);
        self.state = LoopState::Halted(HaltReason::SetupFailed);
    }

    /// Run one scheduled frame
    ///
    /// An idle or halted loop does nothing and returns `Ok(Stop)`. On a frame
    /// error the loop halts; under [`ErrorPolicy::Halt`] the error is logged
    /// and `Ok(Stop)` returned, under [`ErrorPolicy::Propagate`] it is
    /// returned to the caller.
    pub fn frame<C: DrawingContext + ?Sized>(
        &mut self,
        ctx: &mut C,
        bounds: Bounds,
    ) -> Result<LoopControl, FrameError> {
        if !self.is_running() {
            return Ok(LoopControl::Stop);
        }

        match self.simulation.advance(ctx, bounds) {
            Ok(contacts) => {
                self.frames += 1;
                if contacts.any_edge() {
                    log::trace!("Frame {}: contacts {:?}", self.frames, contacts);
                }
                Ok(LoopControl::Continue)
            }
            Err(err) => {
                self.state = LoopState::Halted(HaltReason::FrameFailed);
                match self.policy {
                    ErrorPolicy::Halt => {
                        log::error!("Error during update loop: {}", err);
                        Ok(LoopControl::Stop)
                    }
                    ErrorPolicy::Propagate => Err(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_physics::{Ball, BallParams, StepRules};
    use bounce_render::CommandRecorder;

    const BOUNDS: Bounds = Bounds::new(500.0, 300.0);

    fn broken_simulation() -> Simulation {
        let mut params = BallParams::default();
        params.radius = -5.0;
        Simulation::new(Ball::centered(BOUNDS), params, StepRules::PLAIN)
    }

    #[test]
    fn test_new_loop_is_idle() {
        let lp = AnimationLoop::for_variant(Variant::Guarded, BOUNDS);
        assert_eq!(lp.state(), LoopState::Idle);
        assert!(!lp.is_halted());
        assert_eq!(lp.frames(), 0);
        assert_eq!(lp.policy(), ErrorPolicy::Halt);
    }

    #[test]
    fn test_idle_frame_does_nothing() {
        let mut lp = AnimationLoop::for_variant(Variant::Plain, BOUNDS);
        let mut rec = CommandRecorder::new();

        assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Stop));
        assert!(rec.is_empty());
        assert_eq!(lp.simulation().ball(), &Ball::centered(BOUNDS));
    }

    #[test]
    fn test_start_then_frames_continue() {
        let mut lp = AnimationLoop::for_variant(Variant::Plain, BOUNDS);
        let mut rec = CommandRecorder::new();

        assert_eq!(lp.start(), LoopControl::Continue);
        assert!(lp.is_running());
        for _ in 0..3 {
            assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Continue));
        }
        assert_eq!(lp.frames(), 3);
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut lp = AnimationLoop::for_variant(Variant::Plain, BOUNDS);
        lp.start();
        assert_eq!(lp.start(), LoopControl::Continue);
        assert_eq!(lp.state(), LoopState::Running);
    }

    #[test]
    fn test_stop_halts_and_freezes_state() {
        let mut lp = AnimationLoop::for_variant(Variant::Guarded, BOUNDS);
        let mut rec = CommandRecorder::new();
        lp.start();
        lp.frame(&mut rec, BOUNDS).unwrap();
        let ball = *lp.simulation().ball();

        lp.stop();
        assert_eq!(lp.state(), LoopState::Halted(HaltReason::Stopped));
        assert!(lp.is_halted());
        assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Stop));
        assert_eq!(lp.simulation().ball(), &ball);

        // Cannot restart
        assert_eq!(lp.start(), LoopControl::Stop);
    }

    #[test]
    fn test_halt_policy_swallows_error() {
        let mut lp = AnimationLoop::new(broken_simulation(), ErrorPolicy::Halt);
        let mut rec = CommandRecorder::new();
        lp.start();

        assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Stop));
        assert_eq!(lp.state(), LoopState::Halted(HaltReason::FrameFailed));
        assert_eq!(lp.frames(), 0);
    }

    #[test]
    fn test_propagate_policy_returns_error() {
        let mut lp = AnimationLoop::new(broken_simulation(), ErrorPolicy::Propagate);
        let mut rec = CommandRecorder::new();
        lp.start();

        let err = lp.frame(&mut rec, BOUNDS).unwrap_err();
        assert!(matches!(err, FrameError::Draw(_)));
        assert_eq!(lp.state(), LoopState::Halted(HaltReason::FrameFailed));
        assert!(lp.is_halted());

        // Later frames are inert
        assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Stop));
    }

    #[test]
    fn test_fail_setup_never_runs() {
        let mut lp = AnimationLoop::for_variant(Variant::Guarded, BOUNDS);
        lp.fail_setup(&SetupError::Window("headless".to_string()));

        assert_eq!(lp.state(), LoopState::Halted(HaltReason::SetupFailed));
        assert_eq!(lp.start(), LoopControl::Stop);
    }
}
