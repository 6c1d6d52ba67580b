//! Integration tests for the animation loop
//!
//! These drive the loop the way a host does: start it, then call `frame`
//! once per scheduled frame against a recording drawing context, and check
//! what ended up on the surface.

use bounce_core::{
    AnimationLoop, Ball, BallParams, Bounds, Contacts, ErrorPolicy, FrameError, HaltReason,
    LoopControl, LoopState, Simulation, StepRules, Variant, Vec2,
};
use bounce_render::{CommandRecorder, DrawCommand};

const BOUNDS: Bounds = Bounds::new(500.0, 300.0);

/// Run frames until the loop stops or `limit` is reached
fn run(lp: &mut AnimationLoop, rec: &mut CommandRecorder, limit: usize) -> usize {
    let mut count = 0;
    while count < limit {
        rec.clear();
        match lp.frame(rec, BOUNDS) {
            Ok(LoopControl::Continue) => count += 1,
            _ => break,
        }
    }
    count
}

// ==================== Lifecycle ====================

#[test]
fn test_every_frame_draws_exactly_one_disc() {
    let mut lp = AnimationLoop::for_variant(Variant::Guarded, BOUNDS);
    let mut rec = CommandRecorder::new();
    lp.start();

    for _ in 0..50 {
        rec.clear();
        assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Continue));

        let batch = rec.batch(BOUNDS);
        assert!(batch.cleared, "Each frame should clear the full surface");
        assert_eq!(batch.circles.len(), 1, "Each frame should draw a single ball");

        let circle = &batch.circles[0];
        assert_eq!(circle.center, lp.simulation().ball().position);
        assert_eq!(circle.radius, 20.0);
    }
    assert_eq!(lp.frames(), 50);
}

#[test]
fn test_ball_stays_inside_surface() {
    for variant in [Variant::Guarded, Variant::Plain] {
        let mut lp = AnimationLoop::for_variant(variant, BOUNDS);
        let mut rec = CommandRecorder::new();
        lp.start();

        for _ in 0..3000 {
            rec.clear();
            lp.frame(&mut rec, BOUNDS).unwrap();
            let ball = lp.simulation().ball();
            assert!(
                BOUNDS.contains_circle(ball.position, 20.0),
                "{} variant left the surface at {:?}",
                variant,
                ball.position
            );
        }
    }
}

#[test]
fn test_dropped_ball_comes_to_rest_on_floor() {
    let mut lp = AnimationLoop::for_variant(Variant::Guarded, BOUNDS);
    let mut rec = CommandRecorder::new();
    lp.start();

    assert_eq!(run(&mut lp, &mut rec, 2000), 2000);

    let ball = lp.simulation().ball();
    assert_eq!(ball.position.y, 280.0);
    assert!(ball.velocity.y.abs() < 0.15);
}

#[test]
fn test_stop_ends_scheduling() {
    let mut lp = AnimationLoop::for_variant(Variant::Plain, BOUNDS);
    let mut rec = CommandRecorder::new();
    lp.start();
    run(&mut lp, &mut rec, 10);

    lp.stop();
    rec.clear();
    assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Stop));
    assert!(rec.is_empty(), "A halted loop must not draw");
    assert_eq!(lp.frames(), 10);
}

// ==================== Variants ====================

#[test]
fn test_ceiling_response_differs_between_variants() {
    let ball = Ball::new(Vec2::new(250.0, 60.0), Vec2::new(0.0, -12.0));
    let mut rec = CommandRecorder::new();

    let mut hit_speed = |variant: Variant| -> f64 {
        let mut sim = Simulation::new(ball, BallParams::default(), variant.rules());
        for _ in 0..20 {
            rec.clear();
            let contacts = sim.advance(&mut rec, BOUNDS).unwrap();
            if contacts.contains(Contacts::CEILING) {
                assert_eq!(sim.ball().position.y, 20.0);
                return sim.ball().velocity.y;
            }
        }
        panic!("{} variant never reached the ceiling", variant);
    };

    let plain = hit_speed(Variant::Plain);
    let guarded = hit_speed(Variant::Guarded);
    assert!(plain > 0.0 && guarded > 0.0, "Both rebound downwards");
    assert!((guarded - plain * 0.8).abs() < 1e-9);
}

#[test]
fn test_variant_from_config_string() {
    #[derive(serde::Deserialize)]
    struct Section {
        variant: Variant,
    }

    let s: Section = toml::from_str(r#"variant = "plain""#).unwrap();
    assert_eq!(s.variant, Variant::Plain);
    let s: Section = toml::from_str(r#"variant = "guarded""#).unwrap();
    assert_eq!(s.variant, Variant::Guarded);
    assert!(toml::from_str::<Section>(r#"variant = "Fancy""#).is_err());
}

// ==================== Failures ====================

#[test]
fn test_failed_frame_policies() {
    let mut params = BallParams::default();
    params.radius = -1.0;
    let sim = Simulation::new(Ball::centered(BOUNDS), params, StepRules::GUARDED);

    let mut guarded = AnimationLoop::new(sim.clone(), ErrorPolicy::Halt);
    let mut plain = AnimationLoop::new(sim, ErrorPolicy::Propagate);
    let mut rec = CommandRecorder::new();
    guarded.start();
    plain.start();

    assert_eq!(guarded.frame(&mut rec, BOUNDS), Ok(LoopControl::Stop));
    assert!(matches!(plain.frame(&mut rec, BOUNDS), Err(FrameError::Draw(_))));

    for lp in [&guarded, &plain] {
        assert_eq!(lp.state(), LoopState::Halted(HaltReason::FrameFailed));
    }
}

#[test]
fn test_non_finite_state_halts_loop() {
    let params = BallParams::new(20.0, f64::INFINITY, 0.8);
    let sim = Simulation::new(Ball::centered(BOUNDS), params, StepRules::PLAIN);
    let mut lp = AnimationLoop::new(sim, ErrorPolicy::Halt);
    let mut rec = CommandRecorder::new();
    lp.start();

    assert_eq!(lp.frame(&mut rec, BOUNDS), Ok(LoopControl::Stop));
    assert!(
        !rec.commands().iter().any(|c| matches!(c, DrawCommand::Arc { .. })),
        "Nothing is drawn for a rejected step"
    );
}
