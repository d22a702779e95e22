//! Property tests for the tick pipeline

use glam::Vec2;
use proptest::prelude::*;

use tilt_maze::sim::{
    BallState, CollisionPolicy, GameState, Maze, MultiHitPolicy, PenetrationPolicy, PhysicsParams,
    TiltSample, Wall, resolve_wall_collisions, tick,
};

fn tilt() -> impl Strategy<Value = TiltSample> {
    (-1.0e4f32..1.0e4, -1.0e4f32..1.0e4).prop_map(|(fb, lr)| TiltSample::new(fb, lr))
}

fn policy() -> impl Strategy<Value = CollisionPolicy> {
    (any::<bool>(), any::<bool>()).prop_map(|(push, once)| CollisionPolicy {
        penetration: if push {
            PenetrationPolicy::PushOut
        } else {
            PenetrationPolicy::VelocityOnly
        },
        multi_hit: if once {
            MultiHitPolicy::ReflectOnce
        } else {
            MultiHitPolicy::Sequential
        },
    })
}

proptest! {
    #[test]
    fn ball_stays_in_bounds(samples in prop::collection::vec(tilt(), 1..200), collision in policy()) {
        let maze = Maze::classic();
        let params = PhysicsParams { collision, ..Default::default() };
        let mut state = GameState::default();
        let r = state.ball.radius;

        for sample in samples {
            tick(&mut state, &maze, &params, sample);
            let p = state.ball.position;
            prop_assert!(p.x >= r && p.x <= params.width - r, "x out of bounds: {}", p.x);
            prop_assert!(p.y >= r && p.y <= params.height - r, "y out of bounds: {}", p.y);
            prop_assert!(state.ball.velocity.is_finite());
        }
    }

    #[test]
    fn non_finite_tilt_never_poisons_state(
        samples in prop::collection::vec(
            prop_oneof![
                tilt(),
                Just(TiltSample::new(f32::NAN, 1.0)),
                Just(TiltSample::new(0.5, f32::INFINITY)),
                Just(TiltSample::new(f32::NEG_INFINITY, f32::NAN)),
            ],
            1..100,
        )
    ) {
        let maze = Maze::classic();
        let params = PhysicsParams::default();
        let mut state = GameState::default();

        for sample in samples {
            tick(&mut state, &maze, &params, sample);
            prop_assert!(state.ball.position.is_finite());
            prop_assert!(state.ball.velocity.is_finite());
        }
    }

    #[test]
    fn far_from_walls_is_a_no_op(
        x in 400.0f32..700.0,
        y in 300.0f32..800.0,
        vx in -50.0f32..50.0,
        vy in -50.0f32..50.0,
    ) {
        // Region clear of every classic wall by more than the radius
        let maze = Maze::classic();
        let mut ball = BallState { position: Vec2::new(x, y), velocity: Vec2::new(vx, vy), radius: 30.0 };

        let hits = resolve_wall_collisions(&mut ball, &maze, 0.6, CollisionPolicy::default());
        prop_assert!(hits.is_empty());
        prop_assert_eq!(ball.velocity, Vec2::new(vx, vy));
    }

    #[test]
    fn side_hit_reverses_and_scales(
        y in 100.0f32..1900.0,
        depth in 0.5f32..29.5,
        vx in -100.0f32..-0.1,
        restitution in 0.0f32..=1.0,
    ) {
        let wall = Wall::new(0.0, 0.0, 40.0, 2000.0);
        let maze = Maze::new(vec![wall]).unwrap();
        // Ball edge `depth` pixels inside the wall's right face, center outside it
        let x = 40.0 + 30.0 - depth;
        let mut ball = BallState { position: Vec2::new(x, y), velocity: Vec2::new(vx, 0.0), radius: 30.0 };

        resolve_wall_collisions(&mut ball, &maze, restitution, CollisionPolicy::default());
        prop_assert!((ball.velocity.x - (-vx * restitution)).abs() < 1e-4);
        prop_assert_eq!(ball.velocity.y, 0.0);
    }

    #[test]
    fn zero_tilt_never_speeds_up(vx in -500.0f32..500.0, vy in -500.0f32..500.0) {
        let maze = Maze::empty();
        let params = PhysicsParams::default();
        let mut state = GameState::new(BallState {
            position: Vec2::new(550.0, 1000.0),
            velocity: Vec2::new(vx, vy),
            radius: 30.0,
        });

        let mut last = state.ball.speed();
        for _ in 0..50 {
            tick(&mut state, &maze, &params, TiltSample::ZERO);
            let speed = state.ball.speed();
            prop_assert!(speed <= last);
            last = speed;
        }
    }
}
