//! Per-frame simulation step
//!
//! One call per scheduled animation frame. Velocities are per-frame
//! displacements, so there is no timestep or accumulator. Hunter input
//! arrives as discrete step commands queued by the key handler between
//! frames; handler and step both run on the same single-threaded event
//! loop, and draining the queue at the top of the step keeps their
//! interleaving well defined.

use super::collision::{eliminate_collisions, recolor_collisions};
use super::state::World;

/// One axis-aligned hunter step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
    Up,
    Down,
}

impl Step {
    /// Map a keyboard key identifier to a step. Keys outside the whitelist
    /// produce `None` and are dropped by the caller.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" => Some(Step::Left),
            "d" => Some(Step::Right),
            "w" => Some(Step::Up),
            "s" => Some(Step::Down),
            _ => None,
        }
    }
}

/// Input queued for a single frame step
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Hunter steps accumulated since the previous frame, in arrival order
    pub steps: Vec<Step>,
}

/// Observable state change produced by a frame step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A ball was tombstoned by the hunter; `remaining` is the live count
    /// after this elimination
    BallEliminated { index: usize, remaining: usize },
}

/// Advance the world by one frame.
///
/// Order: hunter movement (queued steps, then one clamp pass), then each
/// live ball in collection order (wall reflection + motion, then the
/// recolor pass), then the hunter's elimination pass. Rendering happens
/// after this returns, so a ball eliminated here is never drawn again.
pub fn step(world: &mut World, input: &FrameInput) -> Vec<SimEvent> {
    for step in &input.steps {
        let hunter = &mut world.hunter;
        match step {
            Step::Left => hunter.kin.pos.x -= hunter.kin.vel.x,
            Step::Right => hunter.kin.pos.x += hunter.kin.vel.x,
            Step::Up => hunter.kin.pos.y -= hunter.kin.vel.y,
            Step::Down => hunter.kin.pos.y += hunter.kin.vel.y,
        }
    }
    world.hunter.check_bounds(world.bounds);

    for index in 0..world.balls.len() {
        if !world.balls[index].exists {
            continue;
        }
        world.balls[index].update(world.bounds);
        recolor_collisions(&mut world.balls, index, &mut world.rng);
    }

    let mut events = Vec::new();
    for index in eliminate_collisions(&world.hunter, &mut world.balls) {
        world.live_count -= 1;
        events.push(SimEvent::BallEliminated {
            index,
            remaining: world.live_count,
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_POPULATION, HUNTER_STEP};
    use glam::Vec2;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn world() -> World {
        World::new(42, BOUNDS)
    }

    /// Park the hunter far from every ball so no elimination can fire.
    /// The clamp pass nudges it inward by its radius each frame, so keep
    /// the distance large relative to the frame counts used here.
    fn sideline_hunter(world: &mut World) {
        world.hunter.kin.pos = Vec2::new(-100_000.0, -100_000.0);
    }

    #[test]
    fn test_key_whitelist() {
        assert_eq!(Step::from_key("a"), Some(Step::Left));
        assert_eq!(Step::from_key("d"), Some(Step::Right));
        assert_eq!(Step::from_key("w"), Some(Step::Up));
        assert_eq!(Step::from_key("s"), Some(Step::Down));
        assert_eq!(Step::from_key("ArrowLeft"), None);
        assert_eq!(Step::from_key(" "), None);
        assert_eq!(Step::from_key("A"), None);
    }

    #[test]
    fn test_steps_move_one_axis_each() {
        let mut world = world();
        world.hunter.kin.pos = Vec2::new(400.0, 300.0);
        let input = FrameInput {
            steps: vec![Step::Left, Step::Up, Step::Up],
        };
        // Empty ball list isolates the hunter movement.
        world.balls.clear();
        world.live_count = 0;
        step(&mut world, &input);
        assert_eq!(
            world.hunter.kin.pos,
            Vec2::new(400.0 - HUNTER_STEP, 300.0 - 2.0 * HUNTER_STEP)
        );
    }

    #[test]
    fn test_eliminated_ball_stays_eliminated() {
        let mut world = world();
        sideline_hunter(&mut world);
        world.balls[3].exists = false;
        world.live_count -= 1;
        let snapshot = world.balls[3].clone();

        for _ in 0..50 {
            let events = step(&mut world, &FrameInput::default());
            assert!(events.is_empty());
        }
        // Tombstoned: never moved, never recolored, never re-eliminated.
        assert!(!world.balls[3].exists);
        assert_eq!(world.balls[3].kin, snapshot.kin);
        assert_eq!(world.balls[3].color, snapshot.color);
    }

    #[test]
    fn test_live_count_is_non_increasing() {
        let mut world = world();
        let mut previous = world.live_count;
        for _ in 0..200 {
            step(&mut world, &FrameInput::default());
            assert!(world.live_count <= previous);
            let live = world.balls.iter().filter(|b| b.exists).count();
            assert_eq!(world.live_count, live);
            previous = world.live_count;
        }
    }

    #[test]
    fn test_hunter_on_ball_eliminates_it_in_one_frame() {
        let mut world = world();
        sideline_hunter(&mut world);
        assert_eq!(world.count_label(), "Ball count: 25");

        // Park every other ball out of reach so exactly one elimination
        // happens, then drop the hunter onto the target.
        for (i, ball) in world.balls.iter_mut().enumerate() {
            if i != 7 {
                ball.kin.pos = Vec2::new(5_000.0 + 100.0 * i as f32, 5_000.0);
            }
            ball.kin.vel = Vec2::ZERO;
        }
        world.hunter.kin.pos = world.balls[7].kin.pos;

        let events = step(&mut world, &FrameInput::default());
        assert_eq!(
            events,
            vec![SimEvent::BallEliminated {
                index: 7,
                remaining: BALL_POPULATION - 1,
            }]
        );
        assert!(!world.balls[7].exists);
        assert_eq!(world.live_count, BALL_POPULATION - 1);
        assert_eq!(world.count_label(), "Ball count: 24");
    }

    #[test]
    fn test_collision_symmetry_after_step() {
        let mut world = world();
        sideline_hunter(&mut world);
        world.balls.truncate(2);
        world.live_count = 2;
        world.balls[0].kin = crate::sim::Kinematics {
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
        };
        world.balls[1].kin = crate::sim::Kinematics {
            pos: Vec2::new(305.0, 300.0),
            vel: Vec2::ZERO,
        };
        // White can never come out of a color draw (channels stop at 254),
        // so the post-collision color provably differs from both priors.
        world.balls[0].color = crate::sim::Rgb::WHITE;
        world.balls[1].color = crate::sim::Rgb::WHITE;

        step(&mut world, &FrameInput::default());
        assert_eq!(world.balls[0].color, world.balls[1].color);
        assert_ne!(world.balls[0].color, crate::sim::Rgb::WHITE);
    }

    #[test]
    fn test_balls_stay_near_bounds_over_many_frames() {
        let mut world = world();
        sideline_hunter(&mut world);
        for _ in 0..1000 {
            step(&mut world, &FrameInput::default());
        }
        // Reflection allows a one-frame overshoot of at most |vel|, never a
        // runaway escape.
        let slack = 7.0;
        for ball in world.balls.iter().filter(|b| b.exists) {
            assert!(ball.kin.pos.x > -ball.radius - slack);
            assert!(ball.kin.pos.x < BOUNDS.x + ball.radius + slack);
            assert!(ball.kin.pos.y > -ball.radius - slack);
            assert!(ball.kin.pos.y < BOUNDS.y + ball.radius + slack);
        }
    }
}
