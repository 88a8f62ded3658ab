//! World state and entity types
//!
//! The `World` is an explicit context object owned by the entry point and
//! passed into the frame step; there is no module-level mutable state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rng::{Rgb, random_color, random_in_range};
use crate::consts::*;

/// Position and per-frame velocity, shared by anything that moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A bouncing ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub kin: Kinematics,
    pub color: Rgb,
    /// Fixed at creation, never changes
    pub radius: f32,
    /// Tombstone flag: an eliminated ball stays in the collection but is
    /// skipped by every draw/update/collision pass
    pub exists: bool,
}

impl Ball {
    /// Reflect off the canvas walls, then advance one frame of motion.
    ///
    /// A velocity component flips sign when the ball's leading edge on that
    /// axis reaches or passes a boundary; both axes are checked
    /// independently and may flip in the same call. Position is not clamped
    /// back inside, so a ball can overshoot briefly; the next frame's check
    /// corrects direction. Acceptable while velocity stays small relative
    /// to radius, which the spawn ranges guarantee.
    pub fn update(&mut self, bounds: Vec2) {
        if self.kin.pos.x + self.radius >= bounds.x || self.kin.pos.x - self.radius <= 0.0 {
            self.kin.vel.x = -self.kin.vel.x;
        }
        if self.kin.pos.y + self.radius >= bounds.y || self.kin.pos.y - self.radius <= 0.0 {
            self.kin.vel.y = -self.kin.vel.y;
        }
        self.kin.pos += self.kin.vel;
    }
}

/// The player-controlled ring.
///
/// `kin.vel` holds the fixed step sizes applied once per key press; the
/// hunter has no continuous per-frame motion.
#[derive(Debug, Clone)]
pub struct Hunter {
    pub kin: Kinematics,
    pub color: Rgb,
    pub radius: f32,
}

impl Hunter {
    pub fn new(pos: Vec2) -> Self {
        Self {
            kin: Kinematics {
                pos,
                vel: Vec2::splat(HUNTER_STEP),
            },
            color: Rgb::WHITE,
            radius: HUNTER_RADIUS,
        }
    }

    /// Clamp the hunter back inside the canvas after movement.
    ///
    /// Each edge is checked independently; a crossed edge shifts the
    /// position inward by exactly `radius`. Single pass, not iterated to
    /// convergence, which is fine while the step size stays small relative
    /// to the canvas.
    pub fn check_bounds(&mut self, bounds: Vec2) {
        if self.kin.pos.x + self.radius >= bounds.x {
            self.kin.pos.x -= self.radius;
        }
        if self.kin.pos.x - self.radius <= 0.0 {
            self.kin.pos.x += self.radius;
        }
        if self.kin.pos.y + self.radius >= bounds.y {
            self.kin.pos.y -= self.radius;
        }
        if self.kin.pos.y - self.radius <= 0.0 {
            self.kin.pos.y += self.radius;
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Canvas width and height, fixed for the session
    pub bounds: Vec2,
    /// Every ball ever spawned; eliminated balls are tombstoned in place so
    /// indices stay stable for self-exclusion during collision scans
    pub balls: Vec<Ball>,
    /// Count of balls with `exists == true`
    pub live_count: usize,
    pub hunter: Hunter,
    pub rng: Pcg32,
}

impl World {
    /// Build a world with the full ball population and a randomly placed
    /// hunter.
    ///
    /// Every ball spawns fully inside the bounds: its center is offset from
    /// each edge by at least its radius. Bounds must leave room for the
    /// largest ball (width and height above `2 * BALL_RADIUS_MAX`).
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut balls = Vec::with_capacity(BALL_POPULATION);

        while balls.len() < BALL_POPULATION {
            let radius = random_in_range(&mut rng, BALL_RADIUS_MIN, BALL_RADIUS_MAX) as f32;
            let margin = radius as i32;
            let pos = Vec2::new(
                random_in_range(&mut rng, margin, bounds.x as i32 - margin) as f32,
                random_in_range(&mut rng, margin, bounds.y as i32 - margin) as f32,
            );
            let vel = Vec2::new(
                random_in_range(&mut rng, BALL_VEL_MIN, BALL_VEL_MAX) as f32,
                random_in_range(&mut rng, BALL_VEL_MIN, BALL_VEL_MAX) as f32,
            );
            balls.push(Ball {
                kin: Kinematics { pos, vel },
                color: random_color(&mut rng),
                radius,
                exists: true,
            });
        }

        let hunter_pos = Vec2::new(
            random_in_range(&mut rng, 0, bounds.x as i32) as f32,
            random_in_range(&mut rng, 0, bounds.y as i32) as f32,
        );

        let live_count = balls.len();
        Self {
            bounds,
            balls,
            live_count,
            hunter: Hunter::new(hunter_pos),
            rng,
        }
    }

    /// Human-readable live-ball count for the HUD
    pub fn count_label(&self) -> String {
        format!("Ball count: {}", self.live_count)
    }
}
