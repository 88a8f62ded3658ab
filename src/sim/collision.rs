//! Pairwise collision passes
//!
//! Plain O(n²) center-distance checks against the radius sum. Iteration
//! follows the ball collection order so recolor overwrites are reproducible
//! for a given seed.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::rng::random_color;
use super::state::{Ball, Hunter};

/// True when two circles overlap. Strict comparison: circles touching at
/// exactly the radius sum do not count as a hit.
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Ball-vs-ball recolor pass for the ball at `index`.
///
/// Every other live ball is tested; on overlap a single fresh color is
/// drawn and assigned to both balls, so a colliding pair always ends up
/// identically colored. Multiple overlaps within one pass overwrite in
/// iteration order; the last comparison wins.
pub fn recolor_collisions(balls: &mut [Ball], index: usize, rng: &mut Pcg32) {
    let (pos, radius) = (balls[index].kin.pos, balls[index].radius);
    for other in 0..balls.len() {
        if other == index || !balls[other].exists {
            continue;
        }
        if circles_overlap(pos, radius, balls[other].kin.pos, balls[other].radius) {
            let color = random_color(rng);
            balls[index].color = color;
            balls[other].color = color;
        }
    }
}

/// Hunter-vs-ball elimination pass.
///
/// Every overlapping live ball is tombstoned in place; the collection is
/// never shrunk. Returns the indices of balls eliminated by this pass, in
/// collection order.
pub fn eliminate_collisions(hunter: &Hunter, balls: &mut [Ball]) -> Vec<usize> {
    let mut eliminated = Vec::new();
    for (index, ball) in balls.iter_mut().enumerate() {
        if !ball.exists {
            continue;
        }
        if circles_overlap(hunter.kin.pos, hunter.radius, ball.kin.pos, ball.radius) {
            ball.exists = false;
            eliminated.push(index);
        }
    }
    eliminated
}
