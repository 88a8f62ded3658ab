//! Frame rendering over an abstract 2D surface
//!
//! The simulation never touches the canvas directly; frames are drawn
//! through the `Surface` trait so rendering can be exercised headless in
//! tests. The wasm build provides a canvas-backed implementation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::consts::HUNTER_STROKE_WIDTH;
use crate::sim::{Rgb, World};

/// Drawable 2D surface contract
pub trait Surface {
    /// Filled disc
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    /// Unfilled ring outline
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgb, line_width: f32);
    /// Semi-transparent fill over a rectangle (trail fade)
    fn fade_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb, alpha: f32);
}

/// Draw one frame: fade the previous frame's pixels, then every live ball,
/// then the hunter ring on top.
pub fn render(world: &World, surface: &mut impl Surface, fade_alpha: f32) {
    surface.fade_rect(Vec2::ZERO, world.bounds, Rgb::BLACK, fade_alpha);
    for ball in world.balls.iter().filter(|b| b.exists) {
        surface.fill_circle(ball.kin.pos, ball.radius, ball.color);
    }
    surface.stroke_circle(
        world.hunter.kin.pos,
        world.hunter.radius,
        world.hunter.color,
        HUNTER_STROKE_WIDTH,
    );
}
