//! Ball Chase - bouncing balls and a player-driven hunter ring
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, eliminations)
//! - `render`: Frame drawing over an abstract 2D surface
//! - `settings`: Display preferences

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Number of balls spawned at startup
    pub const BALL_POPULATION: usize = 25;

    /// Ball radius range, [min, max) in pixels
    pub const BALL_RADIUS_MIN: i32 = 10;
    pub const BALL_RADIUS_MAX: i32 = 20;

    /// Ball velocity component range, [min, max) in pixels per frame
    pub const BALL_VEL_MIN: i32 = -7;
    pub const BALL_VEL_MAX: i32 = 7;

    /// Hunter ring radius
    pub const HUNTER_RADIUS: f32 = 10.0;
    /// Hunter displacement per key press, one axis per press
    pub const HUNTER_STEP: f32 = 20.0;
    /// Stroke width of the hunter ring outline
    pub const HUNTER_STROKE_WIDTH: f32 = 3.0;

    /// Alpha of the black fill painted over the canvas each frame (trail fade)
    pub const TRAIL_FADE_ALPHA: f32 = 0.25;
}
