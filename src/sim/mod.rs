//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Stable iteration order over the ball collection
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod rng;
pub mod state;

pub use collision::{circles_overlap, eliminate_collisions, recolor_collisions};
pub use frame::{FrameInput, SimEvent, Step, step};
pub use rng::{Rgb, random_color, random_in_range};
pub use state::{Ball, Hunter, Kinematics, World};
