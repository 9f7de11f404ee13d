//! Canvas Shooter - a minimal arcade shooter on the HTML canvas
//!
//! Core modules:
//! - `sim`: Simulation (entities, input, spawner, collisions, session state)
//! - `tuning`: Data-driven gameplay constants
//! - `renderer`: Canvas 2D backend for the simulation's draw list

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player fill color
    pub const PLAYER_COLOR: &str = "#00ffff";
    /// Bullet fill color
    pub const BULLET_COLOR: &str = "yellow";
    /// Enemy fill color
    pub const ENEMY_COLOR: &str = "red";

    /// Pause overlay (drawn over the last frame, never cleared)
    pub const PAUSE_OVERLAY_COLOR: &str = "rgba(0,0,0,0.5)";
    pub const PAUSE_LABEL: &str = "Paused";
    pub const PAUSE_LABEL_COLOR: &str = "white";
    pub const PAUSE_LABEL_FONT: &str = "40px Arial";
    /// Horizontal offset of the label from the surface center
    pub const PAUSE_LABEL_OFFSET_X: f32 = 60.0;

    /// Nominal display refresh used by the headless host
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit direction from `from` toward `to`.
///
/// Derived from the angle between the points, so coincident points yield
/// `(1, 0)` instead of a zero vector.
#[inline]
pub fn direction_toward(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    Vec2::from_angle(delta.y.atan2(delta.x))
}
