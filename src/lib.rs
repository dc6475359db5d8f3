//! Ricochet - circular bodies bouncing around a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic physics (integration, wall bounce, ball-ball collisions)
//! - `app`: Driving loop, input and render seams
//! - `renderer`: Render-ready circle instances
//! - `settings`: Run configuration

pub mod app;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use settings::Settings;

use glam::DVec2;

/// Simulation defaults
pub mod consts {
    /// Default arena size
    pub const DEFAULT_WIDTH: f64 = 640.0;
    pub const DEFAULT_HEIGHT: f64 = 480.0;

    /// Area density used to derive mass from radius
    pub const DEFAULT_DENSITY: f64 = 1.0;
    /// Perfectly elastic unless configured otherwise
    pub const DEFAULT_RESTITUTION: f64 = 1.0;

    /// Random radius range (inclusive)
    pub const MIN_RADIUS: f64 = 20.0;
    pub const MAX_RADIUS: f64 = 60.0;

    /// Random velocity range per axis, in units per tick
    pub const MAX_START_SPEED: f64 = 0.2;

    /// Frames to run when none is given
    pub const DEFAULT_FRAMES: u64 = 600;
}

/// Rotate a vector counter-clockwise by `angle` radians
///
/// Applies `[[cos θ, -sin θ], [sin θ, cos θ]]`.
#[inline]
pub fn rotate(v: DVec2, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}
