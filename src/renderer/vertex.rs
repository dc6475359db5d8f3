//! Instance types for circle rendering

use bytemuck::{Pod, Zeroable};

/// One textured circle: center, radius and tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    /// Keeps `color` 16-byte aligned for GPU upload
    pub _pad: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub const fn new(x: f32, y: f32, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: [x, y],
            radius,
            _pad: 0.0,
            color,
        }
    }

    /// Diameter of the sprite quad
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

/// Colors for arena elements
pub mod colors {
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
