//! Ball bodies
//!
//! A ball is a non-spinning point mass with a circular extent used for
//! collisions and drawing. Radius and mass never change after creation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// A circular body in the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center, in arena units
    pub pos: DVec2,
    /// Displacement per tick
    pub vel: DVec2,
    radius: f64,
    mass: f64,
}

impl Ball {
    /// Create a ball whose mass is `density * π * radius²`
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, density: f64) -> SimResult<Self> {
        if !(density.is_finite() && density > 0.0) {
            return Err(SimError::invalid_body(format!(
                "density must be positive, got {density}"
            )));
        }
        let mass = density * std::f64::consts::PI * radius * radius;
        Self::with_mass(pos, vel, radius, mass)
    }

    /// Create a ball with an explicit mass
    ///
    /// A very large mass approximates an immovable obstacle.
    pub fn with_mass(pos: DVec2, vel: DVec2, radius: f64, mass: f64) -> SimResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::invalid_body(format!(
                "radius must be positive, got {radius}"
            )));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::invalid_body(format!(
                "mass must be positive, got {mass}"
            )));
        }
        Ok(Self {
            pos,
            vel,
            radius,
            mass,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Kinetic energy, `½ m |v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Linear momentum, `m v`
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    /// True when the two circles touch or interpenetrate
    pub fn overlaps(&self, other: &Ball) -> bool {
        crate::distance(self.pos, other.pos) <= self.radius + other.radius
    }
}
