//! Arena and per-tick integration
//!
//! `World` only holds configuration. The caller owns the balls and hands
//! them to [`World::update`] once per tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Ball;
use super::collision::{overlapping, pair_mut, resolve};
use crate::error::{SimError, SimResult};

/// Rectangular arena `[0, width] x [0, height]` with a uniform restitution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    width: f64,
    height: f64,
    restitution: f64,
}

impl World {
    pub fn new(width: f64, height: f64, restitution: f64) -> SimResult<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(SimError::invalid_arena(format!(
                "bounds must be positive, got {width}x{height}"
            )));
        }
        if !restitution.is_finite() {
            return Err(SimError::invalid_config(format!(
                "restitution must be finite, got {restitution}"
            )));
        }
        if !(0.0..=1.0).contains(&restitution) {
            log::warn!(
                "Restitution {} is outside [0, 1]; collisions will not conserve energy",
                restitution
            );
        }
        Ok(Self {
            width,
            height,
            restitution,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// True when a ball of this radius can sit inside the arena
    pub fn fits(&self, radius: f64) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }

    /// Advance every ball by one tick
    ///
    /// Moves and wall-bounces each ball, then resolves ball-ball contacts
    /// pair by pair in ascending index order. Each resolution mutates both
    /// balls before the scan moves on.
    pub fn update(&self, balls: &mut [Ball]) {
        for ball in balls.iter_mut() {
            self.integrate(ball);
        }
        let contacts = self.resolve_pairs(balls);
        if contacts > 0 {
            log::trace!("Resolved {} contacts among {} balls", contacts, balls.len());
        }
    }

    /// Move one ball and bounce it off the walls
    pub fn integrate(&self, ball: &mut Ball) {
        ball.pos += ball.vel;
        let r = ball.radius();
        let e = self.restitution;

        if ball.pos.x - r < 0.0 {
            ball.vel.x *= -e;
            ball.pos.x = r;
        } else if ball.pos.x + r > self.width {
            ball.vel.x *= -e;
            ball.pos.x = self.width - r;
        }

        if ball.pos.y - r < 0.0 {
            ball.vel.y *= -e;
            ball.pos.y = r;
        } else if ball.pos.y + r > self.height {
            ball.vel.y *= -e;
            ball.pos.y = self.height - r;
        }
    }

    /// Resolve every overlapping pair `(i, j)`, `i < j`, in ascending order
    ///
    /// Returns the number of contacts resolved.
    pub fn resolve_pairs(&self, balls: &mut [Ball]) -> usize {
        let mut contacts = 0;
        let n = balls.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(balls, i, j);
                if overlapping(a, b) {
                    resolve(a, b, self.restitution);
                    contacts += 1;
                }
            }
        }
        contacts
    }
}

/// Sum of kinetic energies
pub fn total_kinetic_energy(balls: &[Ball]) -> f64 {
    balls.iter().map(Ball::kinetic_energy).sum()
}

/// Sum of linear momenta
pub fn total_momentum(balls: &[Ball]) -> DVec2 {
    balls.iter().map(Ball::momentum).sum()
}
