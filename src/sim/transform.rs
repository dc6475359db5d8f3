//! Read/write views of a vector in another coordinate frame
//!
//! A [`FrameView`] borrows a world-space vector, exposes it in a local frame,
//! and writes every local assignment straight back into the world-space
//! original. The collision resolver uses this to do all of its algebra along
//! the line of centers.

use glam::DVec2;

use crate::rotate;

/// An invertible mapping between world space and a local frame
pub trait FrameTransform {
    /// World space to local frame
    fn forward(&self, v: DVec2) -> DVec2;
    /// Local frame back to world space
    fn inverse(&self, v: DVec2) -> DVec2;
}

/// Frame whose +x axis points along `angle` (radians, world space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub angle: f64,
}

impl Rotation {
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Frame aligned with the direction from `from` to `to`
    pub fn along(from: DVec2, to: DVec2) -> Self {
        let d = to - from;
        Self::new(d.y.atan2(d.x))
    }
}

impl FrameTransform for Rotation {
    #[inline]
    fn forward(&self, v: DVec2) -> DVec2 {
        rotate(v, -self.angle)
    }

    #[inline]
    fn inverse(&self, v: DVec2) -> DVec2 {
        rotate(v, self.angle)
    }
}

/// A vector seen through a [`FrameTransform`]
///
/// `set` updates the borrowed original immediately, so `get` and the
/// original always describe the same vector.
pub struct FrameView<'a, T: FrameTransform> {
    original: &'a mut DVec2,
    local: DVec2,
    transform: &'a T,
}

impl<'a, T: FrameTransform> FrameView<'a, T> {
    pub fn new(original: &'a mut DVec2, transform: &'a T) -> Self {
        let local = transform.forward(*original);
        Self {
            original,
            local,
            transform,
        }
    }

    /// Value in the local frame
    #[inline]
    pub fn get(&self) -> DVec2 {
        self.local
    }

    /// Assign in the local frame and sync the world-space original
    #[inline]
    pub fn set(&mut self, local: DVec2) {
        self.local = local;
        *self.original = self.transform.inverse(local);
    }

    /// Current world-space value
    #[inline]
    pub fn original(&self) -> DVec2 {
        *self.original
    }
}
