//! Render-ready circle batches
//!
//! `CircleBatch` is a [`Renderer`] that turns each draw call into a
//! [`CircleInstance`]. The finished frame can be uploaded as a raw instance
//! buffer by any GPU backend, or inspected directly in headless runs.

pub mod vertex;

pub use vertex::{CircleInstance, colors};

use glam::DVec2;

use crate::app::Renderer;

/// Collects one instance per drawn circle
#[derive(Debug, Clone, Default)]
pub struct CircleBatch {
    pending: Vec<CircleInstance>,
    frame: Vec<CircleInstance>,
    frames_presented: u64,
}

impl CircleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instances of the last completed frame
    pub fn instances(&self) -> &[CircleInstance] {
        &self.frame
    }

    /// Last completed frame as bytes, ready for an instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for CircleBatch {
    fn begin_frame(&mut self) {
        self.pending.clear();
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64) {
        self.pending.push(CircleInstance::new(
            center.x as f32,
            center.y as f32,
            radius as f32,
            colors::BALL,
        ));
    }

    fn end_frame(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.frame);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_publishes_on_end_frame() {
        let mut batch = CircleBatch::new();
        batch.begin_frame();
        batch.draw_circle(DVec2::new(10.0, 20.0), 5.0);
        assert!(batch.instances().is_empty());
        batch.end_frame();

        assert_eq!(batch.instances(), &[CircleInstance::new(10.0, 20.0, 5.0, colors::BALL)]);
        assert_eq!(batch.instances()[0].diameter(), 10.0);
        assert_eq!(batch.frames_presented(), 1);
    }

    #[test]
    fn test_instance_bytes() {
        let mut batch = CircleBatch::new();
        batch.begin_frame();
        batch.draw_circle(DVec2::ZERO, 1.0);
        batch.draw_circle(DVec2::ONE, 2.0);
        batch.end_frame();
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
        assert_eq!(batch.as_bytes().len(), 64);
    }

    #[test]
    fn test_new_frame_replaces_old() {
        let mut batch = CircleBatch::new();
        for n in [3usize, 1] {
            batch.begin_frame();
            for i in 0..n {
                batch.draw_circle(DVec2::new(i as f64, 0.0), 1.0);
            }
            batch.end_frame();
        }
        assert_eq!(batch.instances().len(), 1);
    }
}
