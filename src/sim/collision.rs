//! Ball-ball collision detection and response
//!
//! Collisions are solved in a frame whose x axis runs along the line of
//! centers. Along that axis the problem is a 1D inelastic impact; the
//! tangential (local y) velocity is left alone since there is no friction
//! or spin. The interpenetration left over at the end of a tick is removed
//! by pushing the balls apart, lighter ball further.

use super::body::Ball;
use super::transform::{FrameView, Rotation};

/// True when `a` and `b` touch or overlap
#[inline]
pub fn overlapping(a: &Ball, b: &Ball) -> bool {
    a.overlaps(b)
}

/// Resolve an impact between two overlapping balls
///
/// `e` is the restitution coefficient: 1 is elastic, 0 leaves both balls
/// moving at the center-of-mass velocity along the line of centers. Must
/// only be called when [`overlapping`] holds.
pub fn resolve(a: &mut Ball, b: &mut Ball, e: f64) {
    let ma = a.mass();
    let mb = b.mass();
    let total = ma + mb;
    let reach = a.radius() + b.radius();

    // +x points from b toward a
    let frame = Rotation::along(b.pos, a.pos);

    let mut vel_a = FrameView::new(&mut a.vel, &frame);
    let mut vel_b = FrameView::new(&mut b.vel, &frame);
    let mut pos_a = FrameView::new(&mut a.pos, &frame);
    let mut pos_b = FrameView::new(&mut b.pos, &frame);

    let va = vel_a.get();
    let vb = vel_b.get();
    let vcm = (va * ma + vb * mb) / total;

    vel_a.set(glam::DVec2::new(((1.0 + e) * vcm - e * va).x, va.y));
    vel_b.set(glam::DVec2::new(((1.0 + e) * vcm - e * vb).x, vb.y));

    let pa = pos_a.get();
    let pb = pos_b.get();
    let overlap = reach - (pa.x - pb.x);
    pos_a.set(pa + glam::DVec2::new(overlap * mb / total, 0.0));
    pos_b.set(pb - glam::DVec2::new(overlap * ma / total, 0.0));
}

/// Mutable access to two distinct balls, `i < j`
pub fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert!(i < j, "pair indices must be ascending");
    let (head, tail) = balls.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
