use glam::Vec2;

use super::{exchange_impulse, separate};
use crate::body::Body;
use crate::vector_math::normalize_or;
use crate::{COINCIDENT_NORMAL, SEPARATION_EPSILON};

/// Resolves a circle–circle contact.
///
/// The contact normal points from `a` to `b`, falling back to
/// [`COINCIDENT_NORMAL`] when the centres coincide. The overlap is split
/// evenly between two dynamic circles, independent of their masses. If the
/// circles are closing, a restitution impulse scaled by the reduced mass
/// reverses their relative normal velocity.
pub fn circle_circle(a: &mut Body, radius_a: f32, b: &mut Body, radius_b: f32) -> bool {
    let offset = b.position - a.position;
    let overlap = radius_a + radius_b - offset.length();
    if overlap <= 0.0 {
        return false;
    }
    let normal: Vec2 = normalize_or(offset, COINCIDENT_NORMAL, SEPARATION_EPSILON);
    separate(a, b, normal, overlap);
    let restitution = a.material().combine(b.material()).restitution;
    exchange_impulse(a, b, normal, restitution);
    true
}
