use glam::Vec2;

use super::separate;
use crate::body::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    const fn unit(self, sign: f32) -> Vec2 {
        match self {
            Self::X => Vec2::new(sign, 0.0),
            Self::Y => Vec2::new(0.0, sign),
        }
    }

    const fn component(self, vector: Vec2) -> f32 {
        match self {
            Self::X => vector.x,
            Self::Y => vector.y,
        }
    }

    fn set(self, vector: &mut Vec2, value: f32) {
        match self {
            Self::X => vector.x = value,
            Self::Y => vector.y = value,
        }
    }
}

/// Resolves a box–box contact along the axis of least overlap.
///
/// A dynamic box hitting a static one is moved out fully and loses its
/// velocity along that axis. Two dynamic boxes split the correction evenly
/// and swap their velocity components along the axis, an elastic exchange
/// that ignores mass.
pub fn aabb_aabb(a: &mut Body, size_a: Vec2, b: &mut Body, size_b: Vec2) -> bool {
    let half_a = size_a * 0.5;
    let half_b = size_b * 0.5;
    let delta = (b.position + half_b) - (a.position + half_a);
    let overlap = half_a + half_b - delta.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return false;
    }

    let axis = if overlap.x < overlap.y { Axis::X } else { Axis::Y };
    let direction = if axis.component(delta) < 0.0 { -1.0 } else { 1.0 };
    separate(a, b, axis.unit(direction), axis.component(overlap));

    match (a.is_static(), b.is_static()) {
        (false, false) => {
            let va = axis.component(a.velocity);
            let vb = axis.component(b.velocity);
            axis.set(&mut a.velocity, vb);
            axis.set(&mut b.velocity, va);
        }
        (true, false) => axis.set(&mut b.velocity, 0.0),
        (false, true) => axis.set(&mut a.velocity, 0.0),
        (true, true) => {}
    }
    true
}
