//! Narrow-phase collision detection and response.
//!
//! One routine exists per unordered pair of shape kinds. Each routine both
//! detects the overlap and resolves it in place: positional separation
//! along the minimum translation vector, then a velocity response. They
//! return `true` whenever the shapes overlapped, even if no impulse was
//! needed because the bodies were already separating.
//!
//! [`collide`] picks the routine for a pair of bodies, swapping the
//! arguments for routines that expect their shapes in a fixed order.
//!
//! Static bodies are never moved and never gain velocity. In impulse
//! exchanges they behave as infinitely heavy and motionless.

mod aabb_aabb;
mod aabb_circle;
mod aabb_halfspace;
mod circle_circle;
mod circle_halfspace;

pub use aabb_aabb::aabb_aabb;
pub use aabb_circle::aabb_circle;
pub use aabb_halfspace::aabb_halfspace;
pub use circle_circle::circle_circle;
pub use circle_halfspace::circle_halfspace;

use glam::Vec2;

use crate::body::Body;
use crate::shape::Shape;

/// Step-wide values the halfspace routines need to turn gravity into
/// contact forces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactContext {
    /// World gravity for the current step.
    pub gravity: Vec2,
    /// Length of the current step in seconds.
    pub dt: f32,
}

/// Detects and resolves a collision between two bodies of any shape.
///
/// Returns whether the bodies overlapped. Two halfspaces never collide.
pub fn collide(a: &mut Body, b: &mut Body, context: &ContactContext) -> bool {
    match (*a.shape(), *b.shape()) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(a, ra, b, rb)
        }
        (Shape::Circle { radius }, Shape::Halfspace { normal }) => {
            circle_halfspace(a, radius, b, normal, context)
        }
        (Shape::Halfspace { normal }, Shape::Circle { radius }) => {
            circle_halfspace(b, radius, a, normal, context)
        }
        (Shape::Aabb { size: sa }, Shape::Aabb { size: sb }) => aabb_aabb(a, sa, b, sb),
        (Shape::Aabb { size }, Shape::Circle { radius }) => aabb_circle(a, size, b, radius),
        (Shape::Circle { radius }, Shape::Aabb { size }) => aabb_circle(b, size, a, radius),
        (Shape::Aabb { size }, Shape::Halfspace { normal }) => {
            aabb_halfspace(a, size, b, normal, context)
        }
        (Shape::Halfspace { normal }, Shape::Aabb { size }) => {
            aabb_halfspace(b, size, a, normal, context)
        }
        (Shape::Halfspace { .. }, Shape::Halfspace { .. }) => false,
    }
}

/// Pushes `a` and `b` apart by `depth` along `normal`, which points from
/// `a` towards `b`.
///
/// Two dynamic bodies each move half the distance regardless of mass. A
/// dynamic body touching a static one takes the whole correction.
pub(crate) fn separate(a: &mut Body, b: &mut Body, normal: Vec2, depth: f32) {
    let correction = normal * depth;
    match (a.is_static(), b.is_static()) {
        (false, false) => {
            a.nudge(-correction * 0.5);
            b.nudge(correction * 0.5);
        }
        (true, false) => b.nudge(correction),
        (false, true) => a.nudge(-correction),
        (true, true) => {}
    }
}

/// Applies equal and opposite impulses along `normal` (pointing from `a`
/// towards `b`) when the bodies are closing.
///
/// Returns whether an impulse was applied.
pub(crate) fn exchange_impulse(
    a: &mut Body,
    b: &mut Body,
    normal: Vec2,
    restitution: f32,
) -> bool {
    let closing = (b.contact_velocity() - a.contact_velocity()).dot(normal);
    if closing >= 0.0 {
        return false;
    }
    let inverse_mass_sum = a.inverse_mass() + b.inverse_mass();
    if inverse_mass_sum <= 0.0 {
        return false;
    }
    // Negative while closing, so `a` is pushed back along -normal.
    let impulse = (1.0 + restitution) * closing / inverse_mass_sum;
    a.accelerate(normal * (impulse * a.inverse_mass()));
    b.accelerate(-normal * (impulse * b.inverse_mass()));
    true
}
