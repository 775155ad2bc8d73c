use glam::Vec2;

use super::ContactContext;
use crate::body::Body;
use crate::physics::{gravity_force, normal_reaction};
use crate::vector_math::decompose;
use crate::{RESTING_CLOSING_SPEED, TANGENT_EPSILON};

/// Resolves a circle resting on or hitting a halfspace.
///
/// The circle is pushed out along the plane normal. Gravity pressing the
/// circle into the plane is cancelled by a reaction force written into
/// `net_force`, and Coulomb friction proportional to that reaction opposes
/// sliding. A circle approaching faster than [`RESTING_CLOSING_SPEED`]
/// bounces with the combined restitution; slower contacts are left to rest.
pub fn circle_halfspace(
    circle: &mut Body,
    radius: f32,
    plane: &Body,
    normal: Vec2,
    context: &ContactContext,
) -> bool {
    let distance = (circle.position - plane.position).dot(normal);
    let overlap = radius - distance;
    if overlap <= 0.0 {
        return false;
    }
    if circle.is_static() {
        return true;
    }
    circle.nudge(normal * overlap);

    let contact = circle.material().combine(plane.material());
    let weight = gravity_force(context.gravity, circle.mass());
    let reaction = normal_reaction(weight, normal);
    circle.net_force += reaction;
    let limit = contact.friction * reaction.length();
    circle.net_force += friction_force(circle, normal, weight, limit, context.dt);

    let closing = circle.velocity.dot(normal);
    if closing < -RESTING_CLOSING_SPEED {
        circle.accelerate(normal * (closing * -(1.0 + contact.restitution)));
    }
    true
}

/// Friction opposing the tangential pull of gravity, capped so it never
/// exceeds that pull. On a level plane gravity has no tangential part, so
/// the friction opposes the sliding velocity instead, capped at the force
/// that would stop the slide within one step.
fn friction_force(circle: &Body, normal: Vec2, weight: Vec2, limit: f32, dt: f32) -> Vec2 {
    let (_, pull) = decompose(weight, normal);
    let pull_strength = pull.length();
    if pull_strength > TANGENT_EPSILON {
        return -pull / pull_strength * limit.min(pull_strength);
    }
    let (_, sliding) = decompose(circle.velocity, normal);
    let speed = sliding.length();
    if speed > TANGENT_EPSILON {
        let stopping = circle.mass() * speed / dt;
        -sliding / speed * limit.min(stopping)
    } else {
        Vec2::ZERO
    }
}
