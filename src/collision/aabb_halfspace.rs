use glam::Vec2;

use super::ContactContext;
use crate::body::Body;
use crate::physics::{gravity_force, normal_reaction};

/// Resolves a box resting on or sinking into a halfspace.
///
/// The most deeply buried corner decides how far the box is pushed back
/// out along the plane normal, and gravity pressing into the plane is
/// cancelled through `net_force`. Unlike [`circle_halfspace`], this pair has
/// no friction and no bounce: a box keeps whatever velocity it arrived with.
///
/// [`circle_halfspace`]: super::circle_halfspace
pub fn aabb_halfspace(
    aabb: &mut Body,
    size: Vec2,
    plane: &Body,
    normal: Vec2,
    context: &ContactContext,
) -> bool {
    let corner = aabb.position;
    let deepest = [
        corner,
        corner + Vec2::new(size.x, 0.0),
        corner + Vec2::new(0.0, size.y),
        corner + size,
    ]
    .into_iter()
    .map(|point| (point - plane.position).dot(normal))
    .fold(f32::INFINITY, f32::min);
    if deepest >= 0.0 {
        return false;
    }
    if aabb.is_static() {
        return true;
    }
    aabb.nudge(normal * -deepest);
    aabb.net_force += normal_reaction(gravity_force(context.gravity, aabb.mass()), normal);
    true
}
