use glam::Vec2;

use super::{exchange_impulse, separate};
use crate::body::Body;
use crate::SEPARATION_EPSILON;

/// Resolves a box–circle contact.
///
/// The contact normal runs from the point of the box closest to the circle
/// centre towards that centre. When the centre lies inside the box the
/// normal is the outward normal of the nearest face and the circle must
/// travel past that face plus its radius. Separation follows the static
/// flags of both sides; the velocity response is a mass-weighted impulse
/// with the combined restitution.
pub fn aabb_circle(aabb: &mut Body, size: Vec2, circle: &mut Body, radius: f32) -> bool {
    let min = aabb.position;
    let max = aabb.position + size;
    let centre = circle.position;
    let offset = centre - centre.clamp(min, max);
    let distance = offset.length();

    let (normal, depth) = if distance > SEPARATION_EPSILON {
        (offset / distance, radius - distance)
    } else {
        let (normal, face_distance) = nearest_face(centre, min, max);
        (normal, radius + face_distance)
    };
    if depth <= 0.0 {
        return false;
    }

    separate(aabb, circle, normal, depth);
    let restitution = aabb.material().combine(circle.material()).restitution;
    exchange_impulse(aabb, circle, normal, restitution);
    true
}

/// Outward normal of the box face nearest to `point` and the distance to it.
fn nearest_face(point: Vec2, min: Vec2, max: Vec2) -> (Vec2, f32) {
    [
        (Vec2::NEG_X, point.x - min.x),
        (Vec2::X, max.x - point.x),
        (Vec2::NEG_Y, point.y - min.y),
        (Vec2::Y, max.y - point.y),
    ]
    .into_iter()
    .fold((Vec2::NEG_Y, f32::INFINITY), |nearest, face| {
        if face.1 < nearest.1 {
            face
        } else {
            nearest
        }
    })
}
