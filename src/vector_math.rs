//! Basic vector math helper functions.
//! Small helpers over [`glam::Vec2`] for angles given in degrees, as the
//! presentation layer works in degrees throughout.
use glam::Vec2;

/// Rotates `vector` counter-clockwise (in a y-up frame) by `degrees`.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use pebble::vector_math::rotate_degrees;
/// let rotated = rotate_degrees(Vec2::new(0.0, -1.0), 90.0);
/// assert!((rotated - Vec2::new(1.0, 0.0)).length() < 1e-6);
/// ```
#[must_use]
pub fn rotate_degrees(vector: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(vector)
}

/// Initial velocity for a launch with the given speed and elevation angle.
///
/// Screen space is y-down, so a positive angle aims upwards:
/// `(speed * cos(angle), -speed * sin(angle))`.
///
/// # Examples
/// ```
/// use pebble::vector_math::launch_velocity;
/// let v = launch_velocity(100.0, 90.0);
/// assert!(v.x.abs() < 1e-3);
/// assert!((v.y + 100.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn launch_velocity(speed: f32, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(speed * cos, -speed * sin)
}

/// Returns the unit vector in the direction of `vector`, or `fallback` when
/// `vector` is shorter than `epsilon` or not finite.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use pebble::vector_math::normalize_or;
/// assert_eq!(normalize_or(Vec2::new(3.0, 0.0), Vec2::Y, 1e-4), Vec2::X);
/// assert_eq!(normalize_or(Vec2::ZERO, Vec2::Y, 1e-4), Vec2::Y);
/// ```
#[must_use]
pub fn normalize_or(vector: Vec2, fallback: Vec2, epsilon: f32) -> Vec2 {
    if !vector.is_finite() {
        return fallback;
    }
    let length = vector.length();
    if length < epsilon {
        fallback
    } else {
        vector / length
    }
}

/// Splits `vector` into its components along and across the unit `normal`.
///
/// Returns `(normal_component, tangential_part)` where the tangential part
/// is the vector with its normal projection removed.
#[must_use]
pub fn decompose(vector: Vec2, normal: Vec2) -> (f32, Vec2) {
    let along = vector.dot(normal);
    (along, vector - normal * along)
}
