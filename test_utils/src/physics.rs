//! Convenience constructors for bodies used in tests.
//!
//! Every constructor panics on invalid input, so tests can stay focused on
//! behaviour instead of error plumbing.

use glam::Vec2;
use pebble::{Body, Material, Shape};

/// Dynamic circle of mass 1 with the default material.
///
/// # Panics
/// Panics if `radius` is not positive and finite.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use test_utils::physics::circle;
/// let ball = circle(15.0, Vec2::new(100.0, 100.0), Vec2::ZERO);
/// assert!(!ball.is_static());
/// ```
#[must_use]
pub fn circle(radius: f32, position: Vec2, velocity: Vec2) -> Body {
    Body::dynamic(Shape::Circle { radius }, 1.0)
        .expect("valid circle")
        .with_position(position)
        .with_velocity(velocity)
}

/// Dynamic box of mass 1 hanging from its top-left corner `position`.
///
/// # Panics
/// Panics if `size` has a negative or non-finite component.
#[must_use]
pub fn dynamic_box(size: Vec2, position: Vec2, velocity: Vec2) -> Body {
    Body::dynamic(Shape::Aabb { size }, 1.0)
        .expect("valid box")
        .with_position(position)
        .with_velocity(velocity)
}

/// Static box hanging from its top-left corner `position`.
///
/// # Panics
/// Panics if `size` has a negative or non-finite component.
#[must_use]
pub fn fixed_box(size: Vec2, position: Vec2) -> Body {
    Body::fixed(Shape::Aabb { size })
        .expect("valid box")
        .with_position(position)
}

/// Static halfspace through `position`, tilted by `degrees` from level.
///
/// # Panics
/// Never in practice; rotated canonical normals are always unit length.
#[must_use]
pub fn ground(position: Vec2, degrees: f32) -> Body {
    Body::fixed(Shape::halfspace(degrees))
        .expect("valid halfspace")
        .with_position(position)
}

/// Returns `body` with the given restitution and friction.
///
/// # Panics
/// Panics if either coefficient is outside `[0, 1]`.
#[must_use]
pub fn with_material(body: Body, restitution: f32, friction: f32) -> Body {
    body.with_material(Material {
        restitution,
        friction,
    })
    .expect("coefficients in range")
}

/// Asserts that two vectors are component-wise within `tolerance`.
///
/// # Panics
/// Panics with both vectors in the message when they differ.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// test_utils::assert_vec2_near(Vec2::new(1.0, 2.0), Vec2::new(1.0005, 2.0), 1e-3);
/// ```
#[track_caller]
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tolerance: f32) {
    assert!(
        (actual - expected).abs().max_element() <= tolerance,
        "expected {expected:?} within {tolerance}, got {actual:?}"
    );
}
