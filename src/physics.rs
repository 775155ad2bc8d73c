//! Physics helper functions.
//!
//! Force and acceleration utilities shared by the world pipeline and the
//! halfspace contact routines. They operate on plain [`Vec2`] values so they
//! can be unit tested without building a world.

use glam::Vec2;

use crate::vector_math::decompose;

/// Smallest acceptable mass to avoid numerically unstable accelerations.
const MIN_MASS: f32 = 1e-12;

/// Computes acceleration from a force vector and a mass.
///
/// Returns `None` if `mass` is non-positive or effectively zero (below
/// `1e-12`). The calculation applies `F = ma` per component.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use pebble::applied_acceleration;
/// let a = applied_acceleration(Vec2::new(7.0, -14.0), 7.0).unwrap();
/// assert!((a.x - 1.0).abs() < 1e-6);
/// assert!((a.y + 2.0).abs() < 1e-6);
/// assert!(applied_acceleration(Vec2::X, 0.0).is_none());
/// ```
#[must_use]
pub fn applied_acceleration(force: Vec2, mass: f32) -> Option<Vec2> {
    if mass > MIN_MASS {
        Some(force / mass)
    } else {
        None
    }
}

/// Weight of a body of `mass` under `gravity`.
#[must_use]
pub fn gravity_force(gravity: Vec2, mass: f32) -> Vec2 {
    gravity * mass
}

/// Reaction a surface with unit `normal` exerts against `force`.
///
/// Only the part of `force` pressing into the surface is cancelled; a force
/// pulling away from the surface produces no reaction.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use pebble::physics::normal_reaction;
/// let up = Vec2::new(0.0, -1.0);
/// assert_eq!(normal_reaction(Vec2::new(3.0, 10.0), up), Vec2::new(0.0, -10.0));
/// assert_eq!(normal_reaction(Vec2::new(0.0, -10.0), up), Vec2::ZERO);
/// ```
#[must_use]
pub fn normal_reaction(force: Vec2, normal: Vec2) -> Vec2 {
    let (along, _) = decompose(force, normal);
    if along < 0.0 {
        -normal * along
    } else {
        Vec2::ZERO
    }
}
