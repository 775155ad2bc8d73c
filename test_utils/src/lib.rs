//! Utility helpers for tests.
pub mod physics;

pub use physics::{assert_vec2_near, circle, dynamic_box, fixed_box, ground};
