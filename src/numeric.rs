//! Numeric conversion helpers used by the configuration and the CLI.
//!
//! These utilities guard conversions between floating-point and integer
//! domains so call-sites stay free of raw `as` casts.

/// Length of one fixed step for the given step rate.
///
/// Returns `None` for a rate of zero.
///
/// # Examples
/// ```
/// use pebble::numeric::step_duration;
/// let dt = step_duration(50).unwrap();
/// assert!((dt - 0.02).abs() < f32::EPSILON);
/// assert!(step_duration(0).is_none());
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "Step rates are small integers that f32 represents exactly."
)]
#[must_use]
pub fn step_duration(steps_per_second: u32) -> Option<f32> {
    if steps_per_second == 0 {
        return None;
    }
    Some(1.0 / steps_per_second as f32)
}

/// Number of whole steps that fit into `seconds` at the given step rate.
///
/// Returns `None` when `seconds` is negative, not finite, or the product does
/// not fit into `u32`.
///
/// # Examples
/// ```
/// use pebble::numeric::steps_in;
/// assert_eq!(steps_in(2.0, 50), Some(100));
/// assert_eq!(steps_in(0.03, 50), Some(1));
/// assert_eq!(steps_in(-1.0, 50), None);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is validated against the u32 domain."
)]
#[must_use]
pub fn steps_in(seconds: f64, steps_per_second: u32) -> Option<u32> {
    let total = seconds * f64::from(steps_per_second);
    if !total.is_finite() {
        return None;
    }
    let floored = total.floor();
    if floored < 0.0 || floored > f64::from(u32::MAX) {
        return None;
    }
    Some(floored as u32)
}
