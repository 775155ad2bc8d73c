//! Surface material of a body.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{DEFAULT_FRICTION, DEFAULT_RESTITUTION};

/// Bounciness and grippiness of a body's surface.
///
/// Both coefficients lie in `[0, 1]`. When two bodies touch, their
/// coefficients are multiplied (see [`Material::combine`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Fraction of closing speed kept after a bounce.
    pub restitution: f32,
    /// Scale of the tangential resistance against sliding.
    pub friction: f32,
}

impl Material {
    /// Builds a material after checking both coefficients.
    ///
    /// # Errors
    /// Returns [`ConfigError::CoefficientOutOfRange`] when either coefficient
    /// falls outside `[0, 1]` or is NaN.
    pub fn new(restitution: f32, friction: f32) -> Result<Self, ConfigError> {
        let material = Self {
            restitution,
            friction,
        };
        material.validate()?;
        Ok(material)
    }

    /// Checks that both coefficients lie in `[0, 1]`.
    ///
    /// # Errors
    /// Returns [`ConfigError::CoefficientOutOfRange`] naming the offending
    /// coefficient.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("restitution", self.restitution)?;
        check_unit("friction", self.friction)
    }

    /// Pairwise material of two touching surfaces.
    ///
    /// # Examples
    /// ```
    /// use pebble::material::Material;
    /// let rubber = Material::new(0.8, 0.9).unwrap();
    /// let ice = Material::new(0.5, 0.1).unwrap();
    /// let contact = rubber.combine(ice);
    /// assert!((contact.restitution - 0.4).abs() < 1e-6);
    /// assert!((contact.friction - 0.09).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            restitution: self.restitution * other.restitution,
            friction: self.friction * other.friction,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
        }
    }
}

pub(crate) fn check_unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::CoefficientOutOfRange { name, value })
    }
}
