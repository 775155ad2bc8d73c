//! Collision geometry attached to every [`Body`](crate::body::Body).
//!
//! Shapes carry no position of their own: circles are centred on the body
//! position, boxes hang from it (the position is the box's top-left corner)
//! and halfspaces pass through it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vector_math::rotate_degrees;
use crate::{CANONICAL_UP, NORMAL_LENGTH_TOLERANCE};

/// Tagged collision shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// A disc centred on the body position.
    Circle {
        /// Radius in pixels.
        radius: f32,
    },
    /// An infinite solid region on the side opposite `normal`.
    Halfspace {
        /// Unit normal pointing out of the solid side.
        normal: Vec2,
    },
    /// An axis-aligned box whose minimum corner is the body position.
    Aabb {
        /// Width and height in pixels.
        size: Vec2,
    },
}

/// Discriminant of a [`Shape`], used for filtering without inspecting
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// See [`Shape::Circle`].
    Circle,
    /// See [`Shape::Halfspace`].
    Halfspace,
    /// See [`Shape::Aabb`].
    Aabb,
}

impl Shape {
    /// Builds a circle, rejecting non-positive or non-finite radii.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidRadius`] for invalid radii.
    pub fn circle(radius: f32) -> Result<Self, ConfigError> {
        let shape = Self::Circle { radius };
        shape.validate()?;
        Ok(shape)
    }

    /// Builds a box of the given size, rejecting negative or non-finite
    /// extents.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidExtent`] for invalid sizes.
    pub fn aabb(size: Vec2) -> Result<Self, ConfigError> {
        let shape = Self::Aabb { size };
        shape.validate()?;
        Ok(shape)
    }

    /// Builds a halfspace whose normal is the canonical up normal `(0, -1)`
    /// rotated by `degrees`.
    ///
    /// # Examples
    /// ```
    /// use pebble::shape::Shape;
    /// let ground = Shape::halfspace(0.0);
    /// assert_eq!(ground.normal(), Some(glam::Vec2::new(0.0, -1.0)));
    /// ```
    #[must_use]
    pub fn halfspace(degrees: f32) -> Self {
        Self::Halfspace {
            normal: rotate_degrees(CANONICAL_UP, degrees),
        }
    }

    /// Builds a halfspace from an explicit normal, which must be unit length.
    ///
    /// # Errors
    /// Returns [`ConfigError::DegenerateNormal`] when the normal is not unit
    /// length within [`NORMAL_LENGTH_TOLERANCE`].
    pub fn halfspace_with_normal(normal: Vec2) -> Result<Self, ConfigError> {
        let shape = Self::Halfspace { normal };
        shape.validate()?;
        Ok(shape)
    }

    /// Checks the shape's geometric invariants.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Circle { radius } => {
                if radius.is_finite() && radius > 0.0 {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidRadius { radius })
                }
            }
            Self::Aabb { size } => {
                if size.is_finite() && size.x >= 0.0 && size.y >= 0.0 {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidExtent {
                        width: size.x,
                        height: size.y,
                    })
                }
            }
            Self::Halfspace { normal } => {
                let length = normal.length();
                if length.is_finite() && (length - 1.0).abs() <= NORMAL_LENGTH_TOLERANCE {
                    Ok(())
                } else {
                    Err(ConfigError::DegenerateNormal { length })
                }
            }
        }
    }

    /// The discriminant of this shape.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Halfspace { .. } => ShapeKind::Halfspace,
            Self::Aabb { .. } => ShapeKind::Aabb,
        }
    }

    /// Normal of a halfspace, `None` for other shapes.
    #[must_use]
    pub const fn normal(&self) -> Option<Vec2> {
        match self {
            Self::Halfspace { normal } => Some(*normal),
            _ => None,
        }
    }

    /// Re-orients a halfspace to the canonical up normal rotated by
    /// `degrees`. Returns `false` and leaves the shape untouched for circles
    /// and boxes, whose geometry is fixed after creation.
    pub fn set_rotation_degrees(&mut self, degrees: f32) -> bool {
        match self {
            Self::Halfspace { normal } => {
                *normal = rotate_degrees(CANONICAL_UP, degrees);
                true
            }
            _ => false,
        }
    }
}
