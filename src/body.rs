//! Physics bodies: a shape plus point-mass kinematics.
//!
//! Bodies never rotate. Only the halfspace normal can be re-oriented, and
//! that is a geometric change rather than rotational dynamics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::material::Material;
use crate::shape::{Shape, ShapeKind};
use crate::DEFAULT_MASS;

/// Display colour carried for the renderer. Physics ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque red.
    pub const RED: Self = Self::rgb(230, 41, 55);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    /// Opaque grey.
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    /// Opaque yellow, used to highlight bodies in contact.
    pub const YELLOW: Self = Self::rgb(253, 249, 0);

    /// Builds an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

/// A simulated object.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// World-space position in pixels. Centre for circles, top-left corner
    /// for boxes and a point on the boundary for halfspaces.
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    /// Forces accumulated during the current step. Reset at the start of
    /// every [`World::step`](crate::world::World::step).
    pub net_force: Vec2,
    /// Presentation colour.
    pub color: Color,
    shape: Shape,
    mass: f32,
    is_static: bool,
    material: Material,
    colliding: bool,
}

impl Body {
    /// Creates a dynamic body at the origin.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the shape is invalid or `mass` is not
    /// positive and finite.
    ///
    /// # Examples
    /// ```
    /// use pebble::{body::Body, shape::Shape};
    /// let ball = Body::dynamic(Shape::circle(15.0)?, 2.0)?;
    /// assert!(!ball.is_static());
    /// # Ok::<(), pebble::ConfigError>(())
    /// ```
    pub fn dynamic(shape: Shape, mass: f32) -> Result<Self, ConfigError> {
        shape.validate()?;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::InvalidMass { mass });
        }
        Ok(Self::with_parts(shape, mass, false))
    }

    /// Creates an immovable body at the origin.
    ///
    /// Static bodies keep a nominal mass that is never used for dynamics.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the shape is invalid.
    pub fn fixed(shape: Shape) -> Result<Self, ConfigError> {
        shape.validate()?;
        Ok(Self::with_parts(shape, DEFAULT_MASS, true))
    }

    fn with_parts(shape: Shape, mass: f32, is_static: bool) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            net_force: Vec2::ZERO,
            color: if is_static { Color::GRAY } else { Color::RED },
            shape,
            mass,
            is_static,
            material: Material::default(),
            colliding: false,
        }
    }

    /// Builder: set initial position.
    #[must_use]
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Builder: set initial velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: set the surface material.
    ///
    /// # Errors
    /// Returns [`ConfigError::CoefficientOutOfRange`] for invalid
    /// coefficients.
    pub fn with_material(mut self, material: Material) -> Result<Self, ConfigError> {
        material.validate()?;
        self.material = material;
        Ok(self)
    }

    /// Builder: set the presentation colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Collision geometry.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Shorthand for `self.shape().kind()`.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Mass in arbitrary units. Meaningless for static bodies.
    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Reciprocal of the mass, zero for static bodies so they behave as
    /// infinitely heavy in impulse exchanges.
    #[must_use]
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static {
            0.0
        } else {
            self.mass.recip()
        }
    }

    /// Whether the body is immovable.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// Surface material.
    #[must_use]
    pub const fn material(&self) -> Material {
        self.material
    }

    /// Replaces the surface material.
    ///
    /// # Errors
    /// Returns [`ConfigError::CoefficientOutOfRange`] for invalid
    /// coefficients, leaving the current material in place.
    pub fn set_material(&mut self, material: Material) -> Result<(), ConfigError> {
        material.validate()?;
        self.material = material;
        Ok(())
    }

    /// Re-orients a halfspace body. See [`Shape::set_rotation_degrees`].
    pub fn set_rotation_degrees(&mut self, degrees: f32) -> bool {
        self.shape.set_rotation_degrees(degrees)
    }

    /// Whether the body overlapped another during the last collision pass.
    #[must_use]
    pub const fn is_colliding(&self) -> bool {
        self.colliding
    }

    pub(crate) fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }

    /// Colour the renderer should use: highlighted while in contact.
    #[must_use]
    pub const fn display_color(&self) -> Color {
        if self.colliding {
            Color::YELLOW
        } else {
            self.color
        }
    }

    /// Moves a dynamic body; static bodies ignore the request.
    pub(crate) fn nudge(&mut self, offset: Vec2) {
        if !self.is_static {
            self.position += offset;
        }
    }

    /// Changes a dynamic body's velocity; static bodies ignore the request.
    pub(crate) fn accelerate(&mut self, delta: Vec2) {
        if !self.is_static {
            self.velocity += delta;
        }
    }

    /// Velocity as seen by contact resolution: zero for static bodies.
    #[must_use]
    pub fn contact_velocity(&self) -> Vec2 {
        if self.is_static {
            Vec2::ZERO
        } else {
            self.velocity
        }
    }
}
