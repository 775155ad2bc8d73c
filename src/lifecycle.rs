//! Body lifecycle: spawning on demand, pruning out-of-bounds bodies and
//! resetting the dynamic part of a scene.

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::body::{Body, Color};
use crate::error::ConfigError;
use crate::material::Material;
use crate::shape::{Shape, ShapeKind};
use crate::world::{BodyId, World};
use crate::{DEFAULT_MASS, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};

/// Everything needed to create a dynamic body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    /// Shape of the new body.
    pub shape: Shape,
    /// Initial position (centre for circles, top-left corner for boxes).
    pub position: Vec2,
    /// Initial velocity in pixels per second.
    pub velocity: Vec2,
    /// Mass, which must be finite and positive.
    pub mass: f32,
    /// Restitution and friction coefficients.
    pub material: Material,
    /// Display colour.
    pub color: Color,
}

impl SpawnRequest {
    /// Starts a request for `shape` at rest at the origin with default mass,
    /// material and colour.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: DEFAULT_MASS,
            material: Material::default(),
            color: Color::default(),
        }
    }

    /// Builder: set the initial position.
    #[must_use]
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Builder: set the initial velocity.
    #[must_use]
    pub fn moving(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder: set the mass.
    #[must_use]
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Builder: set the material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Builder: set the display colour.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Validates the request and builds the body.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for an invalid shape, mass or material, or
    /// non-finite kinematics. Halfspaces cannot be dynamic and are rejected
    /// with [`ConfigError::UnsupportedLaunchShape`].
    pub fn into_body(self) -> Result<Body, ConfigError> {
        if self.shape.kind() == ShapeKind::Halfspace {
            return Err(ConfigError::UnsupportedLaunchShape);
        }
        if !self.position.is_finite() {
            return Err(ConfigError::NonFinite { name: "position" });
        }
        if !self.velocity.is_finite() {
            return Err(ConfigError::NonFinite { name: "velocity" });
        }
        Ok(Body::dynamic(self.shape, self.mass)?
            .with_material(self.material)?
            .with_position(self.position)
            .with_velocity(self.velocity)
            .with_color(self.color))
    }
}

/// The rectangle `[0, width] × [0, height]` bodies must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Horizontal extent in pixels.
    pub width: f32,
    /// Vertical extent in pixels.
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

impl Bounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBounds`] unless both extents are finite
    /// and positive.
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let bounds = Self { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks both extents are finite and positive.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBounds`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |extent: f32| extent.is_finite() && extent > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Whether `point` lies inside the bounds, edges included.
    ///
    /// ```
    /// use glam::Vec2;
    /// use pebble::lifecycle::Bounds;
    /// let bounds = Bounds { width: 100.0, height: 50.0 };
    /// assert!(bounds.contains(Vec2::new(100.0, 0.0)));
    /// assert!(!bounds.contains(Vec2::new(100.5, 10.0)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Controls which bodies [`World::cleanup`] may remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupPolicy {
    /// Keep static bodies even when they sit outside the bounds.
    pub exempt_static: bool,
}

/// Recreates the initial set of dynamic bodies after a reset.
pub trait ScenePopulator {
    /// Adds the scene's bodies to `world`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a body in the scene is invalid.
    fn populate(&self, world: &mut World) -> Result<(), ConfigError>;
}

impl World {
    /// Validates `request` and appends the resulting dynamic body.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the request is invalid; the world is
    /// left untouched.
    pub fn spawn(&mut self, request: SpawnRequest) -> Result<BodyId, ConfigError> {
        let body = request.into_body()?;
        let id = self.add(body);
        debug!(
            "spawned {:?} body {id} at ({:.1}, {:.1})",
            request.shape.kind(),
            request.position.x,
            request.position.y
        );
        Ok(id)
    }

    /// Removes every body whose position is outside `bounds` and returns the
    /// number removed.
    ///
    /// Static bodies are pruned like any other unless `policy` exempts them.
    pub fn cleanup(&mut self, bounds: Bounds, policy: CleanupPolicy) -> usize {
        let removed = self.retain_bodies(|body| {
            (policy.exempt_static && body.is_static()) || bounds.contains(body.position)
        });
        if removed > 0 {
            debug!("pruned {removed} body(ies) outside {}x{}", bounds.width, bounds.height);
        }
        removed
    }

    /// Removes every body that is not a halfspace, then asks `scene` to
    /// repopulate the world.
    ///
    /// # Errors
    /// Propagates the first error reported by `scene`.
    pub fn reset_dynamic<S>(&mut self, scene: &S) -> Result<(), ConfigError>
    where
        S: ScenePopulator + ?Sized,
    {
        let removed = self.retain_bodies(|body| body.kind() == ShapeKind::Halfspace);
        debug!("reset removed {removed} body(ies)");
        scene.populate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec2::new(0.0, 0.0), true)]
    #[case(Vec2::new(1280.0, 720.0), true)]
    #[case(Vec2::new(-0.1, 10.0), false)]
    #[case(Vec2::new(10.0, 720.1), false)]
    #[case(Vec2::new(f32::NAN, 10.0), false)]
    fn bounds_include_edges(#[case] point: Vec2, #[case] inside: bool) {
        assert_eq!(Bounds::default().contains(point), inside);
    }

    #[rstest]
    #[case(0.0, 10.0)]
    #[case(10.0, -1.0)]
    #[case(f32::INFINITY, 10.0)]
    fn bounds_reject_degenerate_extents(#[case] width: f32, #[case] height: f32) {
        assert!(matches!(
            Bounds::new(width, height),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn spawn_rejects_invalid_mass_without_touching_world() {
        let mut world = World::default();
        let request = SpawnRequest::new(Shape::Circle { radius: 5.0 }).with_mass(0.0);
        assert!(world.spawn(request).is_err());
        assert!(world.is_empty());
    }

    #[test]
    fn spawn_rejects_dynamic_halfspace() {
        let mut world = World::default();
        let request = SpawnRequest::new(Shape::halfspace(0.0)).at(Vec2::new(100.0, 100.0));
        assert_eq!(world.spawn(request), Err(ConfigError::UnsupportedLaunchShape));
        assert!(world.is_empty());
    }

    #[test]
    fn spawn_rejects_non_finite_velocity() {
        let mut world = World::default();
        let request =
            SpawnRequest::new(Shape::Circle { radius: 5.0 }).moving(Vec2::new(f32::NAN, 0.0));
        assert_eq!(
            world.spawn(request),
            Err(ConfigError::NonFinite { name: "velocity" })
        );
    }

    #[test]
    fn spawned_body_is_dynamic_with_requested_state() {
        let mut world = World::default();
        let id = world
            .spawn(
                SpawnRequest::new(Shape::Circle { radius: 15.0 })
                    .at(Vec2::new(100.0, 620.0))
                    .moving(Vec2::new(100.0, 0.0))
                    .with_color(Color::BLUE),
            )
            .expect("valid request");
        let body = world.body(id).expect("spawned body");
        assert!(!body.is_static());
        assert_eq!(body.position, Vec2::new(100.0, 620.0));
        assert_eq!(body.velocity, Vec2::new(100.0, 0.0));
        assert_eq!(body.color, Color::BLUE);
    }

    #[rstest]
    #[case(CleanupPolicy::default(), 0)]
    #[case(CleanupPolicy { exempt_static: true }, 1)]
    fn cleanup_policy_decides_static_fate(#[case] policy: CleanupPolicy, #[case] kept: usize) {
        let mut world = World::default();
        world.add(
            Body::fixed(Shape::halfspace(0.0))
                .expect("valid halfspace")
                .with_position(Vec2::new(640.0, 900.0)),
        );
        assert_eq!(world.cleanup(Bounds::default(), policy), 1 - kept);
        assert_eq!(world.len(), kept);
    }
}
