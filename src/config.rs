//! Sandbox configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock sandbox: 50 steps per second, gravity `(0, 9)`, a 1280×720
//! viewport with a flat ground near the bottom, and a 15 px ball launched
//! from `(100, 620)`.
//!
//! ```toml
//! steps_per_second = 60
//! gravity = [0.0, 50.0]
//!
//! [launch]
//! speed = 250.0
//! angle_degrees = 45.0
//! shape = { kind = "aabb", size = [20.0, 20.0] }
//!
//! [cleanup]
//! exempt_static = true
//! ```

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LoadError};
use crate::lifecycle::{Bounds, CleanupPolicy};
use crate::material::Material;
use crate::numeric::step_duration;
use crate::shape::{Shape, ShapeKind};
use crate::{
    DEFAULT_FRICTION, DEFAULT_GRAVITY, DEFAULT_GROUND_INSET, DEFAULT_LAUNCH_INSET,
    DEFAULT_LAUNCH_RADIUS, DEFAULT_LAUNCH_SPEED, DEFAULT_MASS, DEFAULT_RESTITUTION,
    DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, TARGET_STEPS_PER_SECOND,
};

/// Top-level sandbox settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandboxConfig {
    /// Fixed simulation rate; the step length is its reciprocal.
    pub steps_per_second: u32,
    /// Initial gravity in pixels/s².
    pub gravity: Vec2,
    /// Restitution given to launched and scene bodies.
    pub restitution: f32,
    /// Friction given to launched and scene bodies.
    pub friction: f32,
    /// Region outside which bodies are pruned.
    pub bounds: Bounds,
    /// Launch parameters.
    pub launch: LaunchConfig,
    /// Static ground plane.
    pub ground: GroundConfig,
    /// Pruning policy.
    pub cleanup: CleanupPolicy,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            steps_per_second: TARGET_STEPS_PER_SECOND,
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
            bounds: Bounds::default(),
            launch: LaunchConfig::default(),
            ground: GroundConfig::default(),
            cleanup: CleanupPolicy::default(),
        }
    }
}

/// Where and how launched bodies start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// Spawn point.
    pub origin: Vec2,
    /// Launch speed in pixels per second; negative values fire backwards.
    pub speed: f32,
    /// Launch angle in degrees, counter-clockwise from +x on screen.
    pub angle_degrees: f32,
    /// Shape of each launched body.
    pub shape: Shape,
    /// Mass of each launched body.
    pub mass: f32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::new(DEFAULT_LAUNCH_INSET, DEFAULT_WORLD_HEIGHT - DEFAULT_LAUNCH_INSET),
            speed: DEFAULT_LAUNCH_SPEED,
            angle_degrees: 0.0,
            shape: Shape::Circle {
                radius: DEFAULT_LAUNCH_RADIUS,
            },
            mass: DEFAULT_MASS,
        }
    }
}

/// The static halfspace bodies rest on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroundConfig {
    /// Whether the sandbox creates a ground at all.
    pub enabled: bool,
    /// A point on the ground surface.
    pub position: Vec2,
    /// Tilt in degrees; zero is level with the solid side below.
    pub rotation_degrees: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: Vec2::new(
                DEFAULT_WORLD_WIDTH * 0.5,
                DEFAULT_WORLD_HEIGHT - DEFAULT_GROUND_INSET,
            ),
            rotation_degrees: 0.0,
        }
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name })
    }
}

fn finite_vec(name: &'static str, value: Vec2) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name })
    }
}

impl SandboxConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns [`LoadError::Parse`] for malformed TOML or unknown keys and
    /// [`LoadError::Invalid`] for values outside their domain.
    pub fn from_toml_str(source: &str) -> Result<Self, LoadError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] when the file cannot be read, otherwise as
    /// [`SandboxConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every value against its domain.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_second == 0 {
            return Err(ConfigError::ZeroStepRate);
        }
        finite_vec("gravity", self.gravity)?;
        self.material().validate()?;
        self.bounds.validate()?;
        self.launch.validate()?;
        finite_vec("ground.position", self.ground.position)?;
        finite("ground.rotation_degrees", self.ground.rotation_degrees)
    }

    /// Fixed step length in seconds.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroStepRate`] when the step rate is zero.
    pub fn dt(&self) -> Result<f32, ConfigError> {
        step_duration(self.steps_per_second).ok_or(ConfigError::ZeroStepRate)
    }

    /// Material built from the configured coefficients.
    #[must_use]
    pub const fn material(&self) -> Material {
        Material {
            restitution: self.restitution,
            friction: self.friction,
        }
    }
}

impl LaunchConfig {
    /// Checks the launch parameters.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for non-finite kinematics, an invalid or
    /// halfspace shape, or a bad mass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite_vec("launch.origin", self.origin)?;
        finite("launch.speed", self.speed)?;
        finite("launch.angle_degrees", self.angle_degrees)?;
        if self.shape.kind() == ShapeKind::Halfspace {
            return Err(ConfigError::UnsupportedLaunchShape);
        }
        self.shape.validate()?;
        if self.mass.is_finite() && self.mass > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidMass { mass: self.mass })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SandboxConfig::from_toml_str("").expect("defaults are valid");
        assert_eq!(config, SandboxConfig::default());
        assert_relative_eq!(config.dt().expect("non-zero rate"), 0.02);
        assert_eq!(config.launch.origin, Vec2::new(100.0, 620.0));
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let source = concat!(
            "gravity = [0.0, 50.0]\n",
            "[launch]\n",
            "speed = 250.0\n",
            "shape = { kind = \"aabb\", size = [20.0, 10.0] }\n",
        );
        let config = SandboxConfig::from_toml_str(source).expect("valid document");
        assert_eq!(config.gravity, Vec2::new(0.0, 50.0));
        assert_relative_eq!(config.launch.speed, 250.0);
        assert_eq!(
            config.launch.shape,
            Shape::Aabb {
                size: Vec2::new(20.0, 10.0)
            }
        );
        assert_relative_eq!(config.launch.mass, 1.0);
        assert!(config.ground.enabled);
    }

    #[rstest]
    #[case("steps_per_second = 0", ConfigError::ZeroStepRate)]
    #[case(
        "friction = 1.5",
        ConfigError::CoefficientOutOfRange { name: "friction", value: 1.5 }
    )]
    #[case(
        "bounds = { width = 0.0, height = 10.0 }",
        ConfigError::InvalidBounds { width: 0.0, height: 10.0 }
    )]
    #[case(
        "[launch]\nshape = { kind = \"halfspace\", normal = [0.0, -1.0] }",
        ConfigError::UnsupportedLaunchShape
    )]
    #[case("[launch]\nmass = -1.0", ConfigError::InvalidMass { mass: -1.0 })]
    fn invalid_values_are_rejected(#[case] source: &str, #[case] expected: ConfigError) {
        match SandboxConfig::from_toml_str(source) {
            Err(LoadError::Invalid(err)) => assert_eq!(err, expected),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        assert!(matches!(
            SandboxConfig::from_toml_str("gravitee = [0.0, 1.0]"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SandboxConfig::load("/definitely/not/here.toml").expect_err("missing file");
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
