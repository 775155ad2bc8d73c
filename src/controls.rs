//! Tunable parameters and one-shot triggers written by a presentation layer.
//!
//! A front end owns no physics state. It edits [`Controls`] and queues
//! [`Trigger`]s; the sandbox applies both at the start of the next tick.

use std::ops::RangeInclusive;

use glam::Vec2;
use serde::Serialize;

use crate::config::SandboxConfig;
use crate::lifecycle::Bounds;
use crate::vector_math::launch_velocity;

/// Accepted launch speeds in pixels per second.
pub const SPEED_RANGE: RangeInclusive<f32> = -1000.0..=1000.0;
/// Accepted launch angles in degrees.
pub const ANGLE_RANGE: RangeInclusive<f32> = -180.0..=180.0;
/// Accepted range for each gravity component in pixels/s².
pub const GRAVITY_RANGE: RangeInclusive<f32> = -1000.0..=1000.0;

/// One-shot actions consumed by the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Spawn a body with the current launch parameters.
    Launch,
    /// Clear every non-halfspace body and repopulate the scene.
    Reset,
}

/// Launch parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaunchControls {
    /// Spawn point.
    pub origin: Vec2,
    /// Launch speed in pixels per second.
    pub speed: f32,
    /// Launch angle in degrees.
    pub angle_degrees: f32,
}

impl LaunchControls {
    /// Initial velocity of a body launched with these parameters.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        launch_velocity(self.speed, self.angle_degrees)
    }
}

/// Ground plane placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroundControls {
    /// A point on the ground surface.
    pub position: Vec2,
    /// Tilt in degrees.
    pub rotation_degrees: f32,
}

/// Every value a front end may change between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Controls {
    /// World gravity.
    pub gravity: Vec2,
    /// Restitution for newly launched bodies.
    pub restitution: f32,
    /// Friction for newly launched bodies.
    pub friction: f32,
    /// Launch parameters.
    pub launch: LaunchControls,
    /// Ground placement, applied while the ground body exists.
    pub ground: GroundControls,
    /// Pruning region, usually the current viewport.
    pub bounds: Bounds,
}

impl Controls {
    /// Initial controls for `config`.
    #[must_use]
    pub const fn from_config(config: &SandboxConfig) -> Self {
        Self {
            gravity: config.gravity,
            restitution: config.restitution,
            friction: config.friction,
            launch: LaunchControls {
                origin: config.launch.origin,
                speed: config.launch.speed,
                angle_degrees: config.launch.angle_degrees,
            },
            ground: GroundControls {
                position: config.ground.position,
                rotation_degrees: config.ground.rotation_degrees,
            },
            bounds: config.bounds,
        }
    }

    /// Pulls slider-style values back into their accepted ranges.
    ///
    /// ```
    /// use pebble::config::SandboxConfig;
    /// use pebble::controls::Controls;
    /// let mut controls = Controls::from_config(&SandboxConfig::default());
    /// controls.friction = 3.0;
    /// controls.launch.angle_degrees = 270.0;
    /// controls.clamp_to_ranges();
    /// assert_eq!(controls.friction, 1.0);
    /// assert_eq!(controls.launch.angle_degrees, 180.0);
    /// ```
    pub fn clamp_to_ranges(&mut self) {
        let clamp =
            |value: f32, range: &RangeInclusive<f32>| value.clamp(*range.start(), *range.end());
        self.gravity = Vec2::new(
            clamp(self.gravity.x, &GRAVITY_RANGE),
            clamp(self.gravity.y, &GRAVITY_RANGE),
        );
        self.restitution = self.restitution.clamp(0.0, 1.0);
        self.friction = self.friction.clamp(0.0, 1.0);
        self.launch.speed = clamp(self.launch.speed, &SPEED_RANGE);
        self.launch.angle_degrees = clamp(self.launch.angle_degrees, &ANGLE_RANGE);
    }
}
