//! Read-only, serialisable views of the world for presentation layers.

use glam::Vec2;
use serde::Serialize;

use crate::body::{Body, Color};
use crate::controls::LaunchControls;
use crate::shape::Shape;
use crate::world::{BodyId, World};

/// Everything a renderer needs to draw one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodySnapshot {
    /// Handle of the body.
    pub id: BodyId,
    /// Geometry.
    pub shape: Shape,
    /// Position in pixels.
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    /// Whether the body is static.
    pub is_static: bool,
    /// Whether the body touched another during the last step.
    pub colliding: bool,
    /// Colour to draw with, highlighted while colliding.
    pub color: Color,
}

impl BodySnapshot {
    /// Captures the state of `body`.
    #[must_use]
    pub const fn capture(id: BodyId, body: &Body) -> Self {
        Self {
            id,
            shape: *body.shape(),
            position: body.position,
            velocity: body.velocity,
            is_static: body.is_static(),
            colliding: body.is_colliding(),
            color: body.display_color(),
        }
    }
}

/// The launch arrow: where the next body appears and its initial velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaunchPreview {
    /// Spawn point.
    pub origin: Vec2,
    /// Initial velocity; `origin + velocity` is the arrow tip.
    pub velocity: Vec2,
}

impl From<&LaunchControls> for LaunchPreview {
    fn from(launch: &LaunchControls) -> Self {
        Self {
            origin: launch.origin,
            velocity: launch.velocity(),
        }
    }
}

/// State of a sandbox at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    /// Simulated seconds since the session started.
    pub time: f32,
    /// Gravity in effect.
    pub gravity: Vec2,
    /// Launch arrow.
    pub launch: LaunchPreview,
    /// Bodies in storage order.
    pub bodies: Vec<BodySnapshot>,
}

impl WorldSnapshot {
    /// Captures `world` at simulated time `time`.
    #[must_use]
    pub fn capture(world: &World, time: f32, launch: &LaunchControls) -> Self {
        Self {
            time,
            gravity: world.gravity(),
            launch: launch.into(),
            bodies: world
                .bodies()
                .map(|(id, body)| BodySnapshot::capture(id, body))
                .collect(),
        }
    }

    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn json_lists_bodies_with_tagged_shapes() {
        let mut world = World::new(Vec2::new(0.0, 9.0));
        world.add(
            Body::dynamic(Shape::Circle { radius: 15.0 }, 1.0)
                .expect("valid circle")
                .with_position(Vec2::new(10.0, 20.0)),
        );
        let launch = LaunchControls {
            origin: Vec2::new(100.0, 620.0),
            speed: 100.0,
            angle_degrees: 0.0,
        };
        let json = WorldSnapshot::capture(&world, 1.5, &launch)
            .to_json()
            .expect("serialisable");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["time"], 1.5);
        assert_eq!(value["bodies"][0]["shape"]["kind"], "circle");
        assert_eq!(value["bodies"][0]["position"][1], 20.0);
        assert_eq!(value["launch"]["velocity"][0], 100.0);
    }
}
