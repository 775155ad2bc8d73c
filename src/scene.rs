//! The built-in starting scene.

use glam::Vec2;

use crate::body::Color;
use crate::error::ConfigError;
use crate::lifecycle::{ScenePopulator, SpawnRequest};
use crate::material::Material;
use crate::shape::Shape;
use crate::world::World;

/// A handful of circles and boxes dropped from the upper part of the
/// default 1280×720 viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DefaultScene {
    /// Material given to every body in the scene.
    pub material: Material,
}

impl DefaultScene {
    /// Scene whose bodies share `material`.
    #[must_use]
    pub const fn new(material: Material) -> Self {
        Self { material }
    }

    fn requests(&self) -> [SpawnRequest; 5] {
        let circle = |radius| Shape::Circle { radius };
        let aabb = |width, height| Shape::Aabb {
            size: Vec2::new(width, height),
        };
        [
            SpawnRequest::new(circle(20.0))
                .at(Vec2::new(400.0, 120.0))
                .with_color(Color::RED),
            SpawnRequest::new(circle(25.0))
                .at(Vec2::new(470.0, 60.0))
                .with_mass(2.0)
                .with_color(Color::GREEN),
            SpawnRequest::new(circle(15.0))
                .at(Vec2::new(540.0, 160.0))
                .with_color(Color::BLUE),
            SpawnRequest::new(aabb(40.0, 40.0))
                .at(Vec2::new(700.0, 100.0))
                .with_mass(2.0)
                .with_color(Color::GREEN),
            SpawnRequest::new(aabb(30.0, 60.0))
                .at(Vec2::new(820.0, 40.0))
                .with_color(Color::BLUE),
        ]
        .map(|request| request.with_material(self.material))
    }
}

impl ScenePopulator for DefaultScene {
    fn populate(&self, world: &mut World) -> Result<(), ConfigError> {
        for request in self.requests() {
            world.spawn(request)?;
        }
        Ok(())
    }
}
