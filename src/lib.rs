//! A fixed-step 2D rigid-body physics sandbox.
//!
//! Circles, axis-aligned boxes and static halfspaces fall under gravity,
//! collide and bounce. Contacts are detected discretely each step and
//! resolved pair by pair with positional correction, restitution impulses
//! and Coulomb friction. There are no rotational dynamics.
//!
//! [`World`] is the simulation core. [`Sandbox`] wraps it in a session that
//! applies tunable [`Controls`], consumes [`Trigger`]s and keeps time, for use
//! by a frame loop or the headless `pebble` binary.
//!
//! ```
//! use pebble::prelude::*;
//!
//! let mut world = World::new(Vec2::new(0.0, 50.0));
//! world.add(Body::fixed(Shape::halfspace(0.0))?.with_position(Vec2::new(0.0, 150.0)));
//! let ball = world.spawn(SpawnRequest::new(Shape::circle(15.0)?).at(Vec2::new(100.0, 100.0)))?;
//! for _ in 0..500 {
//!     world.step(0.02);
//! }
//! let resting = world.body(ball).map(|body| body.position.y);
//! assert!(resting.is_some_and(|y| (y - 135.0).abs() < 1.0));
//! # Ok::<(), pebble::ConfigError>(())
//! ```
pub mod body;
pub mod collision;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod integrator;
pub mod lifecycle;
pub mod logging;
pub mod material;
pub mod numeric;
pub mod physics;
pub mod sandbox;
pub mod scene;
pub mod shape;
pub mod snapshot;
pub mod vector_math;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use body::{Body, Color};
pub use config::SandboxConfig;
pub use controls::{Controls, Trigger};
pub use error::{ConfigError, LoadError};
pub use lifecycle::{Bounds, CleanupPolicy, ScenePopulator, SpawnRequest};
pub use logging::init as init_logging;
pub use material::Material;
pub use physics::applied_acceleration;
pub use sandbox::Sandbox;
pub use scene::DefaultScene;
pub use shape::{Shape, ShapeKind};
pub use snapshot::WorldSnapshot;
pub use world::{BodyId, World};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use pebble::prelude::*;
    //! ```

    pub use crate::{
        Body, BodyId, Bounds, CleanupPolicy, Material, Sandbox, SandboxConfig, Shape,
        SpawnRequest, Trigger, World,
    };
    pub use glam::Vec2;
}

#[cfg(test)]
mod assertions {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(World: Send, Sync, Clone);
    assert_impl_all!(Sandbox: Send);
    assert_impl_all!(WorldSnapshot: Send, serde::Serialize);
}
