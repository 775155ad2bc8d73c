//! A running sandbox session: the physics half of a frame loop.
//!
//! Each [`Sandbox::tick`] applies the current [`Controls`], consumes queued
//! [`Trigger`]s, prunes bodies that left the bounds, advances the world by
//! one fixed step and finally advances the session clock. Presentation code
//! calls `tick` once per frame and draws from [`Sandbox::snapshot`].

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::body::Body;
use crate::config::SandboxConfig;
use crate::controls::{Controls, Trigger};
use crate::error::ConfigError;
use crate::lifecycle::{CleanupPolicy, ScenePopulator, SpawnRequest};
use crate::material::Material;
use crate::scene::DefaultScene;
use crate::shape::Shape;
use crate::snapshot::WorldSnapshot;
use crate::world::{BodyId, World};

/// Fixed-step session around a [`World`].
#[derive(Debug)]
pub struct Sandbox<S = DefaultScene> {
    world: World,
    controls: Controls,
    triggers: VecDeque<Trigger>,
    scene: S,
    launch_shape: Shape,
    launch_mass: f32,
    policy: CleanupPolicy,
    ground: Option<BodyId>,
    dt: f32,
    elapsed: f32,
    ticks: u64,
}

impl Sandbox<DefaultScene> {
    /// Session with the built-in scene, sharing the configured material.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when `config` is invalid.
    pub fn with_default_scene(config: &SandboxConfig) -> Result<Self, ConfigError> {
        Self::new(config, DefaultScene::new(config.material()))
    }
}

impl<S: ScenePopulator> Sandbox<S> {
    /// Validates `config`, places the ground and populates the scene.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when `config` is invalid or `scene` fails
    /// to populate.
    pub fn new(config: &SandboxConfig, scene: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let dt = config.dt()?;
        let mut world = World::new(config.gravity);
        let ground = if config.ground.enabled {
            let plane = Body::fixed(Shape::halfspace(config.ground.rotation_degrees))?
                .with_position(config.ground.position)
                .with_material(config.material())?;
            Some(world.add(plane))
        } else {
            None
        };
        scene.populate(&mut world)?;
        info!(
            "sandbox ready: {} body(ies), {} steps/s, gravity ({}, {})",
            world.len(),
            config.steps_per_second,
            config.gravity.x,
            config.gravity.y
        );
        Ok(Self {
            world,
            controls: Controls::from_config(config),
            triggers: VecDeque::new(),
            scene,
            launch_shape: config.launch.shape,
            launch_mass: config.launch.mass,
            policy: config.cleanup,
            ground,
            dt,
            elapsed: 0.0,
            ticks: 0,
        })
    }

    /// Runs one fixed step of the session.
    pub fn tick(&mut self) {
        self.apply_controls();
        while let Some(trigger) = self.triggers.pop_front() {
            self.handle(trigger);
        }
        let pruned = self.world.cleanup(self.controls.bounds, self.policy);
        if pruned > 0 {
            debug!("tick {}: pruned {pruned} body(ies)", self.ticks);
        }
        self.world.step(self.dt);
        self.elapsed += self.dt;
        self.ticks += 1;
    }

    fn apply_controls(&mut self) {
        self.controls.clamp_to_ranges();
        self.world.set_gravity(self.controls.gravity);
        let ground = self.controls.ground;
        let Some(id) = self.ground else {
            return;
        };
        if let Some(plane) = self.world.body_mut(id) {
            plane.position = ground.position;
            plane.set_rotation_degrees(ground.rotation_degrees);
        } else {
            debug!("ground {id} is gone; ground controls no longer apply");
            self.ground = None;
        }
    }

    fn handle(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Launch => {
                let launch = self.controls.launch;
                let request = SpawnRequest::new(self.launch_shape)
                    .at(launch.origin)
                    .moving(launch.velocity())
                    .with_mass(self.launch_mass)
                    .with_material(Material {
                        restitution: self.controls.restitution,
                        friction: self.controls.friction,
                    });
                if let Err(err) = self.world.spawn(request) {
                    warn!("launch skipped: {err}");
                }
            }
            Trigger::Reset => {
                if let Err(err) = self.world.reset_dynamic(&self.scene) {
                    warn!("scene reset incomplete: {err}");
                }
            }
        }
    }

    /// Queues a trigger for the next tick.
    pub fn trigger(&mut self, trigger: Trigger) {
        self.triggers.push_back(trigger);
    }

    /// Simulated seconds elapsed so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of completed ticks.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Fixed step length in seconds.
    #[must_use]
    pub const fn dt(&self) -> f32 {
        self.dt
    }

    /// Handle of the ground plane, while it exists.
    #[must_use]
    pub const fn ground(&self) -> Option<BodyId> {
        self.ground
    }

    /// The simulated world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Current controls.
    #[must_use]
    pub const fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Controls to edit before the next tick.
    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    /// Serialisable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(&self.world, self.elapsed, &self.controls.launch)
    }
}
