//! The physics world: body storage and the fixed-step pipeline.
//!
//! Bodies live in a vector whose order defines both iteration order and
//! the order collision pairs are resolved in. Callers address bodies
//! through [`BodyId`] handles, which stay valid until that body is removed
//! even though removal compacts the vector.

use std::fmt;

use glam::Vec2;
use log::trace;
use serde::Serialize;

use crate::body::Body;
use crate::collision::{collide, ContactContext};
use crate::integrator::integrate;
use crate::physics::gravity_force;
use crate::DEFAULT_GRAVITY;

/// Stable handle to a body stored in a [`World`].
///
/// Identifiers are never reused within one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BodyId(u64);

impl BodyId {
    /// Raw numeric value of the handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: BodyId,
    body: Body,
}

/// Owns every body and advances them in fixed steps.
#[derive(Debug, Clone)]
pub struct World {
    gravity: Vec2,
    entries: Vec<Entry>,
    next_id: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl World {
    /// Creates an empty world with the given gravity in pixels/s².
    #[must_use]
    pub const fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Current gravity vector.
    #[must_use]
    pub const fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Replaces the gravity vector used by subsequent steps.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// Appends a body and returns its handle.
    pub fn add(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, body });
        id
    }

    /// Removes a body, returning it if it was present.
    ///
    /// The relative order of the remaining bodies is preserved.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).body)
    }

    /// Shared access to a body.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.body)
    }

    /// Exclusive access to a body, e.g. for presentation-driven tweaks.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.body)
    }

    /// Whether a handle still refers to a live body.
    #[must_use]
    pub fn contains(&self, id: BodyId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Iterates over bodies in storage order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.body))
    }

    /// Number of live bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the world holds no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the bodies for which `keep` returns `true` and reports how
    /// many were dropped.
    pub(crate) fn retain_bodies(&mut self, mut keep: impl FnMut(&Body) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| keep(&entry.body));
        before - self.entries.len()
    }

    /// Advances the simulation by one fixed step of `dt` seconds.
    ///
    /// Forces are rebuilt from scratch, contacts adjust positions,
    /// velocities and forces, and finally every dynamic body is integrated.
    pub fn step(&mut self, dt: f32) {
        debug_assert!(dt > 0.0, "step duration must be positive");
        self.reset_net_forces();
        self.add_gravity_forces();
        let contacts = self.check_collisions(dt);
        trace!("step resolved {contacts} contact pair(s)");
        self.apply_kinematics(dt);
    }

    /// Clears the force accumulator of every body.
    pub fn reset_net_forces(&mut self) {
        for entry in &mut self.entries {
            entry.body.net_force = Vec2::ZERO;
        }
    }

    /// Adds each dynamic body's weight to its force accumulator.
    pub fn add_gravity_forces(&mut self) {
        let gravity = self.gravity;
        for entry in self.entries.iter_mut().filter(|entry| !entry.body.is_static()) {
            entry.body.net_force += gravity_force(gravity, entry.body.mass());
        }
    }

    /// Runs narrow-phase resolution over every unordered pair in storage
    /// order and returns how many pairs overlapped.
    ///
    /// Contact flags are cleared first, then set on both members of each
    /// overlapping pair. Each pair sees the corrections made by earlier
    /// pairs in the same pass.
    pub fn check_collisions(&mut self, dt: f32) -> usize {
        let context = ContactContext {
            gravity: self.gravity,
            dt,
        };
        for entry in &mut self.entries {
            entry.body.set_colliding(false);
        }

        let mut contacts = 0;
        for split in 1..self.entries.len() {
            let (head, tail) = self.entries.split_at_mut(split);
            let Some(first) = head.last_mut() else {
                continue;
            };
            for second in tail {
                if collide(&mut first.body, &mut second.body, &context) {
                    first.body.set_colliding(true);
                    second.body.set_colliding(true);
                    contacts += 1;
                }
            }
        }
        contacts
    }

    /// Integrates every dynamic body over `dt` seconds.
    pub fn apply_kinematics(&mut self, dt: f32) {
        for entry in &mut self.entries {
            integrate(&mut entry.body, dt);
        }
    }
}
