//! Simulation constants shared across the world, the sandbox session and the
//! collision routines.
//!
//! Defaults are the values the sandbox boots with when no configuration file
//! overrides them.
use glam::Vec2;

/// Fixed number of simulation steps per second.
pub const TARGET_STEPS_PER_SECOND: u32 = 50;
/// Default gravitational acceleration in pixels per second squared. Screen
/// space is y-down, so positive `y` pulls bodies towards the bottom edge.
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 9.0);
/// Restitution given to launched bodies.
pub const DEFAULT_RESTITUTION: f32 = 0.8;
/// Friction given to launched bodies.
pub const DEFAULT_FRICTION: f32 = 0.5;
/// Mass of launched and scene bodies.
pub const DEFAULT_MASS: f32 = 1.0;
/// Default width of the simulated area in pixels.
pub const DEFAULT_WORLD_WIDTH: f32 = 1280.0;
/// Default height of the simulated area in pixels.
pub const DEFAULT_WORLD_HEIGHT: f32 = 720.0;
/// Radius of the ball launched by the default controls.
pub const DEFAULT_LAUNCH_RADIUS: f32 = 15.0;
/// Launch speed in pixels per second.
pub const DEFAULT_LAUNCH_SPEED: f32 = 100.0;
/// Launch origin offset from the left and bottom edges of the world.
pub const DEFAULT_LAUNCH_INSET: f32 = 100.0;
/// Distance of the default ground plane above the bottom edge.
pub const DEFAULT_GROUND_INSET: f32 = 50.0;

/// Normal of an unrotated halfspace: the solid side lies below it.
pub const CANONICAL_UP: Vec2 = Vec2::new(0.0, -1.0);
/// Contact normal used when two circle centres coincide.
pub const COINCIDENT_NORMAL: Vec2 = Vec2::new(0.0, 1.0);
/// Centre distances below this are treated as coincident.
pub const SEPARATION_EPSILON: f32 = 1e-4;
/// Tangential forces and speeds below this have no usable direction.
pub const TANGENT_EPSILON: f32 = 1e-4;
/// Closing speed a circle must exceed against a halfspace before it bounces.
///
/// Slower contacts are treated as resting so the ball settles instead of
/// jittering on the plane.
pub const RESTING_CLOSING_SPEED: f32 = 2.0;
/// Allowed deviation from unit length for halfspace normals.
pub const NORMAL_LENGTH_TOLERANCE: f32 = 1e-3;
