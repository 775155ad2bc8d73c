//! Error types reported when building bodies or loading a sandbox
//! configuration.
//!
//! The simulation step itself never fails: every numeric edge case inside
//! the world is handled with a fallback value. Invalid parameters are caught
//! here, at construction time.

use std::path::PathBuf;

use thiserror::Error;

/// A shape, body, material or sandbox parameter outside its valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Circle radius must be positive and finite.
    #[error("circle radius must be positive and finite, got {radius}")]
    InvalidRadius {
        /// Rejected radius.
        radius: f32,
    },
    /// Box extents must be non-negative and finite.
    #[error("box size must be non-negative and finite, got ({width}, {height})")]
    InvalidExtent {
        /// Rejected width.
        width: f32,
        /// Rejected height.
        height: f32,
    },
    /// Halfspace normals must have unit length.
    #[error("halfspace normal must be unit length, got length {length}")]
    DegenerateNormal {
        /// Length of the rejected normal.
        length: f32,
    },
    /// Dynamic bodies need a positive, finite mass.
    #[error("mass must be positive and finite, got {mass}")]
    InvalidMass {
        /// Rejected mass.
        mass: f32,
    },
    /// Material coefficients live in `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    CoefficientOutOfRange {
        /// Which coefficient was rejected.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The fixed step rate must be at least one step per second.
    #[error("steps_per_second must be at least 1")]
    ZeroStepRate,
    /// World bounds must have a positive area.
    #[error("world bounds must be positive and finite, got {width}x{height}")]
    InvalidBounds {
        /// Rejected width.
        width: f32,
        /// Rejected height.
        height: f32,
    },
    /// Only circles and boxes can be launched or spawned as dynamic bodies.
    #[error("launch shape must be a circle or a box")]
    UnsupportedLaunchShape,
    /// A vector parameter contained NaN or infinity.
    #[error("{name} must be finite")]
    NonFinite {
        /// Which parameter was rejected.
        name: &'static str,
    },
}

/// Failure while reading a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid TOML for a sandbox configuration.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The file parsed but holds invalid values.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}
