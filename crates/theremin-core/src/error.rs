//! Configuration errors reported when an engine is constructed.
//!
//! The per-frame path has no error returns; everything that can be wrong is
//! caught here, once, before any particle is seeded.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("`{name}` must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("`{name}` must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("`{name}` range is empty: [{min}, {max})")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("relaxation rate must be in (0, 1], got {0}")]
    RelaxationRate(f32),
    #[error("reset cube (half extent {half_extent}) must fit inside reset distance {distance}")]
    ResetRegion { half_extent: f32, distance: f32 },
    #[error("volume must be in [0, 1], got {0}")]
    Volume(f32),
}
