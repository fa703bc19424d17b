//! Error types shared by the geometry layers.
//!
//! `GeoError` covers both invalid input (rejected before any computation) and
//! ordering-precondition violations (a caller bug).  Sparse data is never an
//! error: it shows up as `Direction::Unknown` or an empty result.

use thiserror::Error;

/// Errors produced by coordinate validation and polyline geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("route needs at least 2 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("invalid coordinate (lon {lon}, lat {lat})")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("buffer must be a finite, non-negative distance in metres, got {0}")]
    InvalidBuffer(f64),

    #[error("fraction {0} is outside [0, 1]")]
    FractionOutOfRange(f64),

    #[error("fractions out of route order: {from} > {to}")]
    FractionOrder { from: f64, to: f64 },
}

/// Shorthand result type for geometry operations.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors produced while reading marker/facility snapshots.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("snapshot parse error: {0}")]
    Parse(String),

    #[error("row {row}: {source}")]
    Row {
        row:    usize,
        #[source]
        source: GeoError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
