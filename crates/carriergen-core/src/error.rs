//! Error types for carrier geometry generation.
//!
//! Split between low-level geometry failures (bad arc/rectangle inputs),
//! parameter validation failures, and a unified error for callers that
//! drive whole generation passes.

use std::io;
use thiserror::Error;

/// Errors from the primitive path builders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Arc radius was zero, negative, or not finite.
    #[error("arc radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },

    /// Arc angle range contained a NaN or infinity.
    #[error("arc angle range is not finite: {theta0}..{theta1}")]
    InvalidAngleRange { theta0: f64, theta1: f64 },

    /// Rectangle width or height was negative or not finite.
    #[error("rectangle dimensions must be non-negative and finite, got {width}x{height}")]
    InvalidRectDimensions { width: f64, height: f64 },
}

/// Errors from validating carrier dimensions or film format parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A dimension that must be strictly positive was not.
    #[error("dimension '{name}' must be positive and finite, got {value}")]
    NonPositiveDimension { name: String, value: f64 },

    /// A parameter value is invalid for a non-range reason.
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// A film format was configured without a name.
    #[error("format name must not be empty")]
    EmptyName,
}

/// Unified error type for carrier generation.
#[derive(Error, Debug)]
pub enum CarrierError {
    /// A path primitive rejected its inputs.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Dimension or format parameters failed validation.
    #[error("parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// I/O error while reading a format file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A format file could not be parsed.
    #[error("format file error: {0}")]
    FormatFile(#[from] serde_json::Error),
}

/// Result type alias for carrier generation.
pub type CarrierResult<T> = Result<T, CarrierError>;
