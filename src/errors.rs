//! Error types for the globe crate
//!
//! Almost every operation here is a total numeric computation. Invalid
//! arithmetic propagates as NaN or infinity following IEEE-754 rules and is
//! never reported as an error. The variants below are the only conditions a
//! caller has to handle.

use thiserror::Error;

/// Main error type for globe operations
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GlobeError {
    /// The rotation axis is the origin, so it has no direction
    #[error("Degenerate rotation axis: the axis point is the origin")]
    DegenerateAxis,

    /// A reference sphere radius that is not finite or not strictly positive
    #[error("Invalid reference sphere radius: {0}")]
    InvalidRadius(f64),
}

/// Result type for globe operations
pub type Result<T> = std::result::Result<T, GlobeError>;
