//! Globe: points on and above a sphere, in Cartesian and geographic form
//!
//! This crate models two interchangeable views of a position relative to a
//! reference sphere:
//!
//! - [`CartesianPoint`]: `(x, y, z)` in a right-handed frame centered on the
//!   sphere, with distance, cross product and axis rotation.
//! - [`GeographicPoint`]: `(longitude, latitude, altitude)` kept normalized to
//!   `[-π, +π)` and `[-π/2, +π/2]`, with great-circle distance.
//!
//! Conversions between both go through a [`ReferenceSphere`], which carries
//! the radius that altitudes are measured from.
//!
//! Everything here is a synchronous computation on plain values. The only
//! failure is a rotation about the origin ([`GlobeError::DegenerateAxis`]);
//! invalid arithmetic propagates as NaN or infinity.

pub mod constants;
pub mod coordinates;
pub mod errors;

// Re-export commonly used types
pub use coordinates::{AxisRotation, CartesianPoint, GeographicPoint, ReferenceSphere};
pub use errors::{GlobeError, Result};
