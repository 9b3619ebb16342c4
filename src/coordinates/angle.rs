//! # Angle Normalization Module
//!
//! This module reduces raw angle inputs into the canonical ranges used by
//! [`GeographicPoint`](super::geographic::GeographicPoint):
//!
//! - **Longitude**: half-open range `[-π, +π)`. Both boundaries describe the
//!   same meridian, so `+π` is canonicalized to `-π`.
//! - **Latitude**: closed range `[-π/2, +π/2]`. The poles are valid values.
//!
//! ## Longitude wraparound
//!
//! Longitude reduction is a pure modular reduction, not a clamp. Overflowing
//! one boundary continues from the other one in the same direction, so
//! `π + ε` becomes `-π + ε`.
//!
//! ## Pole crossing
//!
//! Latitude is first reduced modulo `2π` into `[-π, +π)`. A reduced value past
//! a pole means the point went over that pole and is now descending on the
//! opposite meridian:
//!
//! - above `+π/2` the latitude becomes `π - reduced`
//! - below `-π/2` the latitude becomes `-π - reduced`
//!
//! and in both cases the longitude has to move by half a lap (`π`). The
//! normalizer reports that shift back to the caller instead of touching any
//! longitude itself.
//!
//! ## Examples
//!
//! ```rust
//! use globe::coordinates::angle::{normalize_latitude, normalize_longitude};
//! use std::f64::consts::PI;
//!
//! assert!((normalize_longitude(PI + 1.0) - (-PI + 1.0)).abs() < 1e-14);
//!
//! let (latitude, longitude_delta) = normalize_latitude(-5.0 * PI / 4.0);
//! assert!((latitude - PI / 4.0).abs() < 1e-14);
//! assert_eq!(longitude_delta, PI);
//! ```

use crate::constants::{HALF_PI, TAU};
use std::f64::consts::PI;

/// Reduces any angle modulo `2π` into `[-π, +π)`
///
/// Values already inside the range are returned untouched, so no precision
/// is lost on canonical inputs. NaN and infinite inputs yield NaN.
fn wrap_angle(raw: f64) -> f64 {
    if (-PI..PI).contains(&raw) {
        return raw;
    }

    let wrapped = (raw + PI).rem_euclid(TAU) - PI;

    // rem_euclid may round up to exactly TAU for inputs just below a
    // multiple of 2π, which lands on the excluded upper boundary.
    if wrapped >= PI {
        -PI
    } else {
        wrapped
    }
}

/// Normalizes a raw longitude (radians) into `[-π, +π)`
///
/// # Examples
///
/// ```rust
/// use globe::coordinates::angle::normalize_longitude;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalize_longitude(PI), -PI);
/// assert_eq!(normalize_longitude(0.5), 0.5);
/// ```
pub fn normalize_longitude(raw: f64) -> f64 {
    wrap_angle(raw)
}

/// Normalizes a raw latitude (radians) into `[-π/2, +π/2]`
///
/// Returns `(latitude, longitude_delta)`. The delta is `π` when the raw value
/// crossed a pole and `0` otherwise, including when the raw value is a whole
/// number of laps away from a valid latitude. Exactly one reflection is
/// applied per call.
///
/// The caller owns the coupled longitude: it must add the delta and run the
/// result back through [`normalize_longitude`].
pub fn normalize_latitude(raw: f64) -> (f64, f64) {
    let reduced = wrap_angle(raw);

    if reduced > HALF_PI {
        (PI - reduced, PI)
    } else if reduced < -HALF_PI {
        (-PI - reduced, PI)
    } else {
        (reduced, 0.0)
    }
}
