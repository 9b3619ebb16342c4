//! # Geographic Coordinate System Module
//!
//! This module provides the spherical half of the globe model: a point given
//! by longitude, latitude and altitude over a
//! [`ReferenceSphere`](super::sphere::ReferenceSphere).
//!
//! ## Invariants
//!
//! After construction and after every mutation:
//! - longitude is in `[-π, +π)`
//! - latitude is in `[-π/2, +π/2]`
//! - altitude is unconstrained (negative values lie below the sphere surface)
//!
//! All angle mutations run through the normalizer in
//! [`angle`](super::angle). Longitude and latitude are coupled: pushing the
//! latitude over a pole moves the point onto the opposite meridian, which
//! shifts the longitude by `π`.
//!
//! ## Examples
//!
//! ```rust
//! use globe::GeographicPoint;
//! use std::f64::consts::PI;
//!
//! let mut point = GeographicPoint::default();
//! point.set_latitude(-5.0 * PI / 4.0);
//! assert!((point.latitude() - PI / 4.0).abs() < 1e-14);
//! assert!((point.longitude() - (-PI)).abs() < 1e-14);
//! ```

use crate::constants::{DEG2RAD, HALF_PI, RAD2DEG};
use crate::coordinates::angle::{normalize_latitude, normalize_longitude};
use crate::coordinates::cartesian::CartesianPoint;
use crate::coordinates::sphere::ReferenceSphere;
use log::trace;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Point on or above a sphere, in radians and sphere units
///
/// Fields are only reachable through the setters, which keep the longitude
/// and latitude normalized. The default value is the intersection of the
/// prime meridian and the equator, on the sphere surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "GeographicFields")]
pub struct GeographicPoint {
    longitude: f64,
    latitude: f64,
    altitude: f64,
}

/// Raw serialized form; deserializing goes through [`GeographicPoint::new`]
#[derive(Deserialize)]
struct GeographicFields {
    longitude: f64,
    latitude: f64,
    altitude: f64,
}

impl From<GeographicFields> for GeographicPoint {
    fn from(fields: GeographicFields) -> Self {
        GeographicPoint::new(fields.longitude, fields.latitude, fields.altitude)
    }
}

impl GeographicPoint {
    /// Creates a geographic point, normalizing longitude and latitude
    ///
    /// The longitude is set first, so a latitude past a pole flips the
    /// already normalized longitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::GeographicPoint;
    /// use std::f64::consts::PI;
    ///
    /// // Three quarters up from the equator is a quarter past the north pole
    /// let point = GeographicPoint::new(0.0, 3.0 * PI / 4.0, 100.0);
    /// assert!((point.latitude() - PI / 4.0).abs() < 1e-14);
    /// assert_eq!(point.longitude(), -PI);
    /// assert_eq!(point.altitude(), 100.0);
    /// ```
    pub fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        let mut point = GeographicPoint {
            longitude: 0.0,
            latitude: 0.0,
            altitude,
        };
        point.set_longitude(longitude);
        point.set_latitude(latitude);
        point
    }

    /// Creates a geographic point from longitude and latitude in degrees
    pub fn from_degrees(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self::new(longitude * DEG2RAD, latitude * DEG2RAD, altitude)
    }

    /// Returns the equivalent point of the given [`CartesianPoint`] on the
    /// default [`ReferenceSphere`]
    pub fn from_cartesian(point: &CartesianPoint) -> Self {
        ReferenceSphere::default().to_geographic(point)
    }

    /// Calls [`set_longitude`](Self::set_longitude) on a copy and returns it
    pub fn with_longitude(mut self, value: f64) -> Self {
        self.set_longitude(value);
        self
    }

    /// Calls [`set_latitude`](Self::set_latitude) on a copy and returns it
    pub fn with_latitude(mut self, value: f64) -> Self {
        self.set_latitude(value);
        self
    }

    /// Calls [`set_altitude`](Self::set_altitude) on a copy and returns it
    pub fn with_altitude(mut self, value: f64) -> Self {
        self.set_altitude(value);
        self
    }

    /// Sets the given longitude (in radians)
    ///
    /// Any value outside `[-π, +π)` is replaced by its equivalent inside the
    /// range. Both boundaries are consecutive, so overflowing one continues
    /// from the other in the same direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::GeographicPoint;
    /// use std::f64::consts::PI;
    ///
    /// let mut point = GeographicPoint::default();
    /// point.set_longitude(PI + 1.0);
    /// assert!((point.longitude() - (-PI + 1.0)).abs() < 1e-14);
    /// ```
    pub fn set_longitude(&mut self, value: f64) {
        self.longitude = normalize_longitude(value);
    }

    /// Sets the given latitude (in radians)
    ///
    /// Any value outside `[-π/2, +π/2]` is replaced by its equivalent inside
    /// the range. Overflowing a pole means moving away from it on the other
    /// half of the meridian circle, so the longitude is shifted by `π`. A
    /// change of whole laps leaves the longitude untouched.
    pub fn set_latitude(&mut self, value: f64) {
        let (latitude, longitude_delta) = normalize_latitude(value);
        self.latitude = latitude;

        if longitude_delta != 0.0 {
            trace!(
                "Latitude {} crossed a pole, flipping longitude {}",
                value,
                self.longitude
            );
            self.longitude = normalize_longitude(self.longitude + longitude_delta);
        }
    }

    /// Sets the given altitude, without any normalization
    pub fn set_altitude(&mut self, value: f64) {
        self.altitude = value;
    }

    /// Longitude in radians, in `[-π, +π)`
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians, in `[-π/2, +π/2]`
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Altitude above the reference sphere, unconstrained
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Longitude in degrees, in `[-180, 180)`
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude * RAD2DEG
    }

    /// Latitude in degrees, in `[-90, 90]`
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude * RAD2DEG
    }

    /// Longitude divided by `π`, in `[-1.0, 1.0)`
    pub fn long_ratio(&self) -> f64 {
        self.longitude / PI
    }

    /// Latitude divided by `π/2`, in `[-1.0, 1.0]`
    pub fn lat_ratio(&self) -> f64 {
        self.latitude / HALF_PI
    }

    /// Computes the great-circle distance from self to the given point (in
    /// radians)
    ///
    /// This is the central angle between both directions, so altitude plays
    /// no part. It uses the Vincenty form of the central angle, which stays
    /// accurate for nearly coincident and nearly antipodal points:
    ///
    /// ```text
    /// Δσ = atan2(sqrt((cosφ₂·sinΔλ)² + (cosφ₁·sinφ₂ − sinφ₁·cosφ₂·cosΔλ)²),
    ///            sinφ₁·sinφ₂ + cosφ₁·cosφ₂·cosΔλ)
    /// ```
    ///
    /// The result lies in `[0, π]` and is exactly symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::GeographicPoint;
    /// use std::f64::consts::PI;
    ///
    /// let a = GeographicPoint::new(0.0, 0.0, 0.0);
    /// let b = GeographicPoint::new(PI, 0.0, 0.0);
    /// assert!((a.distance(&b) - PI).abs() < 1e-15);
    /// assert_eq!(a.distance(&a), 0.0);
    /// ```
    pub fn distance(&self, other: &GeographicPoint) -> f64 {
        // Evaluate in a fixed order so that swapping arguments can't change
        // the rounding
        let self_first = self
            .latitude
            .total_cmp(&other.latitude)
            .then(self.longitude.total_cmp(&other.longitude))
            .is_le();
        let (a, b) = if self_first {
            (self, other)
        } else {
            (other, self)
        };

        let (sin_a, cos_a) = a.latitude.sin_cos();
        let (sin_b, cos_b) = b.latitude.sin_cos();
        let (sin_dl, cos_dl) = (b.longitude - a.longitude).sin_cos();

        let east = cos_b * sin_dl;
        let north = cos_a * sin_b - sin_a * cos_b * cos_dl;
        let numerator = (east * east + north * north).sqrt();
        let denominator = sin_a * sin_b + cos_a * cos_b * cos_dl;

        numerator.atan2(denominator)
    }
}

impl From<&CartesianPoint> for GeographicPoint {
    fn from(point: &CartesianPoint) -> Self {
        GeographicPoint::from_cartesian(point)
    }
}

impl fmt::Display for GeographicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lon {}, lat {}, alt {})",
            self.longitude, self.latitude, self.altitude
        )
    }
}
