//! # Reference Sphere Module
//!
//! The reference sphere is the single configuration value of the globe
//! model. Its radius `R` ties the two coordinate systems together: a
//! geographic point sits at a radial distance of `R + altitude` from the
//! origin, so every conversion depends on it entirely.
//!
//! ## Conversions
//!
//! Geographic to Cartesian, with `r = R + altitude`:
//! - `x = r * cos(latitude) * cos(longitude)`
//! - `y = r * cos(latitude) * sin(longitude)`
//! - `z = r * sin(latitude)`
//!
//! Cartesian to geographic, with `ρ = sqrt(x² + y² + z²)` (evaluated through
//! `hypot`, so no intermediate square overflows or underflows):
//! - `longitude = atan2(y, x)`
//! - `latitude = atan2(z, sqrt(x² + y²))`
//! - `altitude = ρ - R`
//!
//! The origin has no direction. It maps to longitude 0, latitude 0 and an
//! altitude of `-R`.
//!
//! ## Examples
//!
//! ```rust
//! use globe::{GeographicPoint, ReferenceSphere};
//!
//! let moon = ReferenceSphere::MOON;
//! let surface = GeographicPoint::new(0.0, 0.0, 0.0);
//! let cart = moon.to_cartesian(&surface);
//! assert_eq!(cart.x(), moon.radius());
//! ```

use crate::constants::{EARTH_RADIUS, MOON_RADIUS};
use crate::coordinates::cartesian::CartesianPoint;
use crate::coordinates::geographic::GeographicPoint;
use crate::errors::{GlobeError, Result};

/// Sphere that geographic altitudes are measured from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSphere {
    radius: f64,
}

impl ReferenceSphere {
    /// Earth's mean radius, the default sphere
    pub const EARTH: ReferenceSphere = ReferenceSphere {
        radius: EARTH_RADIUS,
    };

    /// Moon's mean radius
    pub const MOON: ReferenceSphere = ReferenceSphere {
        radius: MOON_RADIUS,
    };

    /// Creates a reference sphere with the given radius
    ///
    /// # Errors
    ///
    /// [`GlobeError::InvalidRadius`] unless the radius is finite and strictly
    /// positive.
    pub fn new(radius: f64) -> Result<Self> {
        if radius.is_finite() && radius > 0.0 {
            Ok(ReferenceSphere { radius })
        } else {
            Err(GlobeError::InvalidRadius(radius))
        }
    }

    /// Radius in meters
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Converts a geographic point into its Cartesian equivalent
    pub fn to_cartesian(&self, point: &GeographicPoint) -> CartesianPoint {
        let r = self.radius + point.altitude();
        let (sin_lat, cos_lat) = point.latitude().sin_cos();
        let (sin_lon, cos_lon) = point.longitude().sin_cos();

        CartesianPoint::new(r * cos_lat * cos_lon, r * cos_lat * sin_lon, r * sin_lat)
    }

    /// Converts a Cartesian point into its geographic equivalent
    ///
    /// The result goes through the usual normalization, so `atan2` returning
    /// exactly `+π` on the negative x half-axis still yields longitude `-π`.
    pub fn to_geographic(&self, point: &CartesianPoint) -> GeographicPoint {
        let (x, y, z) = (point.x(), point.y(), point.z());

        if x == 0.0 && y == 0.0 && z == 0.0 {
            return GeographicPoint::new(0.0, 0.0, -self.radius);
        }

        let r_xy = x.hypot(y);
        GeographicPoint::new(y.atan2(x), z.atan2(r_xy), r_xy.hypot(z) - self.radius)
    }

    /// Arc length between the projections of two points on this sphere's
    /// surface
    ///
    /// This is the great-circle angle scaled by the radius. Altitudes are
    /// ignored, as they are by [`GeographicPoint::distance`].
    pub fn surface_distance(&self, a: &GeographicPoint, b: &GeographicPoint) -> f64 {
        self.radius * a.distance(b)
    }

    /// Straight-line distance between two geographic points, altitude
    /// included
    pub fn linear_distance(&self, a: &GeographicPoint, b: &GeographicPoint) -> f64 {
        self.to_cartesian(a).distance(&self.to_cartesian(b))
    }
}

impl Default for ReferenceSphere {
    fn default() -> Self {
        ReferenceSphere::EARTH
    }
}
