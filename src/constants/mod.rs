//! Constants module for spherical geometry

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Quarter circle, the latitude of the north pole
pub const HALF_PI: f64 = PI / 2.0;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Reference radii
/// Earth's mean radius in meters (IUGG)
pub const EARTH_RADIUS: f64 = 6_371_008.8;
/// Moon's mean radius in meters
pub const MOON_RADIUS: f64 = 1_737_400.0;
