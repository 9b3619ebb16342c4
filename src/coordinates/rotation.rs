//! # Axis-Angle Rotation Module
//!
//! Rotates Cartesian points about a line through the origin using the
//! Rodrigues rotation formula:
//!
//! ```text
//! v' = v·cosθ + (k × v)·sinθ + k·(k · v)·(1 − cosθ)
//! ```
//!
//! where `k` is the unit vector along the axis. The rotation follows the
//! right-hand rule: with the thumb pointing from the origin toward the axis
//! point, positive angles turn the fingers' way.
//!
//! The same operator backs [`CartesianPoint::rotate`]; building an
//! [`AxisRotation`] once is cheaper when many points share an axis.

use crate::coordinates::cartesian::CartesianPoint;
use crate::errors::{GlobeError, Result};
use log::debug;
use nalgebra::{Matrix3, Unit, Vector3};

/// Rotation by a fixed angle about a fixed axis through the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    axis: Unit<Vector3<f64>>,
    angle: f64,
    sin: f64,
    cos: f64,
}

impl AxisRotation {
    /// Creates a rotation of `theta` radians about the line through the
    /// origin and `axis`
    ///
    /// # Errors
    ///
    /// [`GlobeError::DegenerateAxis`] when `axis` is the origin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::{AxisRotation, CartesianPoint};
    /// use std::f64::consts::PI;
    ///
    /// let quarter_turn = AxisRotation::new(&CartesianPoint::new(0.0, 0.0, 5.0), PI / 2.0).unwrap();
    /// let rotated = quarter_turn.apply(&CartesianPoint::new(1.0, 0.0, 0.0));
    /// assert!(rotated.x().abs() < 1e-15);
    /// assert!((rotated.y() - 1.0).abs() < 1e-15);
    /// ```
    pub fn new(axis: &CartesianPoint, theta: f64) -> Result<Self> {
        let direction = axis.to_vector3();
        if direction == Vector3::zeros() {
            debug!("Rejected rotation of {} rad about {}", theta, axis);
            return Err(GlobeError::DegenerateAxis);
        }

        // Scale by the largest component first so tiny axes don't underflow
        let axis = Unit::new_normalize(direction / direction.amax());

        let (sin, cos) = theta.sin_cos();
        Ok(AxisRotation {
            axis,
            angle: theta,
            sin,
            cos,
        })
    }

    /// Unit vector along the rotation axis
    pub fn axis(&self) -> CartesianPoint {
        CartesianPoint::from_vector3(self.axis.into_inner())
    }

    /// Rotation angle in radians, as given at construction
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The rotation undoing this one
    pub fn inverse(&self) -> Self {
        AxisRotation {
            axis: self.axis,
            angle: -self.angle,
            sin: -self.sin,
            cos: self.cos,
        }
    }

    /// Applies the rotation to a point, returning the rotated point
    pub fn apply(&self, point: &CartesianPoint) -> CartesianPoint {
        let k = self.axis.into_inner();
        let v = point.to_vector3();

        let rotated = v * self.cos + k.cross(&v) * self.sin + k * (k.dot(&v) * (1.0 - self.cos));
        CartesianPoint::from_vector3(rotated)
    }

    /// Equivalent 3x3 rotation matrix
    ///
    /// `R = I·cosθ + [k]ₓ·sinθ + (k ⊗ k)·(1 − cosθ)`
    pub fn matrix(&self) -> Matrix3<f64> {
        let k = self.axis.into_inner();
        Matrix3::identity() * self.cos
            + k.cross_matrix() * self.sin
            + (k * k.transpose()) * (1.0 - self.cos)
    }
}
