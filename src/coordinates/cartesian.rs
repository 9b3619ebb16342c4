//! # Cartesian Coordinate System Module
//!
//! This module provides the 3D Cartesian point used as the linear half of the
//! globe model. Geographic points map onto it through a
//! [`ReferenceSphere`](super::sphere::ReferenceSphere).
//!
//! ## Coordinate System Convention
//!
//! Right-handed, centered on the reference sphere:
//! - **X-axis**: Points toward longitude 0, latitude 0
//! - **Y-axis**: Points toward longitude +π/2, latitude 0
//! - **Z-axis**: Points toward the north pole (latitude +π/2)
//!
//! ## Internal Storage
//!
//! Coordinates are stored as three `f64` values with no constraint at all.
//! Non-finite components are representable and flow through every operation
//! following IEEE-754 rules instead of being rejected.
//!
//! ## Examples
//!
//! ```rust
//! use globe::CartesianPoint;
//!
//! let a = CartesianPoint::new(1.0, 0.0, 0.0);
//! let b = CartesianPoint::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(a.distance(&b), 2f64.sqrt());
//! assert_eq!(a.cross(&b), CartesianPoint::new(0.0, 0.0, 1.0));
//! ```

use crate::coordinates::geographic::GeographicPoint;
use crate::coordinates::rotation::AxisRotation;
use crate::coordinates::sphere::ReferenceSphere;
use crate::errors::Result;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in 3D Euclidean space
///
/// A plain value type: construction does no validation, setters assign
/// directly, and only [`rotate`](CartesianPoint::rotate) can fail.
///
/// # Unit Vectors vs Position Vectors
///
/// The same type carries positions (meters from the sphere center when
/// produced by a conversion), directions such as a rotation axis, and the
/// results of vector products. The interpretation depends on context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    x: f64,
    y: f64,
    z: f64,
}

impl CartesianPoint {
    /// Creates a new Cartesian point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::CartesianPoint;
    ///
    /// let point = CartesianPoint::new(1.0, 2.0, 3.0);
    /// assert_eq!(point.x(), 1.0);
    /// assert_eq!(point.y(), 2.0);
    /// assert_eq!(point.z(), 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianPoint { x, y, z }
    }

    /// Returns the equivalent point of the given [`GeographicPoint`] on the
    /// default [`ReferenceSphere`]
    ///
    /// Use [`ReferenceSphere::to_cartesian`] to convert against any other
    /// radius.
    pub fn from_geographic(point: &GeographicPoint) -> Self {
        ReferenceSphere::default().to_cartesian(point)
    }

    /// X component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Sets the X component, with no validation
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Y component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Sets the Y component, with no validation
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Z component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Sets the Z component, with no validation
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Calculates the magnitude (length) of the position vector
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// Evaluated with nested `hypot` so that components near either end of
    /// the `f64` range neither overflow nor underflow when squared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::CartesianPoint;
    ///
    /// assert_eq!(CartesianPoint::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Returns a unit vector in the same direction, or `None` for the origin
    pub fn normalize(&self) -> Option<CartesianPoint> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Calculates the dot product with another point
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &CartesianPoint) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the Euclidean distance between self and the given point
    ///
    /// # Mathematical Formula
    ///
    /// `distance = sqrt((x₁-x₂)² + (y₁-y₂)² + (z₁-z₂)²)`
    ///
    /// The result is exactly symmetric, and zero only when both points
    /// coincide. A NaN component makes the result NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::CartesianPoint;
    ///
    /// let a = CartesianPoint::new(1.0, 2.0, 3.0);
    /// let b = CartesianPoint::new(4.0, 6.0, 3.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// assert_eq!(b.distance(&a), 5.0);
    /// ```
    pub fn distance(&self, other: &CartesianPoint) -> f64 {
        (*self - *other).magnitude()
    }

    /// Performs the cross product between self and the given point
    ///
    /// The result is perpendicular to both inputs, anti-commutative, and the
    /// zero vector whenever the inputs are parallel (or either is the origin).
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::CartesianPoint;
    ///
    /// let x_axis = CartesianPoint::new(1.0, 0.0, 0.0);
    /// let y_axis = CartesianPoint::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.cross(&y_axis), CartesianPoint::new(0.0, 0.0, 1.0));
    /// assert_eq!(y_axis.cross(&x_axis), CartesianPoint::new(0.0, 0.0, -1.0));
    /// ```
    pub fn cross(&self, other: &CartesianPoint) -> CartesianPoint {
        CartesianPoint {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Rotates self in theta radians about the line passing by the origin
    /// and the given axis point
    ///
    /// The rotation is an isometry about the origin: the distance to the
    /// origin and the distance to the axis line are preserved.
    ///
    /// # Errors
    ///
    /// [`GlobeError::DegenerateAxis`](crate::GlobeError::DegenerateAxis) when
    /// `axis` is the origin. Self is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use globe::CartesianPoint;
    /// use std::f64::consts::PI;
    ///
    /// let mut point = CartesianPoint::new(1.0, 0.0, 0.0);
    /// point.rotate(&CartesianPoint::new(0.0, 0.0, 1.0), PI).unwrap();
    /// assert!((point.x() + 1.0).abs() < 1e-15);
    /// assert!(point.y().abs() < 1e-15);
    /// ```
    pub fn rotate(&mut self, axis: &CartesianPoint, theta: f64) -> Result<()> {
        *self = self.rotated(axis, theta)?;
        Ok(())
    }

    /// Value-style [`rotate`](CartesianPoint::rotate): returns the rotated
    /// copy and leaves self as is
    pub fn rotated(&self, axis: &CartesianPoint, theta: f64) -> Result<CartesianPoint> {
        Ok(AxisRotation::new(axis, theta)?.apply(self))
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        CartesianPoint {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for CartesianPoint {
    fn from(vec: Vector3<f64>) -> Self {
        CartesianPoint::from_vector3(vec)
    }
}

impl From<CartesianPoint> for Vector3<f64> {
    fn from(point: CartesianPoint) -> Self {
        point.to_vector3()
    }
}

impl From<&GeographicPoint> for CartesianPoint {
    fn from(point: &GeographicPoint) -> Self {
        CartesianPoint::from_geographic(point)
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Component-wise vector algebra, delegated to nalgebra
impl std::ops::Add for CartesianPoint {
    type Output = CartesianPoint;

    fn add(self, other: CartesianPoint) -> CartesianPoint {
        (self.to_vector3() + other.to_vector3()).into()
    }
}

impl std::ops::Sub for CartesianPoint {
    type Output = CartesianPoint;

    fn sub(self, other: CartesianPoint) -> CartesianPoint {
        (self.to_vector3() - other.to_vector3()).into()
    }
}

impl std::ops::Neg for CartesianPoint {
    type Output = CartesianPoint;

    fn neg(self) -> CartesianPoint {
        (-self.to_vector3()).into()
    }
}

impl std::ops::Mul<f64> for CartesianPoint {
    type Output = CartesianPoint;

    fn mul(self, scalar: f64) -> CartesianPoint {
        (self.to_vector3() * scalar).into()
    }
}

impl std::ops::Div<f64> for CartesianPoint {
    type Output = CartesianPoint;

    fn div(self, scalar: f64) -> CartesianPoint {
        (self.to_vector3() / scalar).into()
    }
}
