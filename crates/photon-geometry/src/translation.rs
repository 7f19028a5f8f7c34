//! 3-D displacement in metres.

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;
use crate::rotation::Rotation3d;
use crate::EPSILON;

/// A point or displacement `(x, y, z)` in metres.
///
/// Two translations compare equal when every component is within
/// [`EPSILON`] metres.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Translation3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Translation3d {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).norm()
    }

    /// Rotate this vector by `rotation`: `p' = q p q⁻¹` with `p` embedded as
    /// the pure quaternion `(0, x, y, z)`.
    pub fn rotate_by(&self, rotation: Rotation3d) -> Self {
        let q = rotation.quaternion();
        let p = Quaternion::new(0.0, self.x, self.y, self.z);
        let rotated = q * p * q.inverse();
        Self::new(rotated.x, rotated.y, rotated.z)
    }
}

impl PartialEq for Translation3d {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }
}

impl Add for Translation3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Translation3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Translation3d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Translation3d {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Translation3d {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}
