//! Quaternion arithmetic.
//!
//! A [`Quaternion`] is stored as a scalar part `w` and a vector part
//! `(x, y, z)`.  When used as a rotation it is expected to have unit length;
//! [`Quaternion::normalize`] restores that after accumulated arithmetic.
//!
//! # Example
//!
//! ```rust
//! use photon_geometry::Quaternion;
//!
//! let q = Quaternion::new(0.5f64.sqrt(), 0.0, 0.0, 0.5f64.sqrt());
//! let identity = q * q.inverse();
//! assert_eq!(identity, Quaternion::identity());
//! ```

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::EPSILON;

/// A quaternion `w + xi + yj + zk`.
///
/// Equality means "represents the same rotation": two quaternions compare
/// equal when `|q1 · q2|` matches `‖q1‖‖q2‖` within [`EPSILON`], so `q` and
/// `-q` are equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar part.
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Build a quaternion from explicit components.  No normalisation is
    /// applied.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length of all four components.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Length of the vector part only.
    fn vector_norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Negate the vector part.
    ///
    /// This is the conjugate, which equals the inverse only for unit
    /// quaternions; normalise first if a true inverse is required.
    pub fn inverse(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scale to unit length.  A zero quaternion normalises to the identity.
    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            Self::identity()
        } else {
            Self::new(self.w / norm, self.x / norm, self.y / norm, self.z / norm)
        }
    }

    /// Log map: the axis-angle vector whose direction is the rotation axis and
    /// whose length is the rotation angle in radians.
    ///
    /// Near zero rotation the exact formula divides by `‖v‖`, so a
    /// second-order Taylor expansion is used instead.  For `w < 0` both
    /// `atan2` arguments are negated to keep the angle on the shortest path.
    pub fn to_rotation_vector(&self) -> [f64; 3] {
        let norm = self.vector_norm();

        let scale = if norm < 1e-9 {
            2.0 / self.w - 2.0 / 3.0 * norm * norm / (self.w * self.w * self.w)
        } else if self.w < 0.0 {
            2.0 * f64::atan2(-norm, -self.w) / norm
        } else {
            2.0 * f64::atan2(norm, self.w) / norm
        };

        [scale * self.x, scale * self.y, scale * self.z]
    }

    /// Exp map: the unit quaternion rotating by `|rvec|` radians about
    /// `rvec`.
    pub fn from_rotation_vector(rvec: [f64; 3]) -> Self {
        let [x, y, z] = rvec;
        let theta = (x * x + y * y + z * z).sqrt();
        let half = theta / 2.0;

        // sin(θ/2) / θ, expanded around zero.
        let axial = if theta < 1e-9 {
            0.5 - theta * theta / 48.0
        } else {
            half.sin() / theta
        };

        Self::new(half.cos(), axial * x, axial * y, axial * z)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        (self.dot(other).abs() - self.norm() * other.norm()).abs() < EPSILON
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product written with vector terms:
    /// `r = r1 r2 - v1·v2`, `v = r1 v2 + r2 v1 + v1 × v2`.
    fn mul(self, rhs: Self) -> Self {
        let (r1, r2) = (self.w, rhs.w);
        let v1 = [self.x, self.y, self.z];
        let v2 = [rhs.x, rhs.y, rhs.z];

        let dot = v1[0] * v2[0] + v1[1] * v2[1] + v1[2] * v2[2];
        let cross = [
            v1[1] * v2[2] - v2[1] * v1[2],
            v2[0] * v1[2] - v1[0] * v2[2],
            v1[0] * v2[1] - v2[0] * v1[1],
        ];

        Self::new(
            r1 * r2 - dot,
            r1 * v2[0] + r2 * v1[0] + cross[0],
            r1 * v2[1] + r2 * v1[1] + cross[1],
            r1 * v2[2] + r2 * v1[2] + cross[2],
        )
    }
}
