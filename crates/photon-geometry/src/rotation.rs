//! 3-D orientation backed by a unit quaternion.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;
use crate::EPSILON;

/// An orientation in 3-D space.
///
/// The wrapped quaternion is always normalised on construction.  `a + b`
/// applies `a` first and then `b` (in the extrinsic frame); `a - b` is the
/// rotation that takes `b` to `a`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rotation3d {
    q: Quaternion,
}

impl Rotation3d {
    /// Wrap `q`, normalising it first.
    pub fn new(q: Quaternion) -> Self {
        Self { q: q.normalize() }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    /// Rotation of `angle` radians about `axis`.  A zero axis yields the
    /// identity.
    pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Self {
        let norm = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if norm == 0.0 {
            return Self::identity();
        }
        let s = (angle / 2.0).sin() / norm;
        Self::new(Quaternion::new(
            (angle / 2.0).cos(),
            axis[0] * s,
            axis[1] * s,
            axis[2] * s,
        ))
    }

    /// Rotation from an axis-angle vector (see
    /// [`Quaternion::to_rotation_vector`]).
    pub fn from_rotation_vector(rvec: [f64; 3]) -> Self {
        Self::new(Quaternion::from_rotation_vector(rvec))
    }

    /// Extrinsic roll-pitch-yaw (X, then Y, then Z) in radians.
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sr, cr) = (roll / 2.0).sin_cos();
        let (sp, cp) = (pitch / 2.0).sin_cos();
        let (sy, cy) = (yaw / 2.0).sin_cos();

        Self::new(Quaternion::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        ))
    }

    /// The underlying unit quaternion.
    pub fn quaternion(&self) -> Quaternion {
        self.q
    }

    /// Counter-clockwise rotation about the X axis (roll), radians.
    pub fn x(&self) -> f64 {
        let Quaternion { w, x, y, z } = self.q;
        f64::atan2(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y))
    }

    /// Counter-clockwise rotation about the Y axis (pitch), radians.
    pub fn y(&self) -> f64 {
        let Quaternion { w, x, y, z } = self.q;
        let ratio = 2.0 * (w * y - z * x);
        if ratio.abs() >= 1.0 {
            std::f64::consts::FRAC_PI_2.copysign(ratio)
        } else {
            ratio.asin()
        }
    }

    /// Counter-clockwise rotation about the Z axis (yaw), radians.
    pub fn z(&self) -> f64 {
        let Quaternion { w, x, y, z } = self.q;
        f64::atan2(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z))
    }

    /// Rotation angle in radians, in `[0, 2π]`.
    pub fn angle(&self) -> f64 {
        let Quaternion { w, x, y, z } = self.q;
        2.0 * f64::atan2((x * x + y * y + z * z).sqrt(), w)
    }

    /// Apply `other` after `self`.
    pub fn rotate_by(&self, other: Rotation3d) -> Self {
        Self::new(other.q * self.q)
    }
}

impl PartialEq for Rotation3d {
    fn eq(&self, other: &Self) -> bool {
        (self.q.dot(&other.q).abs() - self.q.norm() * other.q.norm()).abs() < EPSILON
    }
}

impl From<Quaternion> for Rotation3d {
    fn from(q: Quaternion) -> Self {
        Self::new(q)
    }
}

impl Add for Rotation3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.rotate_by(rhs)
    }
}

impl Sub for Rotation3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for Rotation3d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.q.inverse())
    }
}
