//! Absolute poses and the rigid-body transforms between them.
//!
//! A [`Pose3d`] is a position plus orientation in some fixed frame.  A
//! [`Transform3d`] is the relative displacement and rotation that takes one
//! pose to another, expressed in the frame of the starting pose.
//!
//! # Example
//!
//! ```rust
//! use photon_geometry::{Pose3d, Rotation3d, Transform3d, Translation3d};
//!
//! let a = Pose3d::new(Translation3d::new(1.0, 0.0, 0.0), Rotation3d::identity());
//! let b = Pose3d::new(Translation3d::new(1.0, 2.0, 0.0), Rotation3d::from_euler(0.0, 0.0, 0.5));
//! let c = Pose3d::new(Translation3d::new(-3.0, 0.5, 1.0), Rotation3d::from_euler(0.2, 0.0, 0.0));
//!
//! let ab = Transform3d::between(a, b);
//! let bc = Transform3d::between(b, c);
//! assert_eq!(ab + bc, Transform3d::between(a, c));
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::rotation::Rotation3d;
use crate::translation::Translation3d;

// ────────────────────────────────────────────────────────────────────────────
// Transform3d
// ────────────────────────────────────────────────────────────────────────────

/// A rigid-body delta: translation followed by rotation.
///
/// Equal when both the translation and the rotation are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform3d {
    pub translation: Translation3d,
    pub rotation: Rotation3d,
}

impl Transform3d {
    /// Create a transform from a translation and rotation.
    pub fn new(translation: Translation3d, rotation: Rotation3d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// No translation, no rotation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// The transform that maps `initial` onto `last`.
    ///
    /// The world-frame displacement is rotated into `initial`'s local frame
    /// and the rotation is the difference of the two orientations.
    pub fn between(initial: Pose3d, last: Pose3d) -> Self {
        Self::new(
            (last.translation - initial.translation).rotate_by(-initial.rotation),
            last.rotation - initial.rotation,
        )
    }

    /// The transform that undoes this one.
    pub fn inverse(&self) -> Self {
        Self::new(
            (-self.translation).rotate_by(-self.rotation),
            -self.rotation,
        )
    }
}

impl Add for Transform3d {
    type Output = Self;

    /// Apply `self`, then `rhs`, starting from the origin.
    fn add(self, rhs: Self) -> Self {
        let origin = Pose3d::default();
        Self::between(origin, origin.transform_by(self).transform_by(rhs))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pose3d
// ────────────────────────────────────────────────────────────────────────────

/// An absolute position and orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose3d {
    pub translation: Translation3d,
    pub rotation: Rotation3d,
}

impl Pose3d {
    pub fn new(translation: Translation3d, rotation: Rotation3d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Move this pose by `transform`, expressed in the pose's own frame.
    pub fn transform_by(&self, transform: Transform3d) -> Self {
        Self::new(
            self.translation + transform.translation.rotate_by(self.rotation),
            transform.rotation + self.rotation,
        )
    }

    /// This pose expressed in the frame of `other`.
    pub fn relative_to(&self, other: Pose3d) -> Self {
        let t = Transform3d::between(other, *self);
        Self::new(t.translation, t.rotation)
    }
}

impl Add<Transform3d> for Pose3d {
    type Output = Self;

    fn add(self, rhs: Transform3d) -> Self {
        self.transform_by(rhs)
    }
}

impl Sub for Pose3d {
    type Output = Transform3d;

    /// The transform taking `rhs` to `self`.
    fn sub(self, rhs: Self) -> Transform3d {
        Transform3d::between(rhs, self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
