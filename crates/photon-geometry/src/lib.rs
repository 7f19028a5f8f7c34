//! `photon-geometry` – Rigid-body algebra for camera-relative poses.
//!
//! Small value types used to describe where a fiducial target sits relative
//! to a camera, and to guarantee that those poses survive serialisation
//! unchanged.
//!
//! # Modules
//!
//! - [`quaternion`] – [`Quaternion`]: Hamilton product, conjugate inverse,
//!   normalisation and the log/exp maps to and from rotation vectors.
//! - [`rotation`] – [`Rotation3d`]: a unit quaternion treated as a 3-D
//!   orientation, with composition (`+`) and difference (`-`).
//! - [`translation`] – [`Translation3d`]: a displacement in metres with the
//!   usual vector algebra and rotation by conjugation.
//! - [`transform`] – [`Pose3d`] and [`Transform3d`]: absolute poses and the
//!   relative transforms between them.
//!
//! All equality comparisons are tolerance based; see [`EPSILON`].

pub mod quaternion;
pub mod rotation;
pub mod transform;
pub mod translation;

pub use quaternion::Quaternion;
pub use rotation::Rotation3d;
pub use transform::{Pose3d, Transform3d};
pub use translation::Translation3d;

/// Absolute tolerance used by every equality comparison in this crate.
pub const EPSILON: f64 = 1e-9;
