//! A single detected target.

use photon_geometry::Transform3d;
use photon_packet::{BoundedVec, PacketError};
use serde::{Deserialize, Serialize};

use crate::approx_eq;

/// Most detected corners kept per target.
pub const MAX_DETECTED_CORNERS: usize = 8;

/// A corner in image coordinates (pixels).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetCorner {
    pub x: f64,
    pub y: f64,
}

impl TargetCorner {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PartialEq for TargetCorner {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

/// Measurements for one target in one frame.
///
/// Angles are in degrees, positive up and to the right of the crosshair.
/// `area` is the percentage of the image the target covers.  The
/// camera-to-target transforms are only meaningful for fiducial targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotonTrackedTarget {
    pub yaw: f64,
    pub pitch: f64,
    pub area: f64,
    pub skew: f64,
    /// `-1` when the target is not a fiducial.
    pub fiducial_id: i32,
    pub best_camera_to_target: Transform3d,
    pub alt_camera_to_target: Transform3d,
    pub pose_ambiguity: f64,
    /// Corners of the minimum-area bounding rectangle.
    pub min_area_rect_corners: [TargetCorner; 4],
    /// Corners reported by the detector, in detection order.
    pub detected_corners: BoundedVec<TargetCorner, MAX_DETECTED_CORNERS>,
}

impl PhotonTrackedTarget {
    /// Fails if more than [`MAX_DETECTED_CORNERS`] detected corners are given.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        yaw: f64,
        pitch: f64,
        area: f64,
        skew: f64,
        fiducial_id: i32,
        best_camera_to_target: Transform3d,
        alt_camera_to_target: Transform3d,
        pose_ambiguity: f64,
        min_area_rect_corners: [TargetCorner; 4],
        detected_corners: &[TargetCorner],
    ) -> Result<Self, PacketError> {
        Ok(Self {
            yaw,
            pitch,
            area,
            skew,
            fiducial_id,
            best_camera_to_target,
            alt_camera_to_target,
            pose_ambiguity,
            min_area_rect_corners,
            detected_corners: BoundedVec::from_slice(detected_corners)?,
        })
    }

    pub fn is_fiducial(&self) -> bool {
        self.fiducial_id >= 0
    }
}
