//! Pose estimate solved jointly from several fiducial markers.

use photon_packet::{BoundedVec, PacketError};
use serde::{Deserialize, Serialize};

use crate::pnp_result::PnpResult;

/// Fixed number of fiducial-ID slots carried with a multi-target result.
pub const MAX_FIDUCIAL_IDS: usize = 32;

/// A camera pose estimated from every visible fiducial at once.
///
/// Fiducial IDs keep the order in which the solver used them.  Duplicates are
/// not rejected.  IDs must be non-negative: the wire encoding reserves
/// negative values as padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiTargetPnpResult {
    pub estimated_pose: PnpResult,
    pub fiducial_ids_used: BoundedVec<i16, MAX_FIDUCIAL_IDS>,
}

impl MultiTargetPnpResult {
    /// Fails if more than [`MAX_FIDUCIAL_IDS`] IDs are given.
    pub fn new(estimated_pose: PnpResult, fiducial_ids_used: &[i16]) -> Result<Self, PacketError> {
        Ok(Self {
            estimated_pose,
            fiducial_ids_used: BoundedVec::from_slice(fiducial_ids_used)?,
        })
    }

    pub fn is_present(&self) -> bool {
        self.estimated_pose.is_present
    }
}
