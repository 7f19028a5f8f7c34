//! `photon-targeting` – Vision pipeline results and their encodings.
//!
//! The structures a vision processor publishes for every frame, and the two
//! ways they leave the process.
//!
//! # Modules
//!
//! - [`pnp_result`] – [`PnpResult`]: a single-solution pose estimate with its
//!   ambiguous alternate.
//! - [`multi_target`] – [`MultiTargetPnpResult`]: a pose estimate solved from
//!   several fiducials at once, plus the IDs that contributed.
//! - [`tracked_target`] – [`PhotonTrackedTarget`] and [`TargetCorner`]: one
//!   detected target.
//! - [`pipeline_result`] – [`PhotonPipelineResult`]: everything seen in one
//!   processed frame.
//! - [`codec`] – [`WireCodec`]: the fixed big-endian layout used on the
//!   low-latency channel, driven by a
//!   [`WireFormat`][photon_packet::WireFormat].
//! - [`proto`] – [`ProtoStruct`][proto::ProtoStruct]: pack/unpack to
//!   protobuf messages for persistence and interop.  Not wire compatible with
//!   [`codec`].

pub mod codec;
pub mod error;
pub mod multi_target;
pub mod pipeline_result;
pub mod pnp_result;
pub mod proto;
pub mod tracked_target;

pub use codec::WireCodec;
pub use error::CodecError;
pub use multi_target::{MAX_FIDUCIAL_IDS, MultiTargetPnpResult};
pub use pipeline_result::{MAX_TARGETS, PhotonPipelineResult};
pub use pnp_result::PnpResult;
pub use proto::ProtoStruct;
pub use tracked_target::{MAX_DETECTED_CORNERS, PhotonTrackedTarget, TargetCorner};

/// Scalar equality with the same absolute tolerance as the geometry types.
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < photon_geometry::EPSILON
}
