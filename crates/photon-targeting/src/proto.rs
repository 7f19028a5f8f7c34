//! Protobuf encoding for persistence and interop.
//!
//! Each result structure maps to a schema-described message with named
//! fields.  Optional sub-structures are carried as optional messages rather
//! than the sentinel slots used by [`codec`][crate::codec]; the two encodings
//! are not wire compatible.
//!
//! Unpacking never fails on missing fields: an absent sub-message unpacks as
//! the default value, and collections longer than the in-memory capacity are
//! cut to fit.
//!
//! # Example
//!
//! ```rust
//! use photon_targeting::{PhotonPipelineResult, ProtoStruct};
//!
//! let result = PhotonPipelineResult::new(0.02, &[]).unwrap().with_timestamps(10, 20);
//! let bytes = result.to_proto_bytes();
//! let back = PhotonPipelineResult::from_proto_bytes(&bytes).unwrap();
//! assert_eq!(back, result);
//! assert_eq!(back.capture_timestamp_micros(), Some(10));
//! ```

use photon_geometry::{Quaternion, Rotation3d, Transform3d, Translation3d};
use photon_packet::BoundedVec;
use prost::Message;
use tracing::warn;

use crate::error::CodecError;
use crate::multi_target::{MAX_FIDUCIAL_IDS, MultiTargetPnpResult};
use crate::pipeline_result::{MAX_TARGETS, PhotonPipelineResult};
use crate::pnp_result::PnpResult;
use crate::tracked_target::{MAX_DETECTED_CORNERS, PhotonTrackedTarget, TargetCorner};

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ProtobufTranslation3d {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ProtobufQuaternion {
    #[prost(double, tag = "1")]
    pub w: f64,
    #[prost(double, tag = "2")]
    pub x: f64,
    #[prost(double, tag = "3")]
    pub y: f64,
    #[prost(double, tag = "4")]
    pub z: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ProtobufRotation3d {
    #[prost(message, optional, tag = "1")]
    pub q: ::core::option::Option<ProtobufQuaternion>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ProtobufTransform3d {
    #[prost(message, optional, tag = "1")]
    pub translation: ::core::option::Option<ProtobufTranslation3d>,
    #[prost(message, optional, tag = "2")]
    pub rotation: ::core::option::Option<ProtobufRotation3d>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ProtobufTargetCorner {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
}

/// A pose estimate.  Parents may also leave the field unset for an absent
/// estimate.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ProtobufPnpResult {
    #[prost(bool, tag = "1")]
    pub is_present: bool,
    #[prost(message, optional, tag = "2")]
    pub best: ::core::option::Option<ProtobufTransform3d>,
    #[prost(double, tag = "3")]
    pub best_reproj_err: f64,
    /// Unset when the solve had a single solution.
    #[prost(message, optional, tag = "4")]
    pub alt: ::core::option::Option<ProtobufTransform3d>,
    #[prost(double, optional, tag = "5")]
    pub alt_reproj_err: ::core::option::Option<f64>,
    #[prost(double, tag = "6")]
    pub ambiguity: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtobufMultiTargetPnpResult {
    #[prost(message, optional, tag = "1")]
    pub estimated_pose: ::core::option::Option<ProtobufPnpResult>,
    #[prost(int32, repeated, tag = "2")]
    pub fiducial_ids_used: ::prost::alloc::vec::Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtobufPhotonTrackedTarget {
    #[prost(double, tag = "1")]
    pub yaw: f64,
    #[prost(double, tag = "2")]
    pub pitch: f64,
    #[prost(double, tag = "3")]
    pub area: f64,
    #[prost(double, tag = "4")]
    pub skew: f64,
    #[prost(int32, tag = "5")]
    pub fiducial_id: i32,
    #[prost(message, optional, tag = "6")]
    pub best_camera_to_target: ::core::option::Option<ProtobufTransform3d>,
    #[prost(message, optional, tag = "7")]
    pub alt_camera_to_target: ::core::option::Option<ProtobufTransform3d>,
    #[prost(double, tag = "8")]
    pub pose_ambiguity: f64,
    #[prost(message, repeated, tag = "9")]
    pub min_area_rect_corners: ::prost::alloc::vec::Vec<ProtobufTargetCorner>,
    #[prost(message, repeated, tag = "10")]
    pub detected_corners: ::prost::alloc::vec::Vec<ProtobufTargetCorner>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtobufPhotonPipelineResult {
    #[prost(double, tag = "1")]
    pub latency_ms: f64,
    #[prost(message, repeated, tag = "2")]
    pub targets: ::prost::alloc::vec::Vec<ProtobufPhotonTrackedTarget>,
    #[prost(message, optional, tag = "3")]
    pub multi_target_result: ::core::option::Option<ProtobufMultiTargetPnpResult>,
    #[prost(int64, optional, tag = "5")]
    pub capture_timestamp_micros: ::core::option::Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub nt_publish_timestamp_micros: ::core::option::Option<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Pack / unpack
// ─────────────────────────────────────────────────────────────────────────────

/// A structure with a protobuf message counterpart.
pub trait ProtoStruct: Sized {
    type Message: Message + Default;

    /// Map this value onto its message.
    fn pack(&self) -> Self::Message;

    /// Rebuild a value from a message.  Missing fields take defaults.
    fn unpack(message: &Self::Message) -> Self;

    /// Pack and serialise.
    fn to_proto_bytes(&self) -> Vec<u8> {
        self.pack().encode_to_vec()
    }

    /// Parse and unpack.
    fn from_proto_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let message = Self::Message::decode(bytes)?;
        Ok(Self::unpack(&message))
    }
}

impl ProtoStruct for Transform3d {
    type Message = ProtobufTransform3d;

    fn pack(&self) -> Self::Message {
        let q = self.rotation.quaternion();
        ProtobufTransform3d {
            translation: Some(ProtobufTranslation3d {
                x: self.translation.x,
                y: self.translation.y,
                z: self.translation.z,
            }),
            rotation: Some(ProtobufRotation3d {
                q: Some(ProtobufQuaternion {
                    w: q.w,
                    x: q.x,
                    y: q.y,
                    z: q.z,
                }),
            }),
        }
    }

    fn unpack(message: &Self::Message) -> Self {
        let translation = message
            .translation
            .map(|t| Translation3d::new(t.x, t.y, t.z))
            .unwrap_or_default();
        let rotation = message
            .rotation
            .and_then(|r| r.q)
            .map(|q| Rotation3d::new(Quaternion::new(q.w, q.x, q.y, q.z)))
            .unwrap_or_default();
        Self::new(translation, rotation)
    }
}

impl ProtoStruct for TargetCorner {
    type Message = ProtobufTargetCorner;

    fn pack(&self) -> Self::Message {
        ProtobufTargetCorner {
            x: self.x,
            y: self.y,
        }
    }

    fn unpack(message: &Self::Message) -> Self {
        Self::new(message.x, message.y)
    }
}

fn unpack_transform(message: Option<&ProtobufTransform3d>) -> Transform3d {
    message.map(Transform3d::unpack).unwrap_or_default()
}

impl ProtoStruct for PnpResult {
    type Message = ProtobufPnpResult;

    fn pack(&self) -> Self::Message {
        ProtobufPnpResult {
            is_present: self.is_present,
            best: Some(self.best.pack()),
            best_reproj_err: self.best_reproj_err,
            alt: Some(self.alt.pack()),
            alt_reproj_err: Some(self.alt_reproj_err),
            ambiguity: self.ambiguity,
        }
    }

    /// Without an alternate, the best solution doubles as the alternate.
    fn unpack(message: &Self::Message) -> Self {
        if !message.is_present {
            return Self::default();
        }
        let best = unpack_transform(message.best.as_ref());
        let alt = message.alt.as_ref().map(Transform3d::unpack).unwrap_or(best);
        Self::new(
            best,
            message.best_reproj_err,
            alt,
            message.alt_reproj_err.unwrap_or(message.best_reproj_err),
            message.ambiguity,
        )
    }
}

impl ProtoStruct for MultiTargetPnpResult {
    type Message = ProtobufMultiTargetPnpResult;

    fn pack(&self) -> Self::Message {
        ProtobufMultiTargetPnpResult {
            estimated_pose: self
                .estimated_pose
                .is_present
                .then(|| self.estimated_pose.pack()),
            fiducial_ids_used: self.fiducial_ids_used.iter().map(|id| i32::from(*id)).collect(),
        }
    }

    fn unpack(message: &Self::Message) -> Self {
        let estimated_pose = message
            .estimated_pose
            .as_ref()
            .map(PnpResult::unpack)
            .unwrap_or_default();

        let mut fiducial_ids_used = BoundedVec::new();
        for id in &message.fiducial_ids_used {
            let Ok(id) = i16::try_from(*id) else {
                warn!(id, "fiducial id out of range, skipping");
                continue;
            };
            if fiducial_ids_used.push(id).is_err() {
                warn!(
                    count = message.fiducial_ids_used.len(),
                    kept = MAX_FIDUCIAL_IDS,
                    "dropping excess fiducial ids"
                );
                break;
            }
        }

        Self {
            estimated_pose,
            fiducial_ids_used,
        }
    }
}

impl ProtoStruct for PhotonTrackedTarget {
    type Message = ProtobufPhotonTrackedTarget;

    fn pack(&self) -> Self::Message {
        ProtobufPhotonTrackedTarget {
            yaw: self.yaw,
            pitch: self.pitch,
            area: self.area,
            skew: self.skew,
            fiducial_id: self.fiducial_id,
            best_camera_to_target: Some(self.best_camera_to_target.pack()),
            alt_camera_to_target: Some(self.alt_camera_to_target.pack()),
            pose_ambiguity: self.pose_ambiguity,
            min_area_rect_corners: self.min_area_rect_corners.iter().map(TargetCorner::pack).collect(),
            detected_corners: self.detected_corners.iter().map(TargetCorner::pack).collect(),
        }
    }

    fn unpack(message: &Self::Message) -> Self {
        let mut min_area_rect_corners = [TargetCorner::default(); 4];
        for (slot, corner) in min_area_rect_corners
            .iter_mut()
            .zip(&message.min_area_rect_corners)
        {
            *slot = TargetCorner::unpack(corner);
        }

        let mut detected_corners = BoundedVec::new();
        for corner in &message.detected_corners {
            if detected_corners.push(TargetCorner::unpack(corner)).is_err() {
                warn!(
                    count = message.detected_corners.len(),
                    kept = MAX_DETECTED_CORNERS,
                    "dropping excess detected corners"
                );
                break;
            }
        }

        Self {
            yaw: message.yaw,
            pitch: message.pitch,
            area: message.area,
            skew: message.skew,
            fiducial_id: message.fiducial_id,
            best_camera_to_target: unpack_transform(message.best_camera_to_target.as_ref()),
            alt_camera_to_target: unpack_transform(message.alt_camera_to_target.as_ref()),
            pose_ambiguity: message.pose_ambiguity,
            min_area_rect_corners,
            detected_corners,
        }
    }
}

impl ProtoStruct for PhotonPipelineResult {
    type Message = ProtobufPhotonPipelineResult;

    fn pack(&self) -> Self::Message {
        let multi = self.raw_multi_target_result();
        let carries_multi = multi.is_present() || !multi.fiducial_ids_used.is_empty();
        ProtobufPhotonPipelineResult {
            latency_ms: self.latency() * 1000.0,
            targets: self.targets().iter().map(PhotonTrackedTarget::pack).collect(),
            multi_target_result: carries_multi.then(|| multi.pack()),
            capture_timestamp_micros: self.capture_timestamp_micros(),
            nt_publish_timestamp_micros: self.publish_timestamp_micros(),
        }
    }

    fn unpack(message: &Self::Message) -> Self {
        let mut targets = BoundedVec::new();
        for target in &message.targets {
            if targets.push(PhotonTrackedTarget::unpack(target)).is_err() {
                warn!(
                    count = message.targets.len(),
                    kept = MAX_TARGETS,
                    "dropping excess targets"
                );
                break;
            }
        }

        let multi_target_result = message
            .multi_target_result
            .as_ref()
            .map(MultiTargetPnpResult::unpack)
            .unwrap_or_default();

        let mut result =
            PhotonPipelineResult::from_parts(message.latency_ms / 1000.0, targets, multi_target_result);
        result.set_timestamps(
            message.capture_timestamp_micros,
            message.nt_publish_timestamp_micros,
        );
        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
