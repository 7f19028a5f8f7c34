//! Binary wire layout for the low-latency channel.
//!
//! Every structure is a fixed sequence of big-endian scalars.  Nothing in the
//! stream identifies the layout, so encoder and decoder must share a
//! [`WireFormat`].
//!
//! # Layouts
//!
//! | Structure | Fields, in order |
//! |---|---|
//! | [`Transform3d`] | `tx ty tz qw qx qy qz` (f64 × 7) |
//! | [`PnpResult`] | `is_present` (bool), best, `best_reproj_err`, alt, `alt_reproj_err`, `ambiguity` |
//! | [`MultiTargetPnpResult`] | [`PnpResult`], then 32 fiducial-ID slots padded with the sentinel |
//! | [`PhotonTrackedTarget`] | yaw, pitch, area, skew (f64), `fiducial_id` (i32), best, alt, `pose_ambiguity`, 4 min-area-rect corners, detected corner count (u8) and corners |
//! | [`PhotonPipelineResult`] | latency in ms (f64), multi-target result (only in [`PipelineLayout::MultiTarget`]), target count (i8), targets |
//!
//! # Example
//!
//! ```rust
//! use photon_packet::WireFormat;
//! use photon_targeting::{PhotonPipelineResult, WireCodec};
//!
//! let format = WireFormat::default();
//! let result = PhotonPipelineResult::new(0.035, &[]).unwrap();
//! let packet = result.to_packet(&format).unwrap();
//! let back = PhotonPipelineResult::from_bytes(packet.as_bytes(), &format).unwrap();
//! assert_eq!(back, result);
//! ```

use photon_geometry::{Quaternion, Rotation3d, Transform3d, Translation3d};
use photon_packet::{
    BoundedVec, FiducialIdWidth, Packet, PipelineLayout, ReadPolicy, WireFormat, WireScalar,
};
use tracing::{trace, warn};

use crate::error::CodecError;
use crate::multi_target::{MAX_FIDUCIAL_IDS, MultiTargetPnpResult};
use crate::pipeline_result::{MAX_TARGETS, PhotonPipelineResult};
use crate::pnp_result::PnpResult;
use crate::tracked_target::{MAX_DETECTED_CORNERS, PhotonTrackedTarget, TargetCorner};

/// A structure with a fixed binary layout.
pub trait WireCodec: Sized {
    /// Append this value to `packet`.
    fn encode(&self, packet: &mut Packet, format: &WireFormat) -> Result<(), CodecError>;

    /// Read one value from `packet`'s read cursor.
    ///
    /// With `format.strict_length` unset, a truncated buffer decodes its
    /// missing bytes as zeros.
    fn decode(packet: &mut Packet, format: &WireFormat) -> Result<Self, CodecError>;

    /// Encode into a fresh packet.
    fn to_packet(&self, format: &WireFormat) -> Result<Packet, CodecError> {
        let mut packet = Packet::new();
        self.encode(&mut packet, format)?;
        Ok(packet)
    }

    /// Decode from a received buffer.
    fn from_bytes(bytes: &[u8], format: &WireFormat) -> Result<Self, CodecError> {
        Self::decode(&mut Packet::from(bytes), format)
    }
}

fn take<T: WireScalar>(packet: &mut Packet, policy: ReadPolicy) -> Result<T, CodecError> {
    Ok(packet.read_with(policy)?)
}

// ─────────────────────────────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────────────────────────────

impl WireCodec for Transform3d {
    fn encode(&self, packet: &mut Packet, _format: &WireFormat) -> Result<(), CodecError> {
        let q = self.rotation.quaternion();
        for value in [
            self.translation.x,
            self.translation.y,
            self.translation.z,
            q.w,
            q.x,
            q.y,
            q.z,
        ] {
            packet.write(value);
        }
        Ok(())
    }

    fn decode(packet: &mut Packet, format: &WireFormat) -> Result<Self, CodecError> {
        let policy = format.read_policy();
        let translation = Translation3d::new(
            take(packet, policy)?,
            take(packet, policy)?,
            take(packet, policy)?,
        );
        let q = Quaternion::new(
            take(packet, policy)?,
            take(packet, policy)?,
            take(packet, policy)?,
            take(packet, policy)?,
        );
        Ok(Self::new(translation, Rotation3d::new(q)))
    }
}

impl WireCodec for TargetCorner {
    fn encode(&self, packet: &mut Packet, _format: &WireFormat) -> Result<(), CodecError> {
        packet.write(self.x);
        packet.write(self.y);
        Ok(())
    }

    fn decode(packet: &mut Packet, format: &WireFormat) -> Result<Self, CodecError> {
        let policy = format.read_policy();
        Ok(Self::new(take(packet, policy)?, take(packet, policy)?))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pose estimates
// ─────────────────────────────────────────────────────────────────────────────

impl WireCodec for PnpResult {
    fn encode(&self, packet: &mut Packet, format: &WireFormat) -> Result<(), CodecError> {
        packet.write(self.is_present);
        self.best.encode(packet, format)?;
        packet.write(self.best_reproj_err);
        self.alt.encode(packet, format)?;
        packet.write(self.alt_reproj_err);
        packet.write(self.ambiguity);
        Ok(())
    }

    fn decode(packet: &mut Packet, format: &WireFormat) -> Result<Self, CodecError> {
        let policy = format.read_policy();
        Ok(Self {
            is_present: take(packet, policy)?,
            best: Transform3d::decode(packet, format)?,
            best_reproj_err: take(packet, policy)?,
            alt: Transform3d::decode(packet, format)?,
            alt_reproj_err: take(packet, policy)?,
            ambiguity: take(packet, policy)?,
        })
    }
}

impl WireCodec for MultiTargetPnpResult {
    fn encode(&self, packet: &mut Packet, format: &WireFormat) -> Result<(), CodecError> {
        self.estimated_pose.encode(packet, format)?;
        match format.fiducial_id_width {
            FiducialIdWidth::Wide => packet.write_sentinel_list(&self.fiducial_ids_used),
            FiducialIdWidth::Narrow => {
                let mut narrow: BoundedVec<i8, MAX_FIDUCIAL_IDS> = BoundedVec::new();
                for id in &self.fiducial_ids_used {
                    let slot = i8::try_from(*id).map_err(|_| CodecError::FiducialIdOutOfRange(*id))?;
                    narrow.push(slot)?;
                }
                packet.write_sentinel_list(&narrow);
            }
        }
        Ok(())
    }

    fn decode(packet: &mut Packet, format: &WireFormat) -> Result<Self, CodecError> {
        let policy = format.read_policy();
        let estimated_pose = PnpResult::decode(packet, format)?;
        let fiducial_ids_used = match format.fiducial_id_width {
            FiducialIdWidth::Wide => packet.read_sentinel_list::<i16, MAX_FIDUCIAL_IDS>(policy)?,
            FiducialIdWidth::Narrow => {
                let narrow = packet.read_sentinel_list::<i8, MAX_FIDUCIAL_IDS>(policy)?;
                let mut wide = BoundedVec::new();
                for id in &narrow {
                    wide.push(i16::from(*id))?;
                }
                wide
            }
        };
        Ok(Self {
            estimated_pose,
            fiducial_ids_used,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Targets
// ─────────────────────────────────────────────────────────────────────────────

impl WireCodec for PhotonTrackedTarget {
    fn encode(&self, packet: &mut Packet, format: &WireFormat) -> Result<(), CodecError> {
        packet.write(self.yaw);
        packet.write(self.pitch);
        packet.write(self.area);
        packet.write(self.skew);
        packet.write(self.fiducial_id);
        self.best_camera_to_target.encode(packet, format)?;
        self.alt_camera_to_target.encode(packet, format)?;
        packet.write(self.pose_ambiguity);

        for corner in &self.min_area_rect_corners {
            corner.encode(packet, format)?;
        }

        let count = u8::try_from(self.detected_corners.len()).map_err(|_| {
            CodecError::TooManyElements {
                what: "detected corners",
                count: self.detected_corners.len(),
                limit: u8::MAX as usize,
            }
        })?;
        packet.write(count);
        for corner in &self.detected_corners {
            corner.encode(packet, format)?;
        }
        Ok(())
    }

    fn decode(packet: &mut Packet, format: &WireFormat) -> Result<Self, CodecError> {
        let policy = format.read_policy();
        let yaw = take(packet, policy)?;
        let pitch = take(packet, policy)?;
        let area = take(packet, policy)?;
        let skew = take(packet, policy)?;
        let fiducial_id = take(packet, policy)?;
        let best_camera_to_target = Transform3d::decode(packet, format)?;
        let alt_camera_to_target = Transform3d::decode(packet, format)?;
        let pose_ambiguity = take(packet, policy)?;

        let mut min_area_rect_corners = [TargetCorner::default(); 4];
        for corner in &mut min_area_rect_corners {
            *corner = TargetCorner::decode(packet, format)?;
        }

        let count = usize::from(take::<u8>(packet, policy)?);
        if count > MAX_DETECTED_CORNERS && format.strict_length {
            return Err(CodecError::TooManyElements {
                what: "detected corners",
                count,
                limit: MAX_DETECTED_CORNERS,
            });
        }
        let mut detected_corners = BoundedVec::new();
        for i in 0..count {
            // Excess corners are still consumed to keep the cursor aligned.
            let corner = TargetCorner::decode(packet, format)?;
            if i < MAX_DETECTED_CORNERS {
                detected_corners.push(corner)?;
            }
        }
        if count > MAX_DETECTED_CORNERS {
            warn!(count, kept = MAX_DETECTED_CORNERS, "dropping excess detected corners");
        }

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
            detected_corners,
        })
    }
}

impl WireCodec for PhotonPipelineResult {
    fn encode(&self, packet: &mut Packet, format: &WireFormat) -> Result<(), CodecError> {
        packet.write(self.latency() * 1000.0);
        if format.pipeline_layout == PipelineLayout::MultiTarget {
            self.raw_multi_target_result().encode(packet, format)?;
        }

        let targets = self.targets();
        let count = i8::try_from(targets.len()).map_err(|_| CodecError::TooManyElements {
            what: "targets",
            count: targets.len(),
            limit: i8::MAX as usize,
        })?;
        packet.write(count);
        for target in targets {
            target.encode(packet, format)?;
        }

        trace!(
            layout = ?format.pipeline_layout,
            targets = targets.len(),
            bytes = packet.len(),
            "encoded pipeline result"
        );
        Ok(())
    }

    fn decode(packet: &mut Packet, format: &WireFormat) -> Result<Self, CodecError> {
        let policy = format.read_policy();
        let latency_ms: f64 = take(packet, policy)?;
        let multi_target_result = match format.pipeline_layout {
            PipelineLayout::MultiTarget => MultiTargetPnpResult::decode(packet, format)?,
            PipelineLayout::Legacy => MultiTargetPnpResult::default(),
        };

        // A negative count carries no targets.
        let count = usize::try_from(take::<i8>(packet, policy)?).unwrap_or(0);
        if count > MAX_TARGETS && format.strict_length {
            return Err(CodecError::TooManyElements {
                what: "targets",
                count,
                limit: MAX_TARGETS,
            });
        }
        let mut targets = BoundedVec::new();
        for i in 0..count {
            let target = PhotonTrackedTarget::decode(packet, format)?;
            if i < MAX_TARGETS {
                targets.push(target)?;
            }
        }
        if count > MAX_TARGETS {
            warn!(count, kept = MAX_TARGETS, "dropping excess targets");
        }

        trace!(
            layout = ?format.pipeline_layout,
            targets = targets.len(),
            remaining = packet.remaining(),
            "decoded pipeline result"
        );
        Ok(Self::from_parts(latency_ms / 1000.0, targets, multi_target_result))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use photon_packet::PacketError;

    /// Bytes in one encoded PnpResult: bool + 2 × (7 + 1) f64 + ambiguity.
    const PNP_RESULT_BYTES: usize = 1 + 8 * 17;

    fn transform(x: f64, y: f64, yaw: f64) -> Transform3d {
        Transform3d::new(
            Translation3d::new(x, y, 1.5),
            Rotation3d::from_euler(0.1, -0.2, yaw),
        )
    }

    fn corners() -> [TargetCorner; 4] {
        [
            TargetCorner::new(10.0, 20.0),
            TargetCorner::new(30.0, 20.0),
            TargetCorner::new(30.0, 40.0),
            TargetCorner::new(10.0, 40.0),
        ]
    }

    fn target(fiducial_id: i32, transform: Transform3d) -> PhotonTrackedTarget {
        PhotonTrackedTarget::new(
            -3.5,
            1.25,
            0.8,
            0.0,
            fiducial_id,
            transform,
            transform.inverse(),
            0.12,
            corners(),
            &corners()[..3],
        )
        .unwrap()
    }

    fn multi_target(ids: &[i16]) -> MultiTargetPnpResult {
        MultiTargetPnpResult::new(
            PnpResult::new(transform(1.0, 2.0, 0.3), 0.05, transform(1.1, 2.1, 0.2), 0.4, 0.125),
            ids,
        )
        .unwrap()
    }

    // ── Transform3d ────────────────────────────────────────────────────────

    #[test]
    fn transform_layout_is_translation_then_wxyz() -> Result<(), CodecError> {
        let t = Transform3d::new(Translation3d::new(1.0, 2.0, 3.0), Rotation3d::identity());
        let mut packet = t.to_packet(&WireFormat::default())?;
        assert_eq!(packet.len(), 7 * 8);
        let values: Vec<f64> = (0..7).map(|_| packet.read()).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0]);
        Ok(())
    }

    // ── PnpResult ───────────────────────────────────────────────────────────

    #[test]
    fn pnp_result_roundtrip() -> Result<(), CodecError> {
        let format = WireFormat::default();
        let result = PnpResult::new(transform(1.0, 2.0, 0.3), 0.05, transform(-1.0, 0.5, 1.0), 0.4, 0.125);
        let packet = result.to_packet(&format)?;
        assert_eq!(packet.len(), PNP_RESULT_BYTES);
        assert_eq!(packet.as_bytes()[0], 1);

        let back = PnpResult::from_bytes(packet.as_bytes(), &format)?;
        assert!(back.all_fields_eq(&result));
        Ok(())
    }

    #[test]
    fn absent_pnp_result_roundtrip() -> Result<(), CodecError> {
        let format = WireFormat::default();
        let packet = PnpResult::default().to_packet(&format)?;
        assert_eq!(packet.as_bytes()[0], 0);
        let back = PnpResult::from_bytes(packet.as_bytes(), &format)?;
        assert!(!back.is_present);
        assert_eq!(back, PnpResult::default());
        Ok(())
    }

    // ── MultiTargetPnpResult ────────────────────────────────────────────────

    #[test]
    fn multi_target_ids_roundtrip_in_order() -> Result<(), CodecError> {
        let format = WireFormat::default();
        let result = multi_target(&[1, 2, 3, 4]);
        let packet = result.to_packet(&format)?;
        assert_eq!(packet.len(), PNP_RESULT_BYTES + 2 * MAX_FIDUCIAL_IDS);

        let back = MultiTargetPnpResult::from_bytes(packet.as_bytes(), &format)?;
        assert_eq!(back.fiducial_ids_used.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(back, result);
        Ok(())
    }

    #[test]
    fn multi_target_full_capacity_roundtrip() -> Result<(), CodecError> {
        let format = WireFormat::default();
        let ids: Vec<i16> = (100..100 + MAX_FIDUCIAL_IDS as i16).collect();
        let result = multi_target(&ids);
        let back = MultiTargetPnpResult::from_bytes(result.to_packet(&format)?.as_bytes(), &format)?;
        assert_eq!(back.fiducial_ids_used.as_slice(), ids.as_slice());
        Ok(())
    }

    #[test]
    fn multi_target_narrow_ids() -> Result<(), CodecError> {
        let format = WireFormat {
            fiducial_id_width: FiducialIdWidth::Narrow,
            ..WireFormat::default()
        };
        let result = multi_target(&[0, 7, 127]);
        let packet = result.to_packet(&format)?;
        assert_eq!(packet.len(), PNP_RESULT_BYTES + MAX_FIDUCIAL_IDS);
        assert_eq!(packet.as_bytes()[PNP_RESULT_BYTES + 3], 0x80);

        let back = MultiTargetPnpResult::from_bytes(packet.as_bytes(), &format)?;
        assert_eq!(back.fiducial_ids_used.as_slice(), &[0, 7, 127]);
        Ok(())
    }

    #[test]
    fn narrow_ids_out_of_range_rejected() {
        let format = WireFormat {
            fiducial_id_width: FiducialIdWidth::Narrow,
            ..WireFormat::default()
        };
        let err = multi_target(&[300]).to_packet(&format).unwrap_err();
        assert!(matches!(err, CodecError::FiducialIdOutOfRange(300)));
    }

    #[test]
    fn wide_and_narrow_layouts_differ() -> Result<(), CodecError> {
        let wide = multi_target(&[5]).to_packet(&WireFormat::default())?;
        let narrow = multi_target(&[5]).to_packet(&WireFormat {
            fiducial_id_width: FiducialIdWidth::Narrow,
            ..WireFormat::default()
        })?;
        assert_ne!(wide, narrow);
        Ok(())
    }

    // ── PhotonTrackedTarget ─────────────────────────────────────────────────

    #[test]
    fn tracked_target_roundtrip() -> Result<(), CodecError> {
        let format = WireFormat::default();
        let t = target(7, transform(2.0, -1.0, 0.7));
        let packet = t.to_packet(&format)?;
        assert_eq!(packet.len(), 4 * 8 + 4 + 2 * 56 + 8 + 4 * 16 + 1 + 3 * 16);
        assert_eq!(packet.as_bytes()[4 * 8 + 4 + 2 * 56 + 8 + 4 * 16], 3);

        let back = PhotonTrackedTarget::from_bytes(packet.as_bytes(), &format)?;
        assert_eq!(back, t);
        assert_eq!(back.detected_corners.len(), 3);
        Ok(())
    }

    #[test]
    fn tracked_target_excess_corners_are_skipped() -> Result<(), CodecError> {
        let format = WireFormat::default();
        let t = target(1, transform(0.0, 0.0, 0.0));
        let mut packet = t.to_packet(&format)?;

        // Rewrite the tail with a corner count above the limit.
        let head = packet.len() - 1 - 3 * 16;
        let mut bytes = packet.as_bytes()[..head].to_vec();
        bytes.push((MAX_DETECTED_CORNERS + 2) as u8);
        for i in 0..MAX_DETECTED_CORNERS + 2 {
            bytes.extend_from_slice(&(i as f64).to_be_bytes());
            bytes.extend_from_slice(&(i as f64).to_be_bytes());
        }
        bytes.extend_from_slice(&42i32.to_be_bytes());
        packet = Packet::from(bytes);

        let back = PhotonTrackedTarget::decode(&mut packet, &format)?;
        assert_eq!(back.detected_corners.len(), MAX_DETECTED_CORNERS);
        assert_eq!(packet.read::<i32>(), 42);

        packet = Packet::from(&packet.as_bytes()[..]);
        let strict = PhotonTrackedTarget::decode(&mut packet, &format.strict());
        assert!(matches!(strict, Err(CodecError::TooManyElements { .. })));
        Ok(())
    }

    // ── PhotonPipelineResult ────────────────────────────────────────────────

    #[test]
    fn empty_pipeline_result_roundtrip() -> Result<(), CodecError> {
        for format in [WireFormat::default(), WireFormat::legacy()] {
            let result = PhotonPipelineResult::new(1.0, &[])?;
            let packet = result.to_packet(&format)?;
            let back = PhotonPipelineResult::from_bytes(packet.as_bytes(), &format)?;
            assert_eq!(back.latency(), 1.0);
            assert!(back.targets().is_empty());
            assert_eq!(back, result);
        }
        Ok(())
    }

    #[test]
    fn legacy_layout_bytes() -> Result<(), CodecError> {
        let result = PhotonPipelineResult::new(1.0, &[])?;
        let packet = result.to_packet(&WireFormat::legacy())?;
        // 1000 ms as f64, then a zero target count.
        assert_eq!(
            packet.as_bytes(),
            &[0x40, 0x8f, 0x40, 0, 0, 0, 0, 0, 0]
        );
        Ok(())
    }

    #[test]
    fn two_targets_roundtrip_in_order() -> Result<(), CodecError> {
        let first = target(1, transform(1.0, 0.0, 0.5));
        let second = target(-1, transform(0.0, 3.0, -0.5));

        for format in [WireFormat::default(), WireFormat::legacy()] {
            let result = PhotonPipelineResult::new(1.0, &[first, second])?;
            let packet = result.to_packet(&format)?;
            let back = PhotonPipelineResult::from_bytes(packet.as_bytes(), &format)?;

            assert_eq!(back.targets().len(), 2);
            assert_eq!(back.targets()[0].fiducial_id, 1);
            assert_eq!(back.targets()[1].fiducial_id, -1);
            assert_eq!(back.targets()[0].best_camera_to_target, first.best_camera_to_target);
            assert_eq!(back.targets()[1].best_camera_to_target, second.best_camera_to_target);
            assert_eq!(back, result);
        }
        Ok(())
    }

    #[test]
    fn multi_target_layout_carries_estimate() -> Result<(), CodecError> {
        let format = WireFormat::default();
        let result = PhotonPipelineResult::new(0.02, &[target(3, transform(1.0, 1.0, 0.0))])?
            .with_multi_target_result(multi_target(&[3, 8]));
        let back = PhotonPipelineResult::from_bytes(result.to_packet(&format)?.as_bytes(), &format)?;
        assert_eq!(back, result);
        let multi = back.multi_target_result().expect("multi-target result present");
        assert_eq!(multi.fiducial_ids_used.as_slice(), &[3, 8]);
        Ok(())
    }

    #[test]
    fn legacy_layout_drops_estimate() -> Result<(), CodecError> {
        let format = WireFormat::legacy();
        let result = PhotonPipelineResult::new(0.02, &[])?.with_multi_target_result(multi_target(&[3]));
        let back = PhotonPipelineResult::from_bytes(result.to_packet(&format)?.as_bytes(), &format)?;
        assert!(back.multi_target_result().is_none());
        Ok(())
    }

    #[test]
    fn layouts_are_not_interchangeable() -> Result<(), CodecError> {
        let result = PhotonPipelineResult::new(0.5, &[target(2, transform(1.0, 2.0, 0.1))])?;
        let packet = result.to_packet(&WireFormat::default())?;
        let misread = PhotonPipelineResult::from_bytes(packet.as_bytes(), &WireFormat::legacy())?;
        assert_ne!(misread, result);
        Ok(())
    }

    #[test]
    fn truncated_buffer_zero_fills_by_default() -> Result<(), CodecError> {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || -> Result<(), CodecError> {
            let format = WireFormat::legacy();
            let result = PhotonPipelineResult::new(0.5, &[target(2, transform(1.0, 2.0, 0.1))])?;
            let packet = result.to_packet(&format)?;
            let truncated = &packet.as_bytes()[..packet.len() - 20];

            let back = PhotonPipelineResult::from_bytes(truncated, &format)?;
            assert_eq!(back.targets().len(), 1);
            assert_ne!(back, result);
            Ok(())
        })
    }

    #[test]
    fn truncated_buffer_rejected_when_strict() -> Result<(), CodecError> {
        let format = WireFormat::legacy().strict();
        let result = PhotonPipelineResult::new(0.5, &[target(2, transform(1.0, 2.0, 0.1))])?;
        let packet = result.to_packet(&format)?;
        let truncated = &packet.as_bytes()[..packet.len() - 20];

        let err = PhotonPipelineResult::from_bytes(truncated, &format).unwrap_err();
        assert!(matches!(err, CodecError::Packet(PacketError::Truncated { .. })));
        Ok(())
    }

    #[test]
    fn empty_buffer_decodes_to_empty_result() -> Result<(), CodecError> {
        let back = PhotonPipelineResult::from_bytes(&[], &WireFormat::legacy())?;
        assert_eq!(back.latency(), 0.0);
        assert!(!back.has_targets());
        Ok(())
    }

    #[test]
    fn negative_target_count_means_no_targets() -> Result<(), CodecError> {
        let mut packet = Packet::new();
        packet.write(5.0f64);
        packet.write(-3i8);
        let back = PhotonPipelineResult::decode(&mut packet, &WireFormat::legacy())?;
        assert!(!back.has_targets());
        Ok(())
    }
}
