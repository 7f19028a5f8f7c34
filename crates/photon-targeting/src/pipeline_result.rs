//! Everything a pipeline produced for one processed frame.

use photon_packet::BoundedVec;
use serde::{Deserialize, Serialize};

use crate::approx_eq;
use crate::error::CodecError;
use crate::multi_target::MultiTargetPnpResult;
use crate::tracked_target::PhotonTrackedTarget;

/// Most targets carried in a single result.
pub const MAX_TARGETS: usize = 10;

/// The result of processing one camera frame.
///
/// Capture and publish timestamps are stamped by whoever handles the
/// result; they are not part of the binary wire layout and do not take part
/// in equality.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PhotonPipelineResult {
    /// Processing latency in seconds.
    latency: f64,
    targets: BoundedVec<PhotonTrackedTarget, MAX_TARGETS>,
    multi_target_result: MultiTargetPnpResult,
    capture_timestamp_micros: Option<i64>,
    publish_timestamp_micros: Option<i64>,
}

impl PhotonPipelineResult {
    /// A result with no multi-target estimate.
    ///
    /// Fails if more than [`MAX_TARGETS`] targets are given.
    pub fn new(latency: f64, targets: &[PhotonTrackedTarget]) -> Result<Self, CodecError> {
        if targets.len() > MAX_TARGETS {
            return Err(CodecError::TooManyElements {
                what: "targets",
                count: targets.len(),
                limit: MAX_TARGETS,
            });
        }
        Ok(Self {
            latency,
            targets: BoundedVec::from_slice(targets)?,
            ..Self::default()
        })
    }

    pub(crate) fn from_parts(
        latency: f64,
        targets: BoundedVec<PhotonTrackedTarget, MAX_TARGETS>,
        multi_target_result: MultiTargetPnpResult,
    ) -> Self {
        Self {
            latency,
            targets,
            multi_target_result,
            ..Self::default()
        }
    }

    /// Attach a multi-target estimate.
    pub fn with_multi_target_result(self, multi_target_result: MultiTargetPnpResult) -> Self {
        Self {
            multi_target_result,
            ..self
        }
    }

    /// Stamp the capture and publish times, in microseconds.
    pub fn with_timestamps(self, capture_micros: i64, publish_micros: i64) -> Self {
        Self {
            capture_timestamp_micros: Some(capture_micros),
            publish_timestamp_micros: Some(publish_micros),
            ..self
        }
    }

    pub(crate) fn set_timestamps(&mut self, capture: Option<i64>, publish: Option<i64>) {
        self.capture_timestamp_micros = capture;
        self.publish_timestamp_micros = publish;
    }

    /// Processing latency in seconds.
    pub fn latency(&self) -> f64 {
        self.latency
    }

    pub fn targets(&self) -> &[PhotonTrackedTarget] {
        self.targets.as_slice()
    }

    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }

    /// The first target, which the pipeline sorts to be the best.
    pub fn best_target(&self) -> Option<&PhotonTrackedTarget> {
        self.targets.first()
    }

    /// The multi-target estimate, if one was solved for this frame.
    pub fn multi_target_result(&self) -> Option<&MultiTargetPnpResult> {
        self.multi_target_result
            .is_present()
            .then_some(&self.multi_target_result)
    }

    /// The multi-target field as carried on the wire, present or not.
    pub fn raw_multi_target_result(&self) -> &MultiTargetPnpResult {
        &self.multi_target_result
    }

    pub fn capture_timestamp_micros(&self) -> Option<i64> {
        self.capture_timestamp_micros
    }

    pub fn publish_timestamp_micros(&self) -> Option<i64> {
        self.publish_timestamp_micros
    }

    /// Best guess at when the frame was captured, given the time (seconds)
    /// the result was received: the stamped capture time when present,
    /// otherwise `receive_time` minus the processing latency.
    pub fn estimated_capture_time(&self, receive_time: f64) -> f64 {
        match self.capture_timestamp_micros {
            Some(micros) => micros as f64 / 1e6,
            None => receive_time - self.latency,
        }
    }
}

impl PartialEq for PhotonPipelineResult {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.latency, other.latency)
            && self.targets == other.targets
            && self.multi_target_result == other.multi_target_result
    }
}
