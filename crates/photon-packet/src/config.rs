//! Wire format configuration.
//!
//! The binary stream carries no version tag, so producer and consumer must
//! agree on the layout out of band.  [`WireFormat`] captures every choice a
//! decoder needs up front.  It can be loaded from a TOML file such as:
//!
//! ```toml
//! pipeline_layout = "multi_target"
//! fiducial_id_width = "wide"
//! strict_length = false
//! ```
//!
//! and then adjusted with `PHOTON_*` environment variables (see
//! [`apply_env_overrides`]).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::packet::ReadPolicy;

/// Errors raised while loading or saving a [`WireFormat`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access wire format config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse wire format config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize wire format config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Field order of an encoded pipeline result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineLayout {
    /// `latency, target count, targets`.
    Legacy,
    /// `latency, multi-target result, target count, targets`.
    #[default]
    MultiTarget,
}

impl std::str::FromStr for PipelineLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "multi_target" | "multitarget" => Ok(Self::MultiTarget),
            other => Err(format!("unknown pipeline layout: {other}")),
        }
    }
}

/// Slot width of the fiducial-ID list inside a multi-target result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiducialIdWidth {
    /// `i8` slots padded with `-128`.
    Narrow,
    /// `i16` slots padded with `-1`.
    #[default]
    Wide,
}

impl std::str::FromStr for FiducialIdWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "narrow" | "i8" => Ok(Self::Narrow),
            "wide" | "i16" => Ok(Self::Wide),
            other => Err(format!("unknown fiducial id width: {other}")),
        }
    }
}

/// Layout choices shared by an encoder and its decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireFormat {
    #[serde(default)]
    pub pipeline_layout: PipelineLayout,

    #[serde(default)]
    pub fiducial_id_width: FiducialIdWidth,

    /// Reject truncated buffers instead of zero-filling missing bytes.
    #[serde(default)]
    pub strict_length: bool,
}

impl WireFormat {
    /// The pre-multi-target layout with wide fiducial IDs.
    pub fn legacy() -> Self {
        Self {
            pipeline_layout: PipelineLayout::Legacy,
            ..Self::default()
        }
    }

    /// Same layout, but truncated buffers are reported as errors.
    pub fn strict(self) -> Self {
        Self {
            strict_length: true,
            ..self
        }
    }

    /// The packet read policy implied by `strict_length`.
    pub fn read_policy(&self) -> ReadPolicy {
        if self.strict_length {
            ReadPolicy::Strict
        } else {
            ReadPolicy::ZeroFill
        }
    }
}

/// Load a wire format from `path`, then apply environment overrides.
///
/// Returns `None` if the file does not exist.
pub fn load_from(path: &Path) -> Result<Option<WireFormat>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut format: WireFormat = toml::from_str(&raw)?;
    apply_env_overrides(&mut format);
    debug!(?format, path = %path.display(), "loaded wire format");
    Ok(Some(format))
}

/// Write `format` to `path` as TOML, creating parent directories.
pub fn save_to(format: &WireFormat, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let raw = toml::to_string_pretty(format)?;
    fs::write(path, raw).map_err(io_err)
}

/// Apply `PHOTON_*` environment variable overrides to `format`.
///
/// | Variable | Field | Values |
/// |---|---|---|
/// | `PHOTON_PIPELINE_LAYOUT` | `pipeline_layout` | `legacy`, `multi_target` |
/// | `PHOTON_FIDUCIAL_ID_WIDTH` | `fiducial_id_width` | `narrow`, `wide` |
/// | `PHOTON_STRICT_LENGTH` | `strict_length` | `true`, `false` |
///
/// Unparseable values are ignored.
pub fn apply_env_overrides(format: &mut WireFormat) {
    if let Ok(v) = std::env::var("PHOTON_PIPELINE_LAYOUT")
        && let Ok(layout) = v.parse() {
            format.pipeline_layout = layout;
        }
    if let Ok(v) = std::env::var("PHOTON_FIDUCIAL_ID_WIDTH")
        && let Ok(width) = v.parse() {
            format.fiducial_id_width = width;
        }
    if let Ok(v) = std::env::var("PHOTON_STRICT_LENGTH")
        && let Ok(strict) = v.parse::<bool>() {
            format.strict_length = strict;
        }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_multi_target_wide_permissive() {
        let format = WireFormat::default();
        assert_eq!(format.pipeline_layout, PipelineLayout::MultiTarget);
        assert_eq!(format.fiducial_id_width, FiducialIdWidth::Wide);
        assert!(!format.strict_length);
        assert_eq!(format.read_policy(), ReadPolicy::ZeroFill);
        assert_eq!(format.strict().read_policy(), ReadPolicy::Strict);
    }

    #[test]
    fn roundtrip_through_file() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("photon").join("wire.toml");

        let format = WireFormat {
            pipeline_layout: PipelineLayout::Legacy,
            fiducial_id_width: FiducialIdWidth::Narrow,
            strict_length: true,
        };
        save_to(&format, &path).expect("save");

        let loaded = load_from(&path).expect("load ok").expect("some");
        assert_eq!(loaded, format);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let format: WireFormat = toml::from_str("strict_length = true").expect("parse");
        assert_eq!(format.pipeline_layout, PipelineLayout::MultiTarget);
        assert!(format.strict_length);
    }

    #[test]
    fn load_from_returns_none_when_missing() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let result = load_from(&dir.path().join("absent.toml")).expect("no error");
        assert!(result.is_none());
    }

    #[test]
    fn load_from_rejects_unknown_layout() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "pipeline_layout = \"sideways\"").expect("write");
        assert!(matches!(load_from(&path), Err(ConfigError::Parse(_))));
    }

    // All environment mutation lives in one test so parallel tests never
    // observe a half-applied override.
    #[test]
    fn apply_env_overrides_sets_and_ignores() {
        // SAFETY: only this test touches PHOTON_* variables.
        unsafe {
            std::env::set_var("PHOTON_PIPELINE_LAYOUT", "legacy");
            std::env::set_var("PHOTON_FIDUCIAL_ID_WIDTH", "narrow");
            std::env::set_var("PHOTON_STRICT_LENGTH", "not-a-bool");
        }
        let mut format = WireFormat::default();
        apply_env_overrides(&mut format);
        assert_eq!(format.pipeline_layout, PipelineLayout::Legacy);
        assert_eq!(format.fiducial_id_width, FiducialIdWidth::Narrow);
        assert!(!format.strict_length);

        unsafe { std::env::set_var("PHOTON_STRICT_LENGTH", "true") };
        apply_env_overrides(&mut format);
        assert!(format.strict_length);

        unsafe {
            std::env::remove_var("PHOTON_PIPELINE_LAYOUT");
            std::env::remove_var("PHOTON_FIDUCIAL_ID_WIDTH");
            std::env::remove_var("PHOTON_STRICT_LENGTH");
        }
    }
}
