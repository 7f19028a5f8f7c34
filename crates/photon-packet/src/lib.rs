//! `photon-packet` – Fixed-layout binary packet codec.
//!
//! The low-latency channel carries vision results as a flat sequence of
//! big-endian scalars.  This crate owns the byte-level rules; the layout of
//! each result structure lives in `photon-targeting`.
//!
//! # Modules
//!
//! - [`packet`] – [`Packet`]: growable byte buffer with independent write and
//!   read cursors and endianness-normalised scalar encode/decode.
//! - [`bounded`] – [`BoundedVec`]: inline fixed-capacity list used for every
//!   collection whose wire size is fixed.
//! - [`slots`] – the sentinel-padded slot convention for bounded lists whose
//!   length is not written to the stream.
//! - [`config`] – [`WireFormat`]: the layout choices a decoder must know in
//!   advance, loadable from TOML with `PHOTON_*` environment overrides.

pub mod bounded;
pub mod config;
pub mod packet;
pub mod slots;

pub use bounded::BoundedVec;
pub use config::{ConfigError, FiducialIdWidth, PipelineLayout, WireFormat};
pub use packet::{Packet, PacketError, ReadPolicy, WireScalar};
pub use slots::SentinelSlot;
