use photon_packet::PacketError;
use thiserror::Error;

/// Errors raised while encoding or decoding result structures.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Packet error: {0}")]
    Packet(#[from] PacketError),

    #[error("Too many {what}: {count} exceeds the limit of {limit}")]
    TooManyElements {
        what: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("Fiducial id {0} does not fit in a narrow slot")]
    FiducialIdOutOfRange(i16),

    #[error("Schema decode error: {0}")]
    Schema(#[from] prost::DecodeError),
}
