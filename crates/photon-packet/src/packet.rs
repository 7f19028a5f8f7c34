//! Byte buffer with sequential write and read cursors.
//!
//! Every scalar goes on the wire big-endian regardless of the host byte
//! order.  Writes append; reads advance a separate cursor from the front.
//!
//! # Reading past the end
//!
//! [`Packet::read`] never fails.  Bytes beyond the end of the buffer read as
//! zero and the cursor still advances by the full width of the scalar, so a
//! truncated buffer decodes to plausible-looking zeros.  Callers that cannot
//! tolerate that should use [`Packet::try_read`] (or
//! [`ReadPolicy::Strict`]), which reports [`PacketError::Truncated`] instead.
//!
//! # Example
//!
//! ```rust
//! use photon_packet::Packet;
//!
//! let mut packet = Packet::new();
//! packet.write(1.0f64);
//! packet.write(-3i16);
//! assert_eq!(packet.as_bytes()[..2], [0x3f, 0xf0]);
//!
//! assert_eq!(packet.read::<f64>(), 1.0);
//! assert_eq!(packet.read::<i16>(), -3);
//! ```

use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

/// Widest scalar the codec handles, in bytes.
const MAX_SCALAR_SIZE: usize = 8;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised by byte-level packet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("Truncated buffer: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Bounded list capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalars
// ─────────────────────────────────────────────────────────────────────────────

/// A fixed-width value that can be written to and read from a [`Packet`].
pub trait WireScalar: Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Append the big-endian encoding of `self` to `out`.
    fn put_be(self, out: &mut Vec<u8>);

    /// Decode from exactly [`Self::SIZE`] big-endian bytes.
    fn from_be(bytes: &[u8]) -> Self;
}

macro_rules! impl_wire_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireScalar for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn put_be(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }

                fn from_be(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_be_bytes(raw)
                }
            }
        )*
    };
}

impl_wire_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl WireScalar for bool {
    const SIZE: usize = 1;

    fn put_be(self, out: &mut Vec<u8>) {
        out.push(u8::from(self));
    }

    fn from_be(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

/// How a decoder reacts to a read that runs past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPolicy {
    /// Missing bytes read as zero.
    #[default]
    ZeroFill,
    /// Missing bytes raise [`PacketError::Truncated`].
    Strict,
}

// ─────────────────────────────────────────────────────────────────────────────
// Packet
// ─────────────────────────────────────────────────────────────────────────────

/// A growable byte buffer with an append-only write side and a sequential
/// read cursor.
///
/// Two packets are equal when their byte contents are equal; the read cursor
/// is not part of a packet's identity.
#[derive(Debug, Clone, Default)]
pub struct Packet {
    data: Vec<u8>,
    read_pos: usize,
}

impl Packet {
    /// Create an empty packet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty packet with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            read_pos: 0,
        }
    }

    /// Wrap received bytes for decoding.  The read cursor starts at zero.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: bytes.into(),
            read_pos: 0,
        }
    }

    /// Append `value` in big-endian order.
    pub fn write<T: WireScalar>(&mut self, value: T) {
        value.put_be(&mut self.data);
    }

    /// Read the next `T`, zero-filling anything past the end of the buffer.
    ///
    /// The read cursor advances by `T::SIZE` unconditionally.
    pub fn read<T: WireScalar>(&mut self) -> T {
        let start = self.read_pos.min(self.data.len());
        let end = (self.read_pos + T::SIZE).min(self.data.len());

        let mut raw = [0u8; MAX_SCALAR_SIZE];
        raw[..end - start].copy_from_slice(&self.data[start..end]);
        if end - start < T::SIZE {
            warn!(
                offset = self.read_pos,
                needed = T::SIZE,
                available = end - start,
                "packet read past end of buffer, zero-filling"
            );
        }

        self.read_pos += T::SIZE;
        T::from_be(&raw[..T::SIZE])
    }

    /// Read the next `T`, failing if fewer than `T::SIZE` bytes remain.
    ///
    /// On failure the read cursor is left where it was.
    pub fn try_read<T: WireScalar>(&mut self) -> Result<T, PacketError> {
        let available = self.remaining();
        if available < T::SIZE {
            return Err(PacketError::Truncated {
                offset: self.read_pos,
                needed: T::SIZE,
                available,
            });
        }
        Ok(self.read())
    }

    /// Read the next `T` according to `policy`.
    pub fn read_with<T: WireScalar>(&mut self, policy: ReadPolicy) -> Result<T, PacketError> {
        match policy {
            ReadPolicy::ZeroFill => Ok(self.read()),
            ReadPolicy::Strict => self.try_read(),
        }
    }

    /// Empty the buffer and reset both cursors.
    pub fn clear(&mut self) {
        self.data.clear();
        self.read_pos = 0;
    }

    /// Number of bytes written so far (the write cursor).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current read cursor.  May exceed [`Packet::len`] after zero-filled
    /// reads.
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    /// Bytes left between the read cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.read_pos)
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the packet into an immutable, cheaply cloneable buffer for
    /// hand-off to a transport.
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for Packet {}

impl From<Vec<u8>> for Packet {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Bytes> for Packet {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl From<&[u8]> for Packet {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_is_big_endian_on_every_host() {
        let mut packet = Packet::new();
        packet.write(1.0f64);
        assert_eq!(packet.as_bytes(), &[0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn integers_are_big_endian() {
        let mut packet = Packet::new();
        packet.write(0x0102_0304i32);
        packet.write(-1i16);
        packet.write(-128i8);
        packet.write(true);
        assert_eq!(
            packet.as_bytes(),
            &[0x01, 0x02, 0x03, 0x04, 0xff, 0xff, 0x80, 0x01]
        );
    }

    #[test]
    fn write_then_read_in_order() {
        let mut packet = Packet::new();
        packet.write(12.5f64);
        packet.write(7u8);
        packet.write(false);
        packet.write(-42i32);
        packet.write(3.25f32);

        assert_eq!(packet.read::<f64>(), 12.5);
        assert_eq!(packet.read::<u8>(), 7);
        assert!(!packet.read::<bool>());
        assert_eq!(packet.read::<i32>(), -42);
        assert_eq!(packet.read::<f32>(), 3.25);
        assert_eq!(packet.remaining(), 0);
    }

    #[test]
    fn read_past_end_zero_fills_and_advances() {
        let mut packet = Packet::new();
        assert_eq!(packet.read::<f64>(), 0.0);
        assert_eq!(packet.read_position(), 8);
        assert_eq!(packet.read::<i32>(), 0);
        assert_eq!(packet.read_position(), 12);
    }

    #[test]
    fn partial_read_keeps_leading_bytes() {
        let mut packet = Packet::from_bytes(vec![0x12, 0x34]);
        assert_eq!(packet.read::<u32>(), 0x1234_0000);
        assert_eq!(packet.read_position(), 4);
    }

    #[test]
    fn try_read_reports_truncation_without_advancing() {
        let mut packet = Packet::from_bytes(vec![0u8; 3]);
        let err = packet.try_read::<f64>().unwrap_err();
        assert_eq!(
            err,
            PacketError::Truncated {
                offset: 0,
                needed: 8,
                available: 3
            }
        );
        assert_eq!(packet.read_position(), 0);
        assert!(err.to_string().contains("Truncated buffer"));
    }

    #[test]
    fn read_with_policy() {
        let mut packet = Packet::new();
        assert_eq!(packet.read_with::<i16>(ReadPolicy::ZeroFill), Ok(0));
        assert!(packet.read_with::<i16>(ReadPolicy::Strict).is_err());
    }

    #[test]
    fn clear_resets_cursors() {
        let mut packet = Packet::new();
        packet.write(5i64);
        let _ = packet.read::<i64>();
        packet.clear();
        assert!(packet.is_empty());
        assert_eq!(packet.read_position(), 0);
        packet.write(9i64);
        assert_eq!(packet.read::<i64>(), 9);
    }

    #[test]
    fn equality_ignores_read_cursor() {
        let mut a = Packet::new();
        a.write(1u16);
        let mut b = a.clone();
        let _ = b.read::<u16>();
        assert_eq!(a, b);

        b.write(0u8);
        assert_ne!(a, b);
    }

    #[test]
    fn freeze_and_rewrap() {
        let mut packet = Packet::new();
        packet.write(2.0f64);
        let frozen = packet.clone().freeze();
        let mut received = Packet::from(frozen);
        assert_eq!(received, packet);
        assert_eq!(received.read::<f64>(), 2.0);
    }
}
