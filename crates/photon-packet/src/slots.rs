//! Sentinel-padded slot lists.
//!
//! A bounded list of capacity `N` is written as exactly `N` fixed-width
//! slots with no length prefix.  Live elements come first, in order; every
//! remaining slot holds the element type's reserved [`SentinelSlot::SENTINEL`].
//!
//! Decoding reads all `N` slots and keeps only values strictly greater than
//! the sentinel.  Any element at or below the sentinel is therefore lost on
//! the wire: producers must only emit values above it.
//!
//! | Element | Sentinel |
//! |---|---|
//! | `i8`  | `-128` |
//! | `i16` | `-1`   |

use tracing::{debug, warn};

use crate::bounded::BoundedVec;
use crate::packet::{Packet, PacketError, ReadPolicy, WireScalar};

/// An element type with a reserved "unused slot" value.
pub trait SentinelSlot: WireScalar + PartialOrd + Default + std::fmt::Debug {
    const SENTINEL: Self;
}

impl SentinelSlot for i8 {
    const SENTINEL: i8 = i8::MIN;
}

impl SentinelSlot for i16 {
    const SENTINEL: i16 = -1;
}

impl Packet {
    /// Write `items` into `capacity` slots, padding with the sentinel.
    ///
    /// Fails without writing anything when `items` does not fit.
    pub fn write_sentinel_slots<T: SentinelSlot>(
        &mut self,
        items: &[T],
        capacity: usize,
    ) -> Result<(), PacketError> {
        if items.len() > capacity {
            return Err(PacketError::CapacityExceeded { capacity });
        }
        for item in items {
            if *item <= T::SENTINEL {
                warn!(value = ?item, sentinel = ?T::SENTINEL, "slot value will be dropped by the decoder");
            }
            self.write(*item);
        }
        for _ in items.len()..capacity {
            self.write(T::SENTINEL);
        }
        Ok(())
    }

    /// Write a [`BoundedVec`] using its full capacity as the slot count.
    pub fn write_sentinel_list<T: SentinelSlot, const N: usize>(&mut self, list: &BoundedVec<T, N>) {
        for item in list {
            if *item <= T::SENTINEL {
                warn!(value = ?item, sentinel = ?T::SENTINEL, "slot value will be dropped by the decoder");
            }
            self.write(*item);
        }
        for _ in list.len()..N {
            self.write(T::SENTINEL);
        }
    }

    /// Read `N` slots, keeping every value above the sentinel in order.
    pub fn read_sentinel_list<T: SentinelSlot, const N: usize>(
        &mut self,
        policy: ReadPolicy,
    ) -> Result<BoundedVec<T, N>, PacketError> {
        let mut list = BoundedVec::new();
        let mut dropped = 0usize;
        for _ in 0..N {
            let value: T = self.read_with(policy)?;
            if value > T::SENTINEL {
                list.push(value)?;
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(kept = list.len(), dropped, "decoded sentinel slot list");
        }
        Ok(list)
    }
}
