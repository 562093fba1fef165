//! Bit layout of a generated identifier
//!
//! ```text
//! | 1 bit: sign (0) | 41 bits: timestamp | 10 bits: node | 12 bits: sequence |
//! ```

/// Bits used for milliseconds since the configured epoch
pub const TIMESTAMP_BITS: u32 = 41;
/// Bits used for the node id
pub const NODE_BITS: u32 = 10;
/// Bits used for the per-millisecond sequence
pub const SEQUENCE_BITS: u32 = 12;

pub const NODE_SHIFT: u32 = SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u32 = NODE_BITS + SEQUENCE_BITS;

pub const MAX_NODE_ID: u16 = ((1u32 << NODE_BITS) - 1) as u16;
pub const MAX_SEQUENCE: u16 = ((1u32 << SEQUENCE_BITS) - 1) as u16;
pub const MAX_TIMESTAMP: i64 = (1i64 << TIMESTAMP_BITS) - 1;

pub(crate) const NODE_MASK: i64 = MAX_NODE_ID as i64;
pub(crate) const SEQUENCE_MASK: i64 = MAX_SEQUENCE as i64;

/// Pack the three fields into an identifier.
///
/// `timestamp` is already relative to the epoch. Values past the 41-bit
/// horizon are not checked.
#[inline(always)]
pub const fn compose(timestamp: i64, node_id: u16, sequence: u16) -> i64 {
    (timestamp << TIMESTAMP_SHIFT) | ((node_id as i64) << NODE_SHIFT) | (sequence as i64)
}
