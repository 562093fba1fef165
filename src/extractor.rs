use chrono::{DateTime, Utc};

use crate::layout::{NODE_MASK, NODE_SHIFT, SEQUENCE_MASK, TIMESTAMP_SHIFT};

/// Splits generated IDs back into their fields
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IdExtractor {
    epoch: i64,
}

impl IdExtractor {
    /// Create an extractor for IDs generated against `epoch`
    pub const fn new(epoch: i64) -> Self {
        Self { epoch }
    }

    /// Milliseconds since the epoch
    #[inline(always)]
    pub const fn timestamp(&self, id: i64) -> i64 {
        id >> TIMESTAMP_SHIFT
    }

    #[inline(always)]
    pub const fn node(&self, id: i64) -> u16 {
        ((id >> NODE_SHIFT) & NODE_MASK) as u16
    }

    #[inline(always)]
    pub const fn sequence(&self, id: i64) -> u16 {
        (id & SEQUENCE_MASK) as u16
    }

    /// Decompose an ID into timestamp, node id and sequence
    #[inline]
    pub const fn decompose(&self, id: i64) -> (i64, u16, u16) {
        (self.timestamp(id), self.node(id), self.sequence(id))
    }

    /// Milliseconds since the Unix epoch at which the ID was generated
    #[inline]
    pub const fn unix_millis(&self, id: i64) -> i64 {
        self.timestamp(id) + self.epoch
    }

    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.unix_millis(id))
    }
}
