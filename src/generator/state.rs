//! Mutable generator state: last timestamp + sequence
//!
//! Only touched while the generator's lock is held.

use crate::layout::MAX_SEQUENCE;

/// Timestamp before any ID was generated
pub(crate) const NO_TIMESTAMP: i64 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GeneratorState {
    last_timestamp: i64,
    sequence: u16,
}

impl GeneratorState {
    pub(crate) const fn new() -> Self {
        Self {
            last_timestamp: NO_TIMESTAMP,
            sequence: 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    #[cfg(test)]
    pub(crate) const fn sequence(&self) -> u16 {
        self.sequence
    }

    /// Take the next sequence slot for `timestamp`.
    ///
    /// `timestamp` must not be behind the last one. Returns `None` without
    /// changing anything when the millisecond has no slots left.
    #[inline]
    pub(crate) fn claim(&mut self, timestamp: i64) -> Option<u16> {
        debug_assert!(timestamp >= self.last_timestamp);
        if timestamp == self.last_timestamp {
            if self.sequence >= MAX_SEQUENCE {
                return None;
            }
            self.sequence += 1;
        } else {
            self.last_timestamp = timestamp;
            self.sequence = 0;
        }
        Some(self.sequence)
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new()
    }
}
