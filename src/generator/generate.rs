//! ID generation logic

use crate::error::ClockRegressionError;
use crate::time::TimeSource;

use super::wait::spin_until_after;
use super::IdGenerator;

impl<T: TimeSource> IdGenerator<T> {
    /// Generate a new ID.
    ///
    /// IDs from one generator are unique and strictly increasing in the order
    /// the calls complete.
    ///
    /// # Errors
    /// [`ClockRegressionError::ClockMovedBackward`] when the clock is behind
    /// the last used timestamp (or the epoch, before the first ID) and the
    /// configured policy refuses to continue.
    /// The generator state is left untouched in that case.
    #[inline]
    pub fn next_id(&self) -> Result<i64, ClockRegressionError> {
        let time = self.config.time_source();
        let mut state = self.state.lock();

        let observed = time.now_millis();
        // Readings below the epoch would set the sign bit
        let floor = state.last_timestamp().max(self.config.epoch());
        let mut timestamp = if observed < floor {
            self.resolve_regression(floor, observed)?
        } else {
            observed
        };

        let sequence = match state.claim(timestamp) {
            Some(sequence) => sequence,
            None => {
                timestamp = self.wait_next_millis(timestamp);
                state.claim(timestamp).unwrap_or_default()
            }
        };

        Ok(self.assemble_id(timestamp, sequence))
    }

    #[cold]
    #[inline(never)]
    fn resolve_regression(&self, last: i64, observed: i64) -> Result<i64, ClockRegressionError> {
        let policy = self.config.clock_policy();
        tracing::debug!(last, observed, %policy, "clock moved backward");
        policy.resolve(
            last,
            observed,
            self.config.time_source(),
            self.config.spin_yield_every(),
        )
    }

    /// Sequence space for `last` is used up; wait for the next millisecond
    #[cold]
    #[inline(never)]
    pub(crate) fn wait_next_millis(&self, last: i64) -> i64 {
        tracing::trace!(last, "sequence exhausted, waiting for next millisecond");
        spin_until_after(last, self.config.time_source(), self.config.spin_yield_every())
    }
}
