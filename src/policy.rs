//! Clock regression policies
//!
//! A policy runs only when the clock reports a time earlier than the last
//! timestamp the generator used, or earlier than the epoch before any ID was
//! generated. It either produces a timestamp to continue
//! with or fails with [`ClockRegressionError`].

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::ClockRegressionError;
use crate::generator::wait::Spinner;
use crate::time::TimeSource;

/// Default budget for [`ClockPolicy::BlockAndRetry`]
pub const DEFAULT_MAX_WAIT_MILLIS: u64 = 10;

/// What to do when the clock moves backward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPolicy {
    /// Poll the clock until it catches up with the last timestamp.
    ///
    /// Gives up with [`ClockRegressionError::ClockMovedBackward`] once more
    /// than `max_wait_millis` of real (monotonic) time has elapsed. The
    /// error reports the latest reading. Timestamps stay true wall-clock
    /// time.
    BlockAndRetry { max_wait_millis: u64 },
    /// Report the regression right away.
    FailFast,
    /// Keep using the last timestamp and continue its sequence.
    ///
    /// IDs stay strictly increasing but their timestamp bits stop tracking
    /// the wall clock while it is behind. If the clock stays behind long
    /// enough to use up all 4096 sequence values of the pinned millisecond,
    /// the generator waits for a real reading past it, and that wait has no
    /// upper bound.
    PinToLast,
}

impl ClockPolicy {
    pub const fn block_and_retry(max_wait_millis: u64) -> Self {
        Self::BlockAndRetry { max_wait_millis }
    }

    /// Produce the timestamp to continue with after `observed < last`.
    pub(crate) fn resolve<T>(
        &self,
        last: i64,
        observed: i64,
        time: &T,
        yield_every: u32,
    ) -> Result<i64, ClockRegressionError>
    where
        T: TimeSource + ?Sized,
    {
        match *self {
            Self::BlockAndRetry { max_wait_millis } => {
                block_until_caught_up(last, observed, time, max_wait_millis, yield_every)
            }
            Self::FailFast => Err(ClockRegressionError::moved_backward(last, observed)),
            Self::PinToLast => Ok(last),
        }
    }
}

impl Default for ClockPolicy {
    fn default() -> Self {
        Self::block_and_retry(DEFAULT_MAX_WAIT_MILLIS)
    }
}

impl fmt::Display for ClockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockAndRetry { max_wait_millis } => {
                write!(f, "block-and-retry({max_wait_millis}ms)")
            }
            Self::FailFast => f.write_str("fail-fast"),
            Self::PinToLast => f.write_str("pin-to-last"),
        }
    }
}

fn block_until_caught_up<T>(
    last: i64,
    observed: i64,
    time: &T,
    max_wait_millis: u64,
    yield_every: u32,
) -> Result<i64, ClockRegressionError>
where
    T: TimeSource + ?Sized,
{
    let budget = Duration::from_millis(max_wait_millis);
    let started = Instant::now();
    let mut spinner = Spinner::new(yield_every);

    loop {
        let latest = time.now_millis();
        if latest >= last {
            return Ok(latest);
        }
        if started.elapsed() > budget {
            tracing::debug!(last, observed, latest, max_wait_millis, "clock did not catch up in time");
            return Err(ClockRegressionError::moved_backward(last, latest));
        }
        spinner.spin();
    }
}
