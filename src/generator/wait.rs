//! Spin-wait helpers
//!
//! Tight polling of the time source with a periodic thread yield. Used for
//! sequence exhaustion and for the bounded clock-regression wait.

use std::thread;

use crate::time::TimeSource;

/// Yield bookkeeping for a polling loop
#[derive(Debug)]
pub(crate) struct Spinner {
    yield_every: u32,
    polls: u32,
}

impl Spinner {
    pub(crate) const fn new(yield_every: u32) -> Self {
        Self {
            yield_every,
            polls: 0,
        }
    }

    /// Back off once between two polls
    #[inline]
    pub(crate) fn spin(&mut self) {
        std::hint::spin_loop();
        self.polls = self.polls.wrapping_add(1);
        if self.yield_every != 0 && self.polls % self.yield_every == 0 {
            thread::yield_now();
        }
    }
}

/// Poll `time` until it reports a value strictly greater than `from_timestamp`.
///
/// Never gives up: if the clock stays at or below `from_timestamp` this spins
/// forever.
pub(crate) fn spin_until_after<T>(from_timestamp: i64, time: &T, yield_every: u32) -> i64
where
    T: TimeSource + ?Sized,
{
    let mut spinner = Spinner::new(yield_every);
    loop {
        let now = time.now_millis();
        if now > from_timestamp {
            return now;
        }
        spinner.spin();
    }
}
