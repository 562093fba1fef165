//! Time sources for ID generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

/// Supplies the current time in milliseconds since the Unix epoch.
///
/// Implementations must be callable from many threads at once without
/// outside synchronization.
pub trait TimeSource: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// hand another to a generator.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(now_millis: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now_millis)),
        }
    }

    pub fn set(&self, now_millis: i64) {
        self.now.store(now_millis, Ordering::SeqCst);
    }

    /// Move the clock by `delta` milliseconds (negative moves it backward)
    pub fn advance(&self, delta: i64) {
        self.now.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
