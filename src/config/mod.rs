//! Configuration for the ID generator
//!
//! A [`GeneratorConfig`] is validated once when it is built and never changes
//! afterwards: the epoch is checked against the time source and the node id
//! is resolved, so a generator built from it cannot hold an invalid value.

mod builder;

use std::fmt;

use chrono::{DateTime, Utc};

pub use builder::GeneratorConfigBuilder;
pub use builder::{DEFAULT_EPOCH, DEFAULT_SPIN_YIELD_EVERY};

use crate::error::ConfigError;
use crate::node::{NodeIdSource, ResolveNodeId};
use crate::policy::ClockPolicy;
use crate::time::{SystemClock, TimeSource};

/// Validated, immutable generator configuration
#[derive(Clone)]
pub struct GeneratorConfig<T = SystemClock> {
    epoch: i64,
    node_id: u16,
    node_source: NodeIdSource,
    clock_policy: ClockPolicy,
    spin_yield_every: u32,
    time: T,
}

impl<T: TimeSource> GeneratorConfig<T> {
    /// Validate the epoch against `time` and resolve the node id.
    ///
    /// # Errors
    /// * [`ConfigError::InvalidEpoch`] if `epoch` is negative or later than
    ///   the current time reported by `time`
    /// * [`ConfigError::InvalidNodeId`] if `node_source` cannot produce a
    ///   node id in `0..=1023`
    pub fn new(
        epoch: i64,
        node_source: NodeIdSource,
        clock_policy: ClockPolicy,
        time: T,
    ) -> Result<Self, ConfigError> {
        Self::validated(
            epoch,
            node_source,
            clock_policy,
            DEFAULT_SPIN_YIELD_EVERY,
            time,
        )
    }

    pub(crate) fn validated(
        epoch: i64,
        node_source: NodeIdSource,
        clock_policy: ClockPolicy,
        spin_yield_every: u32,
        time: T,
    ) -> Result<Self, ConfigError> {
        let now = time.now_millis();
        if epoch < 0 || epoch > now {
            return Err(ConfigError::InvalidEpoch { epoch, now });
        }
        let node_id = node_source.resolve()?;

        tracing::debug!(
            epoch,
            node_id,
            policy = %clock_policy,
            "generator configuration validated"
        );

        Ok(Self {
            epoch,
            node_id,
            node_source,
            clock_policy,
            spin_yield_every,
            time,
        })
    }
}

impl GeneratorConfig {
    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }
}

impl<T> GeneratorConfig<T> {
    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    pub fn epoch_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch)
    }

    /// Node id resolved at construction
    #[inline(always)]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    pub fn node_source(&self) -> &NodeIdSource {
        &self.node_source
    }

    #[inline(always)]
    pub const fn clock_policy(&self) -> ClockPolicy {
        self.clock_policy
    }

    /// Polls between thread yields while spin-waiting; 0 never yields
    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub fn time_source(&self) -> &T {
        &self.time
    }
}

impl<T> fmt::Debug for GeneratorConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("epoch", &self.epoch)
            .field("node_id", &self.node_id)
            .field("node_source", &self.node_source)
            .field("clock_policy", &self.clock_policy)
            .field("spin_yield_every", &self.spin_yield_every)
            .finish_non_exhaustive()
    }
}
