//! GeneratorConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::GeneratorConfig;
use crate::error::ConfigError;
use crate::node::NodeIdSource;
use crate::policy::ClockPolicy;
use crate::time::{SystemClock, TimeSource};

/// January 1, 2024 UTC
pub const DEFAULT_EPOCH: i64 = 1_704_067_200_000;
pub const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for GeneratorConfig
///
/// Nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder<T = SystemClock> {
    epoch: i64,
    node_source: NodeIdSource,
    clock_policy: ClockPolicy,
    spin_yield_every: u32,
    time: T,
}

impl GeneratorConfigBuilder {
    /// Create a builder with default values and the system clock
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            node_source: NodeIdSource::default(),
            clock_policy: ClockPolicy::default(),
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            time: SystemClock,
        }
    }
}

impl<T> GeneratorConfigBuilder<T> {
    /// Set the epoch in milliseconds since the Unix epoch
    pub fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn epoch_datetime(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch = epoch.timestamp_millis();
        self
    }

    pub fn node_id(mut self, source: NodeIdSource) -> Self {
        self.node_source = source;
        self
    }

    pub fn clock_policy(mut self, policy: ClockPolicy) -> Self {
        self.clock_policy = policy;
        self
    }

    /// Set spin yield cadence. Yield every N polls; 0 disables yielding
    pub fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Swap the time source
    pub fn time_source<U>(self, time: U) -> GeneratorConfigBuilder<U> {
        GeneratorConfigBuilder {
            epoch: self.epoch,
            node_source: self.node_source,
            clock_policy: self.clock_policy,
            spin_yield_every: self.spin_yield_every,
            time,
        }
    }
}

impl<T: TimeSource> GeneratorConfigBuilder<T> {
    /// Validate and build the final GeneratorConfig
    pub fn build(self) -> Result<GeneratorConfig<T>, ConfigError> {
        GeneratorConfig::validated(
            self.epoch,
            self.node_source,
            self.clock_policy,
            self.spin_yield_every,
            self.time,
        )
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
