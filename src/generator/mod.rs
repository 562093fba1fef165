//! Core ID generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp + sequence, guarded by the generator's lock
//! - `wait` - Spin-wait helpers
//! - `generate` - ID generation logic

mod generate;
mod state;
pub(crate) mod wait;

use parking_lot::Mutex;

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::extractor::IdExtractor;
use crate::node::NodeIdSource;
use crate::time::{SystemClock, TimeSource};

use state::GeneratorState;

/// Thread-safe generator of unique, monotonically increasing 64-bit IDs.
///
/// Share it between threads behind an [`Arc`](std::sync::Arc); every call to
/// [`next_id`](Self::next_id) runs under one short-lived lock.
#[derive(Debug)]
pub struct IdGenerator<T = SystemClock> {
    state: Mutex<GeneratorState>,
    node_prefix: i64,

    pub config: GeneratorConfig<T>,
    pub extract: IdExtractor,
}

impl IdGenerator {
    /// Create with default configuration and a fixed node id
    ///
    /// # Errors
    /// [`ConfigError::InvalidNodeId`] if `node_id` is outside `0..=1023`
    pub fn new(node_id: i64) -> Result<Self, ConfigError> {
        let config = GeneratorConfig::builder()
            .node_id(NodeIdSource::fixed(node_id)?)
            .build()?;
        Ok(Self::with_config(config))
    }
}

impl<T: TimeSource> IdGenerator<T> {
    /// Create from an already validated configuration
    pub fn with_config(config: GeneratorConfig<T>) -> Self {
        Self {
            state: Mutex::new(GeneratorState::new()),
            node_prefix: crate::layout::compose(0, config.node_id(), 0),
            extract: IdExtractor::new(config.epoch()),
            config,
        }
    }

    #[inline(always)]
    pub fn node_id(&self) -> u16 {
        self.config.node_id()
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: i64, sequence: u16) -> i64 {
        crate::layout::compose(timestamp - self.config.epoch(), 0, sequence) | self.node_prefix
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> (i64, u16) {
        let state = self.state.lock();
        (state.last_timestamp(), state.sequence())
    }
}
