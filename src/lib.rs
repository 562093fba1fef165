//! # flakeid
//!
//! A Snowflake-style generator of 64-bit unique identifiers.
//!
//! ```text
//! | 1 bit: 0 | 41 bits: ms since epoch | 10 bits: node id | 12 bits: sequence |
//! ```
//!
//! Generated IDs are:
//! - 📈 Time-sorted
//! - 🔄 Strictly increasing per generator
//! - 🔒 Thread-safe
//! - 🌐 Partitioned by node id, so distinct nodes never collide
//!
//! What happens when the wall clock moves backward is chosen per generator
//! with a [`ClockPolicy`].
//!
//! ```
//! use flakeid::{ClockPolicy, GeneratorConfig, IdGenerator, NodeIdSource};
//!
//! let config = GeneratorConfig::builder()
//!     .node_id(NodeIdSource::fixed(7)?)
//!     .clock_policy(ClockPolicy::FailFast)
//!     .build()?;
//! let generator = IdGenerator::with_config(config);
//!
//! let id = generator.next_id()?;
//! let (_, node, _) = generator.extract.decompose(id);
//! assert_eq!(node, 7);
//! # Ok::<(), flakeid::Error>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
pub mod layout;
mod node;
mod policy;
mod time;

#[cfg(test)]
pub mod tests;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, DEFAULT_EPOCH, DEFAULT_SPIN_YIELD_EVERY};
pub use error::{ClockRegressionError, ConfigError, Error, NodeIdError};
pub use extractor::IdExtractor;
pub use generator::IdGenerator;
pub use node::{
    EnvNodeId, FixedNodeId, NodeIdSource, RandomNodeId, ResolveNodeId, DEFAULT_NODE_ID_VAR,
};
pub use policy::{ClockPolicy, DEFAULT_MAX_WAIT_MILLIS};
pub use time::{ManualClock, SystemClock, TimeSource};
