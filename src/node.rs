//! Node id resolution
//!
//! A generator needs a node id in `0..=1023`. It can be given directly,
//! read from a key-value source such as the process environment, or drawn
//! at random once and then held for the lifetime of the configuration.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use rand::Rng;

use crate::error::{ConfigError, NodeIdError};
use crate::layout::MAX_NODE_ID;

/// Variable read by [`NodeIdSource::process_env_default`]
pub const DEFAULT_NODE_ID_VAR: &str = "NODE_ID";

/// Capability of producing a validated node id
pub trait ResolveNodeId {
    fn resolve(&self) -> Result<u16, ConfigError>;
}

#[inline]
fn validate(value: i64) -> Result<u16, NodeIdError> {
    if !(0..=MAX_NODE_ID as i64).contains(&value) {
        return Err(NodeIdError::OutOfRange { value });
    }
    Ok(value as u16)
}

/// Node id given explicitly by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNodeId(u16);

impl FixedNodeId {
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        Ok(Self(validate(value)?))
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl ResolveNodeId for FixedNodeId {
    fn resolve(&self) -> Result<u16, ConfigError> {
        Ok(self.0)
    }
}

/// Node id read from a named variable of a key-value source.
///
/// The source is captured when this value is built, so resolution does not
/// depend on later changes to the real process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvNodeId {
    var: String,
    vars: HashMap<String, String>,
}

impl EnvNodeId {
    pub fn new<I, K, V>(var: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            var: var.into(),
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot the current process environment
    pub fn from_process(var: impl Into<String>) -> Self {
        Self::new(var, std::env::vars())
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl ResolveNodeId for EnvNodeId {
    fn resolve(&self) -> Result<u16, ConfigError> {
        let raw = self
            .vars
            .get(&self.var)
            .ok_or_else(|| NodeIdError::MissingVar {
                var: self.var.clone(),
            })?;
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| NodeIdError::NotNumeric {
                var: self.var.clone(),
                value: raw.clone(),
            })?;
        Ok(validate(value)?)
    }
}

/// Node id drawn uniformly from `0..=1023` on first resolution.
///
/// The draw is cached; clones made after the draw carry the same value.
#[derive(Debug, Clone, Default)]
pub struct RandomNodeId {
    drawn: OnceCell<u16>,
}

impl RandomNodeId {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached draw, if resolution already happened
    pub fn drawn(&self) -> Option<u16> {
        self.drawn.get().copied()
    }
}

impl ResolveNodeId for RandomNodeId {
    fn resolve(&self) -> Result<u16, ConfigError> {
        let node_id = *self.drawn.get_or_init(|| {
            let node_id = rand::rng().random_range(0..=MAX_NODE_ID);
            tracing::debug!(node_id, "drew random node id");
            node_id
        });
        Ok(node_id)
    }
}

/// Where a generator's node id comes from
#[derive(Debug, Clone)]
pub enum NodeIdSource {
    Fixed(FixedNodeId),
    Environment(EnvNodeId),
    Random(RandomNodeId),
}

impl NodeIdSource {
    /// Validated fixed node id
    pub fn fixed(value: i64) -> Result<Self, ConfigError> {
        FixedNodeId::new(value).map(Self::Fixed)
    }

    /// Read `var` from the supplied key-value pairs
    pub fn env<I, K, V>(var: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Environment(EnvNodeId::new(var, vars))
    }

    /// Read `var` from a snapshot of the process environment
    pub fn process_env(var: impl Into<String>) -> Self {
        Self::Environment(EnvNodeId::from_process(var))
    }

    /// Read [`DEFAULT_NODE_ID_VAR`] from a snapshot of the process environment
    pub fn process_env_default() -> Self {
        Self::process_env(DEFAULT_NODE_ID_VAR)
    }

    pub fn random() -> Self {
        Self::Random(RandomNodeId::new())
    }
}

impl Default for NodeIdSource {
    fn default() -> Self {
        Self::Fixed(FixedNodeId(0))
    }
}

impl ResolveNodeId for NodeIdSource {
    fn resolve(&self) -> Result<u16, ConfigError> {
        match self {
            Self::Fixed(fixed) => fixed.resolve(),
            Self::Environment(env) => env.resolve(),
            Self::Random(random) => random.resolve(),
        }
    }
}
