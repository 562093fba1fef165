use thiserror::Error;

use crate::layout::MAX_NODE_ID;

/// Errors raised while building a generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The node id source did not yield a value in `0..=1023`
    #[error("Invalid node ID: {0}")]
    InvalidNodeId(#[from] NodeIdError),
    /// Epoch is negative or lies in the future
    #[error("Epoch {epoch} is invalid. It must be between 0 and the current time {now}")]
    InvalidEpoch { epoch: i64, now: i64 },
}

/// Why a node id could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeIdError {
    #[error("{value} is outside 0..={max}", max = MAX_NODE_ID)]
    OutOfRange { value: i64 },
    #[error("variable `{var}` is not set")]
    MissingVar { var: String },
    #[error("variable `{var}` holds non-numeric value {value:?}")]
    NotNumeric { var: String, value: String },
}

/// Raised by `next_id` when the clock moved backward and the active policy
/// could not resolve it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockRegressionError {
    #[error("Clock moved backward from {last} to {observed}. Refusing to generate id for {diff_ms} milliseconds")]
    ClockMovedBackward { last: i64, observed: i64, diff_ms: i64 },
}

impl ClockRegressionError {
    pub(crate) const fn moved_backward(last: i64, observed: i64) -> Self {
        Self::ClockMovedBackward {
            last,
            observed,
            diff_ms: last - observed,
        }
    }
}

/// Any error this crate can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    ClockRegression(#[from] ClockRegressionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let out_of_range = ConfigError::from(NodeIdError::OutOfRange { value: 1024 });
        assert_eq!(
            out_of_range.to_string(),
            "Invalid node ID: 1024 is outside 0..=1023"
        );

        let epoch = ConfigError::InvalidEpoch { epoch: -1, now: 500 };
        assert_eq!(
            epoch.to_string(),
            "Epoch -1 is invalid. It must be between 0 and the current time 500"
        );

        let clock = ClockRegressionError::moved_backward(1000, 900);
        assert_eq!(
            clock.to_string(),
            "Clock moved backward from 1000 to 900. Refusing to generate id for 100 milliseconds"
        );
    }

    #[test]
    fn test_moved_backward_diff() {
        assert_eq!(
            ClockRegressionError::moved_backward(1000, 900),
            ClockRegressionError::ClockMovedBackward {
                last: 1000,
                observed: 900,
                diff_ms: 100
            }
        );
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: Error = ClockRegressionError::moved_backward(10, 5).into();
        assert!(matches!(err, Error::ClockRegression(_)));

        let err: Error = ConfigError::InvalidEpoch { epoch: 5, now: 1 }.into();
        assert!(matches!(err, Error::Config(ConfigError::InvalidEpoch { .. })));
        assert_eq!(err.to_string(), "Epoch 5 is invalid. It must be between 0 and the current time 1");
    }

    #[test]
    fn test_node_id_error_messages() {
        let missing = NodeIdError::MissingVar { var: "NODE_ID".into() };
        assert_eq!(missing.to_string(), "variable `NODE_ID` is not set");

        let bad = NodeIdError::NotNumeric {
            var: "NODE_ID".into(),
            value: "abc".into(),
        };
        assert_eq!(bad.to_string(), "variable `NODE_ID` holds non-numeric value \"abc\"");
    }
}
