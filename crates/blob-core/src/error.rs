//! Error types for configuration validation.

use std::error::Error;
use std::fmt;

/// Errors detected by [`BlobConfig::validate()`](crate::BlobConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric parameter is NaN or infinite.
    NonFinite {
        /// Dotted path of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A rate or amount that must be non-negative is negative.
    Negative {
        /// Dotted path of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A probability lies outside `[0, 1]`.
    ProbabilityOutOfRange {
        /// Dotted path of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `harvesting.min` exceeds `harvesting.max`.
    HarvestBoundsInverted {
        /// The configured starvation threshold.
        min: f64,
        /// The configured storage capacity.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must be >= 0, got {value}")
            }
            Self::ProbabilityOutOfRange { field, value } => {
                write!(f, "{field} must lie in [0, 1], got {value}")
            }
            Self::HarvestBoundsInverted { min, max } => {
                write!(f, "harvesting.min ({min}) exceeds harvesting.max ({max})")
            }
        }
    }
}

impl Error for ConfigError {}
