//! Error types for snapshot decoding.

use std::error::Error;
use std::fmt;

use blob_core::ConfigError;

/// Input that cannot be turned into a board or knowledge at all.
#[derive(Debug)]
pub enum SnapshotError {
    /// The board header is missing or not two integers.
    MalformedHeader {
        /// What was wrong.
        detail: String,
    },
    /// The board header declares a zero or negative dimension.
    InvalidDimensions {
        /// Declared width.
        width: i64,
        /// Declared height.
        height: i64,
    },
    /// Knowledge JSON could not be parsed or produced.
    Json(serde_json::Error),
    /// Knowledge JSON parsed but carries an invalid configuration.
    Config(ConfigError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader { detail } => write!(f, "malformed board header: {detail}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {width}x{height}")
            }
            Self::Json(e) => write!(f, "knowledge JSON: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ConfigError> for SnapshotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
