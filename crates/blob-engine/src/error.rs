//! Error types for session persistence.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use blob_core::ConfigError;
use blob_snapshot::SnapshotError;

/// Failure to save or load a session.
#[derive(Debug)]
pub enum SessionError {
    /// Reading or writing a session file failed.
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A session file could not be decoded.
    Snapshot(SnapshotError),
    /// The restored configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Snapshot(e) => write!(f, "session snapshot: {e}"),
            Self::Config(e) => write!(f, "session configuration: {e}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Snapshot(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<SnapshotError> for SessionError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Snapshot(SnapshotError::Json(e))
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
