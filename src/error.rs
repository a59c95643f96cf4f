//! Error types
//!
//! Source parsers never surface errors to callers: a [`SourceError`] is
//! logged and the source contributes nothing. Snapshot, configuration and
//! pipeline failures are returned as `Result`s.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a source file contributed no data
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be opened or read
    Io(io::Error),
    /// The annotation document is not well-formed XML
    Xml(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Xml(msg) => write!(f, "malformed XML: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Xml(_) => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<roxmltree::Error> for SourceError {
    fn from(e: roxmltree::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

/// Errors saving or loading the master snapshot
#[derive(Debug)]
pub enum SnapshotError {
    /// Reading or writing the snapshot file failed
    Io(io::Error),
    /// The document is not valid JSON or does not have the snapshot shape
    Json(serde_json::Error),
    /// A character entry disagrees with its key
    Inconsistent {
        /// Key of the offending entry
        code_point: String,
        /// What is wrong with it
        reason: String,
    },
    /// The snapshot has no characters; refused on save and on load
    Empty,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "snapshot I/O error: {}", e),
            Self::Json(e) => write!(f, "malformed snapshot: {}", e),
            Self::Inconsistent { code_point, reason } => {
                write!(f, "inconsistent snapshot entry {}: {}", code_point, reason)
            }
            Self::Empty => write!(f, "snapshot has no character data"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Errors loading the dataset configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(io::Error),
    /// The configuration is not valid JSON or has the wrong shape
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {}", e),
            Self::Json(e) => write!(f, "malformed dataset config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Errors that halt a pipeline run
#[derive(Debug)]
pub enum PipelineError {
    /// The primary character table was missing, unreadable or empty
    EmptyPrimaryTable {
        /// Where the table was expected
        path: PathBuf,
    },
    /// Writing an export file failed
    Export(io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPrimaryTable { path } => write!(
                f,
                "primary character table {} is missing or empty",
                path.display()
            ),
            Self::Export(e) => write!(f, "export failed: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Export(e) => Some(e),
            Self::EmptyPrimaryTable { .. } => None,
        }
    }
}
