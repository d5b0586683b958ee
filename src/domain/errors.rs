//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! [`ExportError`] is `Clone` because a job's terminal state carries it.

use std::path::PathBuf;
use thiserror::Error;

/// Main Porter error type
///
/// This is the primary error type used throughout the crate. It wraps the
/// stage-specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PorterError {
    /// Configuration-related errors (unresolvable output directory,
    /// unknown format, invalid config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors reported while producing the export artifact
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Errors reported while delivering the export artifact
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors reported by an exporter or the export worker
///
/// These surface through a job's terminal state and are never retried
/// automatically: an export is not idempotent against partial ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Another export job is currently running on this dispatcher
    #[error("An export is already running; try again once it completes")]
    Busy,

    /// The exporter failed to read or write data
    #[error("Export I/O failure: {0}")]
    Io(String),

    /// The exporter failed to encode ledger data in the requested format
    #[error("Export encoding failure: {0}")]
    Encoding(String),

    /// There were no ledger records to export
    #[error("No transactions to export")]
    EmptyDataset,

    /// The post-export purge of exported ledger records failed
    #[error("Failed to purge exported transactions (artifact kept at {}): {reason}", .artifact.display())]
    LedgerPurge {
        /// Path of the artifact that was written before the purge attempt
        artifact: PathBuf,
        /// Underlying failure description
        reason: String,
    },
}

/// Errors reported while handing an artifact to its destination
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The external hand-off mechanism is unavailable
    #[error("Hand-off mechanism unavailable: {0}")]
    Unavailable(String),

    /// The artifact is no longer at its expected path
    #[error("Export artifact missing at {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// The job has not reached a successful terminal state
    #[error("Export job has not completed successfully")]
    JobNotFinished,

    /// The delivery handle was already resolved; resolution is terminal
    #[error("Delivery handle already resolved")]
    AlreadyResolved,
}

/// Record of a failed post-delivery cleanup
///
/// Cleanup is best-effort: the warning is logged and kept for diagnostics
/// but never escalated to the caller, since the export itself succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupWarning {
    /// Artifact that could not be deleted
    pub artifact: PathBuf,

    /// Why deletion failed
    pub reason: String,
}

impl CleanupWarning {
    /// Creates a new cleanup warning
    pub fn new(artifact: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            reason: reason.into(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PorterError {
    fn from(err: std::io::Error) -> Self {
        PorterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PorterError {
    fn from(err: serde_json::Error) -> Self {
        PorterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PorterError {
    fn from(err: toml::de::Error) -> Self {
        PorterError::Configuration(format!("TOML parse error: {err}"))
    }
}
