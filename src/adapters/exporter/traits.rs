//! Exporter abstraction
//!
//! This module defines the trait that format encoders must implement to
//! work with Porter. The byte-level interchange formats themselves live in
//! the host application; Porter only orchestrates around them.

use crate::domain::errors::ExportError;
use crate::domain::format::ExportFormat;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Serializes ledger data to a file in one interchange format
///
/// Implementations write the complete artifact to `path` or fail without
/// leaving a partial file behind where possible. Porter never retries a
/// failed export.
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Exports ledger data to `path` in the given format
    ///
    /// # Arguments
    ///
    /// * `path` - Absolute path the artifact must be written to
    /// * `format` - Format this exporter was registered for
    /// * `all_transactions` - Include previously-exported records as well
    ///   as new ones
    ///
    /// # Returns
    ///
    /// The final artifact path (normally `path` itself).
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] on I/O failure, encoding failure, or an
    /// empty dataset.
    async fn export_to(
        &self,
        path: &Path,
        format: ExportFormat,
        all_transactions: bool,
    ) -> Result<PathBuf, ExportError>;
}
