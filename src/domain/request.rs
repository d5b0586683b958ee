//! Immutable export request
//!
//! An [`ExportRequest`] captures every user-supplied export choice at a single
//! boundary. It is constructed once per confirmation, handed to the
//! dispatcher, and discarded after the job it describes completes. No core
//! component reads presentation state or preference storage directly; the
//! caller resolves those and passes plain values in.

use crate::core::export::filename::build_export_filename;
use crate::domain::errors::PorterError;
use crate::domain::format::ExportFormat;
use crate::domain::result::Result;
use crate::domain::target::ExportTarget;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable record of one export confirmation
///
/// Invariant: `target_filepath` is non-empty and carries the extension of
/// `format`; the dispatcher never regenerates the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    format: ExportFormat,
    export_all_transactions: bool,
    delete_transactions_after_export: bool,
    target_filepath: PathBuf,
    target: ExportTarget,
}

impl ExportRequest {
    /// Creates a request from an already-computed target path
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the path is empty or its extension
    /// does not match the requested format.
    pub fn new(
        format: ExportFormat,
        export_all_transactions: bool,
        delete_transactions_after_export: bool,
        target_filepath: impl Into<PathBuf>,
        target: ExportTarget,
    ) -> Result<Self> {
        let target_filepath = target_filepath.into();

        if target_filepath.as_os_str().is_empty() {
            return Err(PorterError::Configuration(
                "Target filepath cannot be empty".to_string(),
            ));
        }

        let extension = target_filepath
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if extension != format.extension() {
            return Err(PorterError::Configuration(format!(
                "Target filepath {} does not match format extension '{}'",
                target_filepath.display(),
                format.extension()
            )));
        }

        Ok(Self {
            format,
            export_all_transactions,
            delete_transactions_after_export,
            target_filepath,
            target,
        })
    }

    /// Builds a request from raw user selections and a base output directory
    ///
    /// This is the single boundary where preference defaults and selections
    /// become an immutable request. The target path is the base directory
    /// joined with the canonical export filename for `now`; the destination
    /// index is mapped positionally (0 is sharing, everything else durable
    /// storage).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base directory cannot be
    /// resolved to an existing directory.
    pub fn build(
        format: ExportFormat,
        export_all_transactions: bool,
        delete_transactions_after_export: bool,
        destination_index: usize,
        base_dir: impl AsRef<Path>,
        now: DateTime<Local>,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref();

        if base_dir.as_os_str().is_empty() {
            return Err(PorterError::Configuration(
                "Export base directory is not set".to_string(),
            ));
        }

        let base_dir = fs::canonicalize(base_dir).map_err(|e| {
            PorterError::Configuration(format!(
                "Cannot resolve export base directory {}: {}",
                base_dir.display(),
                e
            ))
        })?;

        let target_filepath = base_dir.join(build_export_filename(format, now));

        Self::new(
            format,
            export_all_transactions,
            delete_transactions_after_export,
            target_filepath,
            ExportTarget::from_destination_index(destination_index),
        )
    }

    /// Interchange format to produce
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Whether previously-exported records are included as well as new ones
    pub fn export_all_transactions(&self) -> bool {
        self.export_all_transactions
    }

    /// Whether the underlying ledger records are purged after a successful
    /// export
    pub fn delete_transactions_after_export(&self) -> bool {
        self.delete_transactions_after_export
    }

    /// Absolute path where the exporter must write its output
    pub fn target_filepath(&self) -> &Path {
        &self.target_filepath
    }

    /// Destination for the produced artifact
    pub fn target(&self) -> ExportTarget {
        self.target
    }
}
