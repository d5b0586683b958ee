//! Exporter registry
//!
//! Maps each [`ExportFormat`] to the [`Exporter`] implementation the host
//! application registered for it. The dispatcher resolves exporters here at
//! submit time; an unregistered format is a configuration error surfaced
//! before any job is created.

use crate::adapters::exporter::traits::Exporter;
use crate::domain::errors::PorterError;
use crate::domain::format::ExportFormat;
use crate::domain::result::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of format encoders
#[derive(Default)]
pub struct ExporterRegistry {
    exporters: HashMap<ExportFormat, Arc<dyn Exporter>>,
}

impl ExporterRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an exporter for a format, replacing any previous one
    pub fn register(&mut self, format: ExportFormat, exporter: Arc<dyn Exporter>) {
        tracing::debug!(format = %format, "Registering exporter");
        self.exporters.insert(format, exporter);
    }

    /// Resolves the exporter for a format
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no exporter is registered for the
    /// format.
    pub fn get(&self, format: ExportFormat) -> Result<Arc<dyn Exporter>> {
        self.exporters.get(&format).cloned().ok_or_else(|| {
            PorterError::Configuration(format!("No exporter registered for format '{format}'"))
        })
    }

    /// Formats with a registered exporter
    pub fn registered_formats(&self) -> Vec<ExportFormat> {
        ExportFormat::ALL
            .into_iter()
            .filter(|format| self.exporters.contains_key(format))
            .collect()
    }
}
