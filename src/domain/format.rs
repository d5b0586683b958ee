//! Interchange format selection
//!
//! Porter treats the interchange formats as opaque tags; the actual byte-level
//! encoding is owned by the [`Exporter`](crate::adapters::exporter::Exporter)
//! implementations registered by the host application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interchange file format for exported ledger data
///
/// Each format maps to exactly one file extension; no two formats share one.
///
/// # Examples
///
/// ```
/// use porter::domain::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("qif").unwrap();
/// assert_eq!(format.extension(), "qif");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Quicken Interchange Format
    Qif,
    /// Open Financial Exchange
    Ofx,
}

impl ExportFormat {
    /// All supported formats, in presentation order
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Qif, ExportFormat::Ofx];

    /// Returns the file extension for this format, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Qif => "qif",
            ExportFormat::Ofx => "ofx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "qif" => Ok(ExportFormat::Qif),
            "ofx" => Ok(ExportFormat::Ofx),
            other => Err(format!(
                "Unknown export format '{other}'. Must be one of: qif, ofx"
            )),
        }
    }
}
