//! Canonical export filename derivation
//!
//! The filename format is a compatibility surface consumed by downstream
//! tooling and must match exactly:
//! `{8-digit date}_{6-digit time}_gnucash_all.{ext}`.

use crate::domain::format::ExportFormat;
use chrono::{DateTime, Local};

/// Timestamp encoding used in export filenames
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Builds the canonical filename for an export produced at `now`
///
/// The timestamp is derived from the instant passed in, never re-sampled,
/// so the function is pure and deterministic. Two calls within the same
/// second-resolution instant produce identical names; that collision window
/// is accepted policy, not a defect.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use porter::core::export::filename::build_export_filename;
/// use porter::domain::ExportFormat;
///
/// let now = Local.with_ymd_and_hms(2013, 9, 25, 14, 23, 1).unwrap();
/// assert_eq!(
///     build_export_filename(ExportFormat::Qif, now),
///     "20130925_142301_gnucash_all.qif"
/// );
/// ```
pub fn build_export_filename(format: ExportFormat, now: DateTime<Local>) -> String {
    format!(
        "{}_gnucash_all.{}",
        now.format(FILENAME_TIMESTAMP_FORMAT),
        format.extension()
    )
}
