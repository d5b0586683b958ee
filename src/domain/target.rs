//! Export destination selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination for a produced export artifact
///
/// `Sharing` hands the file to an external application chooser; `SdCard`
/// persists it to durable device storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportTarget {
    /// Hand the file to another application via a chooser mechanism
    Sharing,
    /// Leave the file in durable device storage
    SdCard,
}

impl ExportTarget {
    /// Maps a destination-chooser position to a target
    ///
    /// Position `0` is the sharing entry; every other position is durable
    /// storage. The destination list is fixed and ordered, so this mapping
    /// is stable policy and must not change.
    pub fn from_destination_index(index: usize) -> Self {
        if index == 0 {
            ExportTarget::Sharing
        } else {
            ExportTarget::SdCard
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportTarget::Sharing => f.write_str("sharing"),
            ExportTarget::SdCard => f.write_str("sd-card"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_index_zero_is_sharing() {
        assert_eq!(
            ExportTarget::from_destination_index(0),
            ExportTarget::Sharing
        );
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(7)]
    #[test_case(usize::MAX)]
    fn test_nonzero_index_is_sd_card(index: usize) {
        assert_eq!(
            ExportTarget::from_destination_index(index),
            ExportTarget::SdCard
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ExportTarget::Sharing.to_string(), "sharing");
        assert_eq!(ExportTarget::SdCard.to_string(), "sd-card");
    }
}
