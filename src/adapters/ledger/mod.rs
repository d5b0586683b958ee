//! Ledger record store abstraction

use crate::domain::errors::ExportError;
use async_trait::async_trait;

/// Owns the underlying ledger records
///
/// Porter only needs one maintenance operation from the ledger: purging the
/// records a just-finished export covered. The export worker invokes this
/// strictly after the exporter reports success, never before or concurrently
/// with the write.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Purges the exported ledger records
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the records cannot be removed; the
    /// already-written artifact is left untouched.
    async fn purge_exported(&self) -> Result<(), ExportError>;
}
