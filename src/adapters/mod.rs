//! External capability seams for Porter.
//!
//! Porter orchestrates exports; the work at the edges is done by
//! capabilities the host application plugs in:
//!
//! - [`exporter`] - format encoders ([`Exporter`](exporter::Exporter)) and
//!   the per-format [`ExporterRegistry`](exporter::ExporterRegistry)
//! - [`ledger`] - the ledger record store
//!   ([`LedgerStore`](ledger::LedgerStore))
//! - [`sharing`] - the artifact hand-off mechanism
//!   ([`ShareSink`](sharing::ShareSink))
//!
//! All seams are `async_trait` objects so tests can substitute stubs and
//! hosts can wire in whatever backs them.

pub mod exporter;
pub mod ledger;
pub mod sharing;
