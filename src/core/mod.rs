//! Core business logic for Porter.
//!
//! This module contains the orchestration around producing and delivering a
//! ledger export artifact.
//!
//! # Modules
//!
//! - [`export`] - filename policy, job state machine, single-flight dispatch
//! - [`delivery`] - destination hand-off and post-delivery cleanup
//!
//! # Export Workflow
//!
//! 1. **Build request**: resolve preferences and selections into an
//!    immutable [`ExportRequest`](crate::domain::ExportRequest)
//! 2. **Submit**: [`ExportDispatcher::submit`](export::ExportDispatcher::submit)
//!    starts the asynchronous job; the caller never blocks
//! 3. **Export**: the worker runs the format encoder and, on success, the
//!    optional ledger purge - strictly in that order
//! 4. **Deliver**: [`DeliveryCoordinator::deliver`](delivery::DeliveryCoordinator::deliver)
//!    routes the artifact to durable storage or the hand-off mechanism
//! 5. **Resolve**: once the recipient reports consumption, the artifact is
//!    deleted; a failed deletion is recorded and swallowed
//!
//! # Example
//!
//! ```no_run
//! use porter::adapters::exporter::ExporterRegistry;
//! use porter::core::delivery::{DeliveryCoordinator, DeliveryOutcome};
//! use porter::core::export::ExportDispatcher;
//! use porter::domain::{ExportFormat, ExportRequest};
//! use chrono::Local;
//! use std::sync::Arc;
//!
//! # async fn example(
//! #     registry: ExporterRegistry,
//! #     ledger: Arc<dyn porter::adapters::ledger::LedgerStore>,
//! #     sink: Arc<dyn porter::adapters::sharing::ShareSink>,
//! # ) -> porter::domain::Result<()> {
//! let dispatcher = ExportDispatcher::new(Arc::new(registry), ledger);
//! let request = ExportRequest::build(
//!     ExportFormat::Qif,
//!     false,
//!     false,
//!     0,
//!     "/exports",
//!     Local::now(),
//! )?;
//!
//! let mut job = dispatcher.submit(request)?;
//! job.wait().await;
//!
//! let coordinator = DeliveryCoordinator::new(sink);
//! let mut handle = coordinator.deliver(&job).await?;
//! coordinator.on_delivery_outcome(&mut handle, DeliveryOutcome::Consumed)?;
//! # Ok(())
//! # }
//! ```

pub mod delivery;
pub mod export;
