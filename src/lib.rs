// Porter - Ledger Export Orchestration Tool
// Copyright (c) 2025 Porter Contributors
// Licensed under the MIT License

//! # Porter - Ledger Export Orchestration
//!
//! Porter turns a confirmed export request for financial-ledger data into a
//! one-shot, asynchronous export job that produces a file in an interchange
//! format (QIF or OFX), hands the file off to its destination, and cleans up
//! afterward.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Capturing** user export choices as an immutable [`domain::ExportRequest`]
//! - **Deriving** the canonical, deterministic output filename
//! - **Dispatching** the export as a single-flight asynchronous job
//! - **Delivering** the artifact to durable storage or an external recipient,
//!   then reclaiming the temporary file
//!
//! The byte-level interchange formats, the presentation layer that collects
//! choices, and the ledger store itself are external collaborators plugged
//! in through the traits in [`adapters`].
//!
//! ## Architecture
//!
//! Porter follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export dispatch, delivery, filename policy)
//! - [`adapters`] - External capability seams (exporters, ledger, hand-off)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use porter::adapters::exporter::ExporterRegistry;
//! use porter::core::export::ExportDispatcher;
//! use porter::domain::{ExportFormat, ExportRequest};
//! use chrono::Local;
//! use std::sync::Arc;
//!
//! # async fn example(
//! #     registry: ExporterRegistry,
//! #     ledger: Arc<dyn porter::adapters::ledger::LedgerStore>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! // Build the immutable request at the boundary
//! let request = ExportRequest::build(
//!     ExportFormat::Qif,
//!     false,          // export all transactions
//!     false,          // delete transactions after export
//!     0,              // destination index: 0 = sharing
//!     "/exports",
//!     Local::now(),
//! )?;
//!
//! // Submit the single-flight asynchronous job
//! let dispatcher = ExportDispatcher::new(Arc::new(registry), ledger);
//! let mut job = dispatcher.submit(request)?;
//!
//! // Await the terminal state
//! let state = job.wait().await;
//! println!("export finished: {state:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Porter uses the [`domain::PorterError`] type for all errors:
//!
//! ```rust
//! use porter::domain::{PorterError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     Err(PorterError::Configuration("unknown format".to_string()))
//! }
//! ```
//!
//! ## Logging
//!
//! Porter uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting export");
//! warn!(artifact = "/exports/a.qif", "Cleanup failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
