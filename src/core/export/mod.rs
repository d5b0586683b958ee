//! Export orchestration
//!
//! This module provides the core export logic for Porter:
//! - Canonical output filename derivation
//! - The export job state machine
//! - Single-flight asynchronous dispatch

pub mod dispatcher;
pub mod filename;
pub mod job;

pub use dispatcher::ExportDispatcher;
pub use filename::build_export_filename;
pub use job::{ExportJob, JobState};
