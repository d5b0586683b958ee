//! Domain models and types for Porter.
//!
//! This module contains the core domain types and business rules:
//!
//! - **Value enums** ([`ExportFormat`], [`ExportTarget`]) with stable,
//!   policy-level mappings (format to extension, destination index to target)
//! - **The immutable export request** ([`ExportRequest`]), constructed once
//!   per user confirmation at a single boundary
//! - **Error types** ([`PorterError`], [`ExportError`], [`DeliveryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, PorterError>`]:
//!
//! ```
//! use porter::domain::{PorterError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(PorterError::Configuration("unknown format".to_string()))
//! }
//! ```

pub mod errors;
pub mod format;
pub mod request;
pub mod result;
pub mod target;

// Re-export commonly used types for convenience
pub use errors::{CleanupWarning, DeliveryError, ExportError, PorterError};
pub use format::ExportFormat;
pub use request::ExportRequest;
pub use result::Result;
pub use target::ExportTarget;
