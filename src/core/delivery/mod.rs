//! Artifact delivery and cleanup
//!
//! Routes a finished export artifact to its destination and reclaims the
//! temporary file once the recipient has consumed it.

pub mod coordinator;

pub use coordinator::{DeliveryCoordinator, DeliveryHandle, DeliveryOutcome};
