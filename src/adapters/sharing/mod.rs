//! Artifact hand-off abstraction

use crate::domain::errors::DeliveryError;
use async_trait::async_trait;
use std::path::Path;

/// Presents an export artifact to an external recipient
///
/// The concrete mechanism (an application chooser, a share sheet, a drop
/// directory watched by another process) lives in the host application.
/// Porter hands the artifact over and later learns the outcome through
/// [`DeliveryCoordinator::on_delivery_outcome`](crate::core::delivery::DeliveryCoordinator::on_delivery_outcome).
#[async_trait]
pub trait ShareSink: Send + Sync {
    /// Offers the artifact to the external recipient
    ///
    /// Returning `Ok` means the hand-off mechanism accepted the artifact,
    /// not that the recipient consumed it; consumption is reported later
    /// through the delivery outcome.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] if the hand-off mechanism is unavailable.
    async fn hand_off(&self, artifact: &Path) -> Result<(), DeliveryError>;
}
