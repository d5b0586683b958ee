//! Delivery coordination and post-delivery cleanup
//!
//! Once a job succeeds, the artifact is routed to its destination. Durable
//! storage needs nothing beyond confirming the file is still there; the
//! sharing path hands the file to an external recipient and waits for the
//! caller to report the outcome, after which the temporary artifact is
//! deleted.

use crate::adapters::sharing::ShareSink;
use crate::core::export::job::{ExportJob, JobState};
use crate::domain::errors::{CleanupWarning, DeliveryError};
use crate::domain::result::Result;
use crate::domain::target::ExportTarget;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Outcome reported by the external recipient of a shared artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The recipient finished with the artifact, successfully or not;
    /// the temporary file can be reclaimed
    Consumed,
    /// The recipient never took the artifact; the file is left in place
    Dismissed,
}

/// Resolution state of a delivery
///
/// `Resolved` is terminal; there is no state machine beyond these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandleState {
    AwaitingOutcome,
    Resolved,
}

/// Handle for one delivery of an export artifact
///
/// Returned by [`DeliveryCoordinator::deliver`]. Sharing deliveries await an
/// outcome from the external recipient; durable-storage deliveries are
/// resolved immediately since no cleanup will ever follow.
#[derive(Debug)]
pub struct DeliveryHandle {
    artifact: PathBuf,
    target: ExportTarget,
    state: HandleState,
    cleanup_warning: Option<CleanupWarning>,
}

impl DeliveryHandle {
    /// Artifact path this delivery covers
    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    /// Destination this delivery was routed to
    pub fn target(&self) -> ExportTarget {
        self.target
    }

    /// Whether the delivery has been resolved
    pub fn is_resolved(&self) -> bool {
        self.state == HandleState::Resolved
    }

    /// Cleanup failure recorded during resolution, if any
    pub fn cleanup_warning(&self) -> Option<&CleanupWarning> {
        self.cleanup_warning.as_ref()
    }
}

/// Routes finished export artifacts to their destination
pub struct DeliveryCoordinator {
    sink: Arc<dyn ShareSink>,
}

impl DeliveryCoordinator {
    /// Creates a coordinator over the given hand-off mechanism
    pub fn new(sink: Arc<dyn ShareSink>) -> Self {
        Self { sink }
    }

    /// Delivers a succeeded job's artifact to its destination
    ///
    /// For durable storage the artifact is already where it belongs; the
    /// returned handle is resolved and the file is never cleaned up. For
    /// sharing, the artifact is offered to the hand-off mechanism and the
    /// caller must later resolve the returned handle with
    /// [`on_delivery_outcome`](Self::on_delivery_outcome).
    ///
    /// # Errors
    ///
    /// Returns a delivery error if the job has not succeeded, the artifact
    /// is missing, or the hand-off mechanism is unavailable.
    pub async fn deliver(&self, job: &ExportJob) -> Result<DeliveryHandle> {
        let artifact = match job.state() {
            JobState::Succeeded { artifact } => artifact,
            _ => return Err(DeliveryError::JobNotFinished.into()),
        };

        if !artifact.exists() {
            return Err(DeliveryError::ArtifactMissing(artifact).into());
        }

        let target = job.request().target();
        match target {
            ExportTarget::SdCard => {
                tracing::info!(
                    artifact = %artifact.display(),
                    "Artifact persisted to durable storage"
                );
                Ok(DeliveryHandle {
                    artifact,
                    target,
                    state: HandleState::Resolved,
                    cleanup_warning: None,
                })
            }
            ExportTarget::Sharing => {
                self.sink.hand_off(&artifact).await?;
                tracing::info!(
                    artifact = %artifact.display(),
                    "Artifact handed off; awaiting delivery outcome"
                );
                Ok(DeliveryHandle {
                    artifact,
                    target,
                    state: HandleState::AwaitingOutcome,
                    cleanup_warning: None,
                })
            }
        }
    }

    /// Resolves a delivery with the outcome reported by the recipient
    ///
    /// On [`DeliveryOutcome::Consumed`] the artifact file is deleted
    /// unconditionally. Deletion is best-effort: a failure is recorded on
    /// the handle and logged, never escalated and never retried - the
    /// artifact lives in a location the system is allowed to reclaim.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::AlreadyResolved`] if the handle was resolved
    /// before; resolution is terminal.
    pub fn on_delivery_outcome(
        &self,
        handle: &mut DeliveryHandle,
        outcome: DeliveryOutcome,
    ) -> Result<()> {
        if handle.state == HandleState::Resolved {
            return Err(DeliveryError::AlreadyResolved.into());
        }

        match outcome {
            DeliveryOutcome::Consumed => {
                if let Err(e) = fs::remove_file(&handle.artifact) {
                    let warning = CleanupWarning::new(handle.artifact.clone(), e.to_string());
                    tracing::warn!(
                        artifact = %warning.artifact.display(),
                        reason = %warning.reason,
                        "Failed to delete export artifact after delivery"
                    );
                    handle.cleanup_warning = Some(warning);
                } else {
                    tracing::debug!(
                        artifact = %handle.artifact.display(),
                        "Deleted export artifact after delivery"
                    );
                }
            }
            DeliveryOutcome::Dismissed => {
                tracing::debug!(
                    artifact = %handle.artifact.display(),
                    "Delivery dismissed; artifact left in place"
                );
            }
        }

        handle.state = HandleState::Resolved;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::job::JobState;
    use crate::domain::{ExportFormat, ExportRequest, PorterError};
    use std::path::Path;
    use tokio::sync::watch;

    struct AcceptingSink;

    #[async_trait::async_trait]
    impl ShareSink for AcceptingSink {
        async fn hand_off(&self, _artifact: &Path) -> std::result::Result<(), DeliveryError> {
            Ok(())
        }
    }

    struct UnavailableSink;

    #[async_trait::async_trait]
    impl ShareSink for UnavailableSink {
        async fn hand_off(&self, _artifact: &Path) -> std::result::Result<(), DeliveryError> {
            Err(DeliveryError::Unavailable("no chooser".to_string()))
        }
    }

    fn succeeded_job(artifact: &Path, target: ExportTarget) -> (ExportJob, watch::Sender<JobState>) {
        let request = ExportRequest::new(
            ExportFormat::Qif,
            false,
            false,
            artifact.to_path_buf(),
            target,
        )
        .unwrap();
        let (tx, rx) = watch::channel(JobState::Succeeded {
            artifact: artifact.to_path_buf(),
        });
        (ExportJob::new(request, rx), tx)
    }

    fn artifact_in(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("20130101_000000_gnucash_all.qif");
        fs::write(&path, "!Type:Bank\n").unwrap();
        path
    }

    #[tokio::test]
    async fn test_deliver_requires_succeeded_job() {
        let request = ExportRequest::new(
            ExportFormat::Qif,
            false,
            false,
            "/tmp/20130101_000000_gnucash_all.qif",
            ExportTarget::Sharing,
        )
        .unwrap();
        let (_tx, rx) = watch::channel(JobState::Running);
        let job = ExportJob::new(request, rx);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let result = coordinator.deliver(&job).await;

        assert!(matches!(
            result,
            Err(PorterError::Delivery(DeliveryError::JobNotFinished))
        ));
    }

    #[tokio::test]
    async fn test_sd_card_delivery_is_resolved_immediately() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = artifact_in(&dir);
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::SdCard);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let handle = coordinator.deliver(&job).await.unwrap();

        assert!(handle.is_resolved());
        assert!(artifact.exists());
    }

    #[tokio::test]
    async fn test_sharing_delivery_awaits_outcome() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = artifact_in(&dir);
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::Sharing);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let handle = coordinator.deliver(&job).await.unwrap();

        assert!(!handle.is_resolved());
        assert!(artifact.exists());
    }

    #[tokio::test]
    async fn test_unavailable_sink_is_delivery_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = artifact_in(&dir);
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::Sharing);

        let coordinator = DeliveryCoordinator::new(Arc::new(UnavailableSink));
        let result = coordinator.deliver(&job).await;

        assert!(matches!(
            result,
            Err(PorterError::Delivery(DeliveryError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn test_missing_artifact_is_delivery_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = dir.path().join("20130101_000000_gnucash_all.qif");
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::Sharing);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let result = coordinator.deliver(&job).await;

        assert!(matches!(
            result,
            Err(PorterError::Delivery(DeliveryError::ArtifactMissing(_)))
        ));
    }

    #[tokio::test]
    async fn test_consumed_outcome_deletes_artifact() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = artifact_in(&dir);
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::Sharing);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let mut handle = coordinator.deliver(&job).await.unwrap();
        coordinator
            .on_delivery_outcome(&mut handle, DeliveryOutcome::Consumed)
            .unwrap();

        assert!(handle.is_resolved());
        assert!(!artifact.exists());
        assert!(handle.cleanup_warning().is_none());
    }

    #[tokio::test]
    async fn test_dismissed_outcome_keeps_artifact() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = artifact_in(&dir);
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::Sharing);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let mut handle = coordinator.deliver(&job).await.unwrap();
        coordinator
            .on_delivery_outcome(&mut handle, DeliveryOutcome::Dismissed)
            .unwrap();

        assert!(handle.is_resolved());
        assert!(artifact.exists());
    }

    #[tokio::test]
    async fn test_failed_cleanup_records_warning() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = artifact_in(&dir);
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::Sharing);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let mut handle = coordinator.deliver(&job).await.unwrap();

        // Delete out from under the coordinator so cleanup fails.
        fs::remove_file(&artifact).unwrap();
        coordinator
            .on_delivery_outcome(&mut handle, DeliveryOutcome::Consumed)
            .unwrap();

        assert!(handle.is_resolved());
        let warning = handle.cleanup_warning().unwrap();
        assert_eq!(warning.artifact, artifact);
    }

    #[tokio::test]
    async fn test_second_resolution_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifact = artifact_in(&dir);
        let (job, _tx) = succeeded_job(&artifact, ExportTarget::Sharing);

        let coordinator = DeliveryCoordinator::new(Arc::new(AcceptingSink));
        let mut handle = coordinator.deliver(&job).await.unwrap();
        coordinator
            .on_delivery_outcome(&mut handle, DeliveryOutcome::Consumed)
            .unwrap();

        let second = coordinator.on_delivery_outcome(&mut handle, DeliveryOutcome::Consumed);
        assert!(matches!(
            second,
            Err(PorterError::Delivery(DeliveryError::AlreadyResolved))
        ));
    }
}
