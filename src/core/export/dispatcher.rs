//! Export dispatcher - single-flight asynchronous export execution
//!
//! The dispatcher turns a confirmed [`ExportRequest`] into one asynchronous
//! [`ExportJob`]. The caller's thread never blocks: `submit` resolves the
//! exporter, claims the single-flight slot, spawns the worker, and returns
//! immediately with a queryable job handle.

use crate::adapters::exporter::{Exporter, ExporterRegistry};
use crate::adapters::ledger::LedgerStore;
use crate::core::export::job::{ExportJob, JobState};
use crate::domain::errors::ExportError;
use crate::domain::request::ExportRequest;
use crate::domain::result::Result;
use std::sync::Arc;
use tokio::sync::{watch, OwnedSemaphorePermit, Semaphore};

/// Single-flight export dispatcher
///
/// At most one job is RUNNING per dispatcher instance. Submitting while a
/// job is running is rejected with [`ExportError::Busy`] rather than queued:
/// concurrent writes to the same second-resolution default path could
/// corrupt output, and a silently queued export would run against ledger
/// state the user never confirmed.
pub struct ExportDispatcher {
    exporters: Arc<ExporterRegistry>,
    ledger: Arc<dyn LedgerStore>,
    slot: Arc<Semaphore>,
}

impl ExportDispatcher {
    /// Creates a dispatcher over the given exporter registry and ledger
    pub fn new(exporters: Arc<ExporterRegistry>, ledger: Arc<dyn LedgerStore>) -> Self {
        Self {
            exporters,
            ledger,
            slot: Arc::new(Semaphore::new(1)),
        }
    }

    /// Starts an asynchronous export job for a confirmed request
    ///
    /// Configuration problems (an unregistered format) and the busy state
    /// are surfaced synchronously, before any job exists. Everything the
    /// exporter reports surfaces through the job's terminal state instead.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no exporter is registered for the
    /// request's format, or [`ExportError::Busy`] if a job is currently
    /// running.
    pub fn submit(&self, request: ExportRequest) -> Result<ExportJob> {
        let exporter = self.exporters.get(request.format())?;

        let permit = self
            .slot
            .clone()
            .try_acquire_owned()
            .map_err(|_| ExportError::Busy)?;

        let (state_tx, state_rx) = watch::channel(JobState::Pending);
        let job = ExportJob::new(request.clone(), state_rx);

        tracing::info!(
            job_id = %job.id(),
            format = %request.format(),
            target = %request.target(),
            path = %request.target_filepath().display(),
            "Commencing async export of transactions"
        );

        tokio::spawn(run_export(
            request,
            exporter,
            self.ledger.clone(),
            state_tx,
            permit,
        ));

        Ok(job)
    }
}

/// Export worker body
///
/// Runs the exporter and, on success, the optional ledger purge - in that
/// order, never concurrently. The single-flight permit is held for the
/// whole of both steps.
async fn run_export(
    request: ExportRequest,
    exporter: Arc<dyn Exporter>,
    ledger: Arc<dyn LedgerStore>,
    state_tx: watch::Sender<JobState>,
    permit: OwnedSemaphorePermit,
) {
    let _ = state_tx.send(JobState::Running);

    let outcome = exporter
        .export_to(
            request.target_filepath(),
            request.format(),
            request.export_all_transactions(),
        )
        .await;

    let terminal = match outcome {
        Ok(artifact) => {
            if request.delete_transactions_after_export() {
                match ledger.purge_exported().await {
                    Ok(()) => {
                        tracing::info!(
                            artifact = %artifact.display(),
                            "Export succeeded; exported transactions purged"
                        );
                        JobState::Succeeded { artifact }
                    }
                    Err(e) => {
                        tracing::error!(
                            artifact = %artifact.display(),
                            error = %e,
                            "Export artifact written but transaction purge failed"
                        );
                        JobState::Failed {
                            error: ExportError::LedgerPurge {
                                artifact,
                                reason: e.to_string(),
                            },
                        }
                    }
                }
            } else {
                tracing::info!(artifact = %artifact.display(), "Export succeeded");
                JobState::Succeeded { artifact }
            }
        }
        Err(e) => {
            tracing::error!(
                path = %request.target_filepath().display(),
                error = %e,
                "Export failed"
            );
            JobState::Failed { error: e }
        }
    };

    // Release the slot before publishing the terminal state so a caller
    // that observed completion can submit again immediately.
    drop(permit);
    let _ = state_tx.send(terminal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExportFormat, ExportTarget, PorterError};
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubExporter {
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubExporter {
        fn succeeding() -> Self {
            Self {
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Exporter for StubExporter {
        async fn export_to(
            &self,
            path: &Path,
            _format: ExportFormat,
            _all_transactions: bool,
        ) -> std::result::Result<PathBuf, ExportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ExportError::EmptyDataset)
            } else {
                Ok(path.to_path_buf())
            }
        }
    }

    struct CountingLedger {
        purges: AtomicUsize,
    }

    impl CountingLedger {
        fn new() -> Self {
            Self {
                purges: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl LedgerStore for CountingLedger {
        async fn purge_exported(&self) -> std::result::Result<(), ExportError> {
            self.purges.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn request(delete_after: bool) -> ExportRequest {
        ExportRequest::new(
            ExportFormat::Qif,
            false,
            delete_after,
            "/tmp/20130101_000000_gnucash_all.qif",
            ExportTarget::Sharing,
        )
        .unwrap()
    }

    fn dispatcher_with(
        exporter: Arc<StubExporter>,
        ledger: Arc<CountingLedger>,
    ) -> ExportDispatcher {
        let mut registry = ExporterRegistry::new();
        registry.register(ExportFormat::Qif, exporter);
        ExportDispatcher::new(Arc::new(registry), ledger)
    }

    #[tokio::test]
    async fn test_successful_export_records_artifact() {
        let exporter = Arc::new(StubExporter::succeeding());
        let ledger = Arc::new(CountingLedger::new());
        let dispatcher = dispatcher_with(exporter, ledger);

        let mut job = dispatcher.submit(request(false)).unwrap();

        assert_eq!(
            job.wait().await,
            JobState::Succeeded {
                artifact: PathBuf::from("/tmp/20130101_000000_gnucash_all.qif")
            }
        );
    }

    #[tokio::test]
    async fn test_unregistered_format_fails_before_job_creation() {
        let exporter = Arc::new(StubExporter::succeeding());
        let ledger = Arc::new(CountingLedger::new());
        let dispatcher = dispatcher_with(exporter.clone(), ledger);

        let ofx_request = ExportRequest::new(
            ExportFormat::Ofx,
            false,
            false,
            "/tmp/20130101_000000_gnucash_all.ofx",
            ExportTarget::Sharing,
        )
        .unwrap();

        let result = dispatcher.submit(ofx_request);
        assert!(matches!(result, Err(PorterError::Configuration(_))));
        assert_eq!(exporter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_purge_runs_exactly_once_after_success() {
        let exporter = Arc::new(StubExporter::succeeding());
        let ledger = Arc::new(CountingLedger::new());
        let dispatcher = dispatcher_with(exporter, ledger.clone());

        let mut job = dispatcher.submit(request(true)).unwrap();
        let state = job.wait().await;

        assert!(matches!(state, JobState::Succeeded { .. }));
        assert_eq!(ledger.purges.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_purge_never_runs_after_failure() {
        let exporter = Arc::new(StubExporter::failing());
        let ledger = Arc::new(CountingLedger::new());
        let dispatcher = dispatcher_with(exporter, ledger.clone());

        let mut job = dispatcher.submit(request(true)).unwrap();
        let state = job.wait().await;

        assert_eq!(
            state,
            JobState::Failed {
                error: ExportError::EmptyDataset
            }
        );
        assert_eq!(ledger.purges.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_purge_skipped_when_not_requested() {
        let exporter = Arc::new(StubExporter::succeeding());
        let ledger = Arc::new(CountingLedger::new());
        let dispatcher = dispatcher_with(exporter, ledger.clone());

        let mut job = dispatcher.submit(request(false)).unwrap();
        job.wait().await;

        assert_eq!(ledger.purges.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_purge_failure_fails_job_with_artifact_path() {
        struct FailingLedger;

        #[async_trait::async_trait]
        impl LedgerStore for FailingLedger {
            async fn purge_exported(&self) -> std::result::Result<(), ExportError> {
                Err(ExportError::Io("database locked".to_string()))
            }
        }

        let mut registry = ExporterRegistry::new();
        registry.register(ExportFormat::Qif, Arc::new(StubExporter::succeeding()));
        let dispatcher = ExportDispatcher::new(Arc::new(registry), Arc::new(FailingLedger));

        let mut job = dispatcher.submit(request(true)).unwrap();

        match job.wait().await {
            JobState::Failed {
                error: ExportError::LedgerPurge { artifact, .. },
            } => {
                assert_eq!(
                    artifact,
                    PathBuf::from("/tmp/20130101_000000_gnucash_all.qif")
                );
            }
            other => panic!("expected LedgerPurge failure, got {other:?}"),
        }
    }
}
