//! Export job state
//!
//! An [`ExportJob`] is the queryable handle for one in-flight export. The
//! worker publishes state transitions through a watch channel; callers
//! sample the current state or await a terminal one. There is no
//! cancellation: once running, the underlying write is not safely
//! interruptible, so a caller may only drop interest in the result.

use crate::domain::errors::ExportError;
use crate::domain::request::ExportRequest;
use std::path::PathBuf;
use tokio::sync::watch;
use uuid::Uuid;

/// State machine for one export job
///
/// `Succeeded` and `Failed` are terminal. A failed job records the error and
/// is never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// Accepted but not yet picked up by the worker
    Pending,
    /// The worker is executing the exporter
    Running,
    /// The exporter finished and the artifact is at the recorded path
    Succeeded {
        /// Final artifact path reported by the exporter
        artifact: PathBuf,
    },
    /// The export failed; the error is recorded, the job is not retried
    Failed {
        /// The failure reported by the exporter or the worker
        error: ExportError,
    },
}

impl JobState {
    /// Whether this state is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Succeeded { .. } | JobState::Failed { .. })
    }
}

/// Handle for one in-flight export
///
/// Created by [`ExportDispatcher::submit`](crate::core::export::ExportDispatcher::submit);
/// dropped once delivery and cleanup finish.
#[derive(Debug)]
pub struct ExportJob {
    id: Uuid,
    request: ExportRequest,
    state: watch::Receiver<JobState>,
}

impl ExportJob {
    pub(crate) fn new(request: ExportRequest, state: watch::Receiver<JobState>) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            state,
        }
    }

    /// Unique identifier of this job
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The request this job was created for
    pub fn request(&self) -> &ExportRequest {
        &self.request
    }

    /// Samples the current job state
    pub fn state(&self) -> JobState {
        self.state.borrow().clone()
    }

    /// Awaits a terminal state and returns it
    ///
    /// If the worker disappears without publishing a terminal state, the
    /// last observed state is returned.
    pub async fn wait(&mut self) -> JobState {
        let current = self.state.borrow().clone();
        if current.is_terminal() {
            return current;
        }

        let terminal = self
            .state
            .wait_for(JobState::is_terminal)
            .await
            .map(|state| state.clone());
        match terminal {
            Ok(state) => state,
            Err(_) => self.state.borrow().clone(),
        }
    }

    /// Artifact path, if the job has succeeded
    pub fn artifact(&self) -> Option<PathBuf> {
        match &*self.state.borrow() {
            JobState::Succeeded { artifact } => Some(artifact.clone()),
            _ => None,
        }
    }
}
