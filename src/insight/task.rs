use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::{info, warn};

use super::{InsightProvider, FALLBACK_MESSAGE};
use crate::error::InsightError;
use crate::models::Category;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum InsightStatus {
    #[default]
    Idle,
    Pending,
    Ready(String),
    Failed(String),
}

impl InsightStatus {
    fn from_result(result: Result<String, InsightError>) -> Self {
        match result {
            Ok(text) => {
                info!("Insight ready");
                Self::Ready(text)
            }
            Err(e) => {
                warn!(error = %e, "Insight request failed");
                Self::Failed(FALLBACK_MESSAGE.to_string())
            }
        }
    }
}

/// A single in-flight insight request running on a worker thread.
pub(crate) struct InsightTask {
    rx: Receiver<Result<String, InsightError>>,
}

impl InsightTask {
    pub(crate) fn spawn(provider: Arc<dyn InsightProvider>, categories: Vec<Category>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = provider.generate(&categories);
            // The receiver is gone if the session ended first; nothing to do.
            let _ = tx.send(result);
        });
        Self { rx }
    }

    /// Non-blocking check. `None` while the worker is still running.
    pub(crate) fn poll(&self) -> Option<InsightStatus> {
        match self.rx.try_recv() {
            Ok(result) => Some(InsightStatus::from_result(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(InsightStatus::from_result(Err(InsightError::Disconnected)))
            }
        }
    }

    /// Block until the worker replies.
    pub(crate) fn wait(self) -> InsightStatus {
        let result = self.rx.recv().unwrap_or(Err(InsightError::Disconnected));
        InsightStatus::from_result(result)
    }
}

/// Drives the Idle → Pending → Ready/Failed cycle, allowing at most one
/// request in flight.
pub(crate) struct Insights {
    provider: Arc<dyn InsightProvider>,
    status: InsightStatus,
    task: Option<InsightTask>,
}

impl Insights {
    pub(crate) fn new(provider: Arc<dyn InsightProvider>) -> Self {
        Self {
            provider,
            status: InsightStatus::Idle,
            task: None,
        }
    }

    pub(crate) fn status(&self) -> &InsightStatus {
        &self.status
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.task.is_some()
    }

    pub(crate) fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Start a request for a snapshot of `categories`. Returns `false` and
    /// does nothing if one is already pending.
    pub(crate) fn request(&mut self, categories: &[Category]) -> bool {
        if self.is_pending() {
            return false;
        }
        info!(provider = self.provider.name(), "Insight requested");
        self.task = Some(InsightTask::spawn(
            Arc::clone(&self.provider),
            categories.to_vec(),
        ));
        self.status = InsightStatus::Pending;
        true
    }

    /// Collect a finished request. Returns `true` exactly once per request,
    /// on the call that moves the status to Ready or Failed.
    pub(crate) fn poll(&mut self) -> bool {
        let Some(task) = &self.task else {
            return false;
        };
        match task.poll() {
            Some(status) => {
                self.status = status;
                self.task = None;
                true
            }
            None => false,
        }
    }
}
