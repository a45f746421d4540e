//! Single-shot background fetch of the movie list.
//!
//! The load runs on a tokio runtime; its outcome is handed back over a channel
//! and applied on the thread that owns the controller (the UI thread) when that
//! thread calls [`FetchController::poll`] or [`FetchController::wait`].

use std::{sync::Arc, time::Duration};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use shared::{domain::MovieCollection, error::FetchError};
use tokio::runtime::Handle;
use tracing::{debug, error, info};

use crate::{catalog::MovieSource, error::ControllerError};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Pending,
    Success(MovieCollection),
    Failure(FetchError),
}

impl FetchResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchResult::Pending)
    }

    pub fn movies(&self) -> Option<&MovieCollection> {
        match self {
            FetchResult::Success(movies) => Some(movies),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchResult::Failure(err) => Some(err),
            _ => None,
        }
    }
}

type Outcome = Result<MovieCollection, FetchError>;
type ResultListener = Box<dyn FnOnce(&FetchResult)>;

pub struct FetchController {
    source: Arc<dyn MovieSource>,
    runtime: Handle,
    result: FetchResult,
    started: bool,
    completion_rx: Option<Receiver<Outcome>>,
    listeners: Vec<ResultListener>,
}

impl FetchController {
    pub fn new(source: Arc<dyn MovieSource>, runtime: Handle) -> Self {
        Self {
            source,
            runtime,
            result: FetchResult::Pending,
            started: false,
            completion_rx: None,
            listeners: Vec::new(),
        }
    }

    /// Spawns the load and returns immediately. Only one call is allowed per
    /// controller; the second returns [`ControllerError::InvalidState`].
    pub fn start(&mut self) -> Result<(), ControllerError> {
        if self.started {
            return Err(ControllerError::InvalidState("fetch already started"));
        }
        self.started = true;

        let (tx, rx) = bounded::<Outcome>(1);
        let source = Arc::clone(&self.source);
        self.runtime.spawn(async move {
            let outcome = source.load().await;
            // Receiver is gone only when the screen was dismissed first.
            let _ = tx.send(outcome);
        });
        self.completion_rx = Some(rx);

        debug!("movie fetch started");
        Ok(())
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn current_result(&self) -> &FetchResult {
        &self.result
    }

    /// Registers a listener fired once, when the result leaves `Pending`.
    /// Registering after that point fires it immediately.
    pub fn on_result_changed(&mut self, listener: impl FnOnce(&FetchResult) + 'static) {
        if self.result.is_pending() {
            self.listeners.push(Box::new(listener));
        } else {
            listener(&self.result);
        }
    }

    /// Applies a finished fetch, if there is one. Returns `true` when this call
    /// performed the transition.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.completion_rx.as_ref() else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(task_vanished()),
        };
        self.complete(outcome);
        true
    }

    /// Blocking variant of [`poll`](Self::poll) for consumers without a UI loop.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let Some(rx) = self.completion_rx.as_ref() else {
            return false;
        };
        let outcome = match rx.recv_timeout(timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => Err(task_vanished()),
        };
        self.complete(outcome);
        true
    }

    fn complete(&mut self, outcome: Outcome) {
        self.completion_rx = None;
        self.result = match outcome {
            Ok(movies) => {
                info!(count = movies.len(), "movie list loaded");
                FetchResult::Success(movies)
            }
            Err(err) => {
                error!(kind = ?err.kind(), "movie fetch failed: {}", err.message());
                FetchResult::Failure(err)
            }
        };

        for listener in self.listeners.drain(..) {
            listener(&self.result);
        }
    }
}

fn task_vanished() -> FetchError {
    FetchError::network("fetch task ended without producing a result")
}

#[cfg(test)]
#[path = "tests/fetch_controller_tests.rs"]
mod tests;
