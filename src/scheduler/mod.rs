// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Background execution of submitted operations.
//!
//! ```text
//! submit(op, &context)            returns immediately
//!   clone context (snapshot)
//!   in-flight += 1  ----------->  watch::Sender<usize>  --> busy_signal()
//!   TaskTracker::spawn
//!     sequencer.run(op)
//!     Init completed + remote URL --> sequencer.run(AddRemote)
//!   in-flight -= 1 (guard drop)
//!   --> OperationHandle::join() -> Vec<OperationResult>
//! ```
//!
//! Submissions are independent tasks: nothing serializes two operations on
//! the same repository. There is no cancellation; a running command is only
//! stopped by its timeout.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{debug, error};

use crate::operation::{Operation, OperationResult, OperationSequencer, WorkingContext};

/// Decrements the in-flight count when the task ends, panicking or not.
struct BusyGuard {
    in_flight: Arc<watch::Sender<usize>>,
}

impl BusyGuard {
    fn enter(in_flight: &Arc<watch::Sender<usize>>) -> Self {
        in_flight.send_modify(|count| *count += 1);
        Self {
            in_flight: Arc::clone(in_flight),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight
            .send_modify(|count| *count = count.saturating_sub(1));
    }
}

/// Handle to one submission.
#[derive(Debug)]
pub struct OperationHandle {
    operation: Operation,
    task: JoinHandle<Vec<OperationResult>>,
}

impl OperationHandle {
    /// Operation that was submitted.
    #[must_use]
    pub const fn operation(&self) -> &Operation {
        &self.operation
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the submission and returns its results: one, or two when
    /// `Init` chained into `AddRemote`.
    ///
    /// Returns an empty list if the task panicked.
    pub async fn join(self) -> Vec<OperationResult> {
        match self.task.await {
            Ok(results) => results,
            Err(e) => {
                error!(operation = %self.operation, error = %e, "operation task failed");
                Vec::new()
            }
        }
    }
}

/// Runs each submitted operation on its own tokio task.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TaskScheduler {
    sequencer: OperationSequencer,
    tracker: TaskTracker,
    in_flight: Arc<watch::Sender<usize>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new(sequencer: OperationSequencer) -> Self {
        let (in_flight, _) = watch::channel(0);
        Self {
            sequencer,
            tracker: TaskTracker::new(),
            in_flight: Arc::new(in_flight),
        }
    }

    #[must_use]
    pub const fn sequencer(&self) -> &OperationSequencer {
        &self.sequencer
    }

    /// Starts `operation` in the background on a snapshot of `context`.
    ///
    /// Later changes to the caller's context do not affect this submission.
    pub fn submit(&self, operation: Operation, context: &WorkingContext) -> OperationHandle {
        let snapshot = context.clone();
        let sequencer = self.sequencer.clone();
        let guard = BusyGuard::enter(&self.in_flight);
        debug!(operation = %operation, in_flight = *self.in_flight.borrow(), "submitted");

        let submitted = operation.clone();
        let task = self.tracker.spawn(async move {
            let _guard = guard;
            let first = sequencer.run(&submitted, &snapshot).await;
            let chain = submitted == Operation::Init
                && first.is_completed()
                && snapshot.remote_url().is_some();

            let mut results = vec![first];
            if chain {
                debug!("repository initialized, linking remote");
                results.push(sequencer.run(&Operation::AddRemote, &snapshot).await);
            }
            results
        });

        OperationHandle { operation, task }
    }

    /// Number of submissions still running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        *self.in_flight.borrow()
    }

    /// Whether at least one submission is running.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.in_flight() > 0
    }

    /// Receiver of the in-flight count; changes on every start and finish.
    #[must_use]
    pub fn busy_signal(&self) -> watch::Receiver<usize> {
        self.in_flight.subscribe()
    }

    /// Waits until no submission is running.
    ///
    /// The count sender lives as long as `self`, so the wait cannot fail.
    pub async fn wait_idle(&self) {
        let mut signal = self.busy_signal();
        signal.wait_for(|count| *count == 0).await.ok();
    }

    /// Closes the tracker and waits for every spawned task, including ones
    /// whose handles were dropped.
    pub async fn shutdown(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}
