// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presentation-facing session.
//!
//! ```text
//! Session
//!   context  (WorkingContext, edited by the front-end)
//!   sink     (ReportSink, whole-session log)
//!   scheduler
//!     submit(op) --> snapshot of context --> OperationHandle
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::config::types::GitConfig;
use crate::operation::{Operation, OperationSequencer, WorkingContext};
use crate::report::{EntryKind, ReportEntry, ReportSink, ReportSubscription};
use crate::runner::CommandRunner;
use crate::scheduler::{OperationHandle, TaskScheduler};

/// One front-end session: its context, its report log and its scheduler.
#[derive(Debug)]
pub struct Session {
    context: WorkingContext,
    sink: ReportSink,
    scheduler: TaskScheduler,
}

impl Session {
    /// Session spawning real git processes as configured.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut session = Self::with_runner(
            CommandRunner::system(config.git.timeout()),
            config.git.clone(),
        );
        session.context = WorkingContext::from_defaults(&config.context);
        session
    }

    #[must_use]
    pub fn with_runner(runner: CommandRunner, git: GitConfig) -> Self {
        let sink = ReportSink::new();
        let sequencer = OperationSequencer::new(runner, Arc::new(git), sink.clone());
        Self {
            context: WorkingContext::default(),
            sink,
            scheduler: TaskScheduler::new(sequencer),
        }
    }

    #[must_use]
    pub const fn context(&self) -> &WorkingContext {
        &self.context
    }

    /// Mutable access for front-end edits. Running submissions keep their
    /// own snapshot.
    pub const fn context_mut(&mut self) -> &mut WorkingContext {
        &mut self.context
    }

    /// Selects the repository directory and reports it.
    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.context.set_directory(directory);
        self.announce_context();
    }

    /// Reports the selected directory, if any, as an info entry.
    pub fn announce_context(&self) {
        if let Some(dir) = self.context.directory() {
            self.sink.append(ReportEntry::info(
                EntryKind::Context,
                format!("Selected directory: {}", dir.display()),
            ));
        }
    }

    #[must_use]
    pub const fn sink(&self) -> &ReportSink {
        &self.sink
    }

    #[must_use]
    pub const fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    /// Live view of the report log from its current end.
    #[must_use]
    pub fn subscribe(&self) -> ReportSubscription {
        self.sink.subscribe()
    }

    /// Submits `operation` against the current context.
    pub fn submit(&self, operation: Operation) -> OperationHandle {
        self.scheduler.submit(operation, &self.context)
    }

    #[must_use]
    pub fn busy(&self) -> bool {
        self.scheduler.busy()
    }

    /// Waits for every submission, then closes the report log.
    pub async fn finish(&self) {
        self.scheduler.shutdown().await;
        self.sink.close();
    }
}

#[cfg(test)]
mod tests;
