// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stage-by-stage execution of an operation's plan.

use std::sync::Arc;

use tracing::{debug, info};

use super::plan::plan;
use super::{Operation, OperationResult, OperationStatus, WorkingContext};
use crate::config::types::GitConfig;
use crate::report::{EntryKind, ReportEntry, ReportSink};
use crate::runner::CommandRunner;

/// Runs operations one command at a time and closes each with a summary.
///
/// Stage N+1 starts only once stage N's outcome is known. A failure under
/// `FailurePolicy::Abort` ends the operation; the remaining stages are
/// skipped.
#[derive(Debug, Clone)]
pub struct OperationSequencer {
    runner: CommandRunner,
    git: Arc<GitConfig>,
    sink: ReportSink,
}

impl OperationSequencer {
    #[must_use]
    pub const fn new(runner: CommandRunner, git: Arc<GitConfig>, sink: ReportSink) -> Self {
        Self { runner, git, sink }
    }

    #[must_use]
    pub const fn sink(&self) -> &ReportSink {
        &self.sink
    }

    #[must_use]
    pub fn git_config(&self) -> &GitConfig {
        &self.git
    }

    pub async fn run(&self, operation: &Operation, context: &WorkingContext) -> OperationResult {
        let log = self.sink.labeled(operation.label());

        let commands = match plan(operation, context, &self.git) {
            Ok(commands) => commands,
            Err(e) => {
                info!(operation = %operation, reason = %e, "operation rejected");
                log.append(ReportEntry::error(EntryKind::Precondition, e.to_string()));
                return OperationResult::new(
                    operation.clone(),
                    OperationStatus::Rejected,
                    log.recorded(),
                );
            }
        };
        info!(operation = %operation, stages = commands.len(), "operation started");

        let mut aborted_at = None;
        for (stage, command) in commands.iter().enumerate() {
            let outcome = self.runner.execute(command, &log).await;
            if !outcome.succeeded() && !command.policy().continues_on_failure() {
                debug!(operation = %operation, stage, "stage failed, skipping the rest");
                aborted_at = Some(command.command_line());
                break;
            }
        }

        let status = match aborted_at {
            None => {
                log.append(ReportEntry::success(
                    EntryKind::Summary,
                    format!("{} completed", operation.title()),
                ));
                OperationStatus::Completed
            }
            Some(line) => {
                log.append(ReportEntry::error(
                    EntryKind::Summary,
                    format!("{} failed at: {line}", operation.title()),
                ));
                OperationStatus::Failed
            }
        };
        info!(operation = %operation, status = ?status, "operation finished");

        OperationResult::new(operation.clone(), status, log.recorded())
    }
}
