// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-command execution and outcome reporting.
//!
//! ```text
//! CommandRunner::execute(command, sink)
//!   attempt entry (info)
//!   working dir check ----------------> LaunchFailed
//!   ProcessBackend::run
//!     Err(Timeout) -------------------> TimedOut
//!     Err(_) -------------------------> LaunchFailed
//!     Ok(exit 0) ---------------------> Succeeded: verdict (success) + stdout (info)
//!     Ok(exit n) ---------------------> Failed:    verdict (error)   + stderr (error)
//!                                      Tolerate downgrades both to info
//! ```
//!
//! The runner never returns an error. Every failure becomes a
//! [`CommandOutcome`] plus report entries.

mod backend;
mod command;

pub use backend::{ProcessBackend, SystemBackend};
pub use command::{Command, FailurePolicy};

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::process::builder::ProcessOutput;
use crate::error::ProcessError;
use crate::report::{Classification, EntryKind, ReportEntry, ReportSink};

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Succeeded,
    /// Exited with a non-zero code (`-1` when killed by a signal).
    Failed { exit_code: i32 },
    /// Never ran: missing working directory, executable not found, spawn
    /// or wait error.
    LaunchFailed,
    /// Killed after the configured timeout.
    TimedOut { after_secs: u64 },
}

/// Result of one command execution. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    status: OutcomeStatus,
    stdout: String,
    stderr: String,
}

impl CommandOutcome {
    #[must_use]
    pub const fn new(status: OutcomeStatus, stdout: String, stderr: String) -> Self {
        Self {
            status,
            stdout,
            stderr,
        }
    }

    fn from_output(output: ProcessOutput) -> Self {
        let status = if output.success() {
            OutcomeStatus::Succeeded
        } else {
            OutcomeStatus::Failed {
                exit_code: output.exit_code(),
            }
        };
        let (stdout, stderr) = output.into_streams();
        Self::new(status, stdout, stderr)
    }

    fn from_error(error: &ProcessError) -> Self {
        let status = match error {
            ProcessError::Timeout { timeout_secs, .. } => OutcomeStatus::TimedOut {
                after_secs: *timeout_secs,
            },
            _ => OutcomeStatus::LaunchFailed,
        };
        Self::new(status, String::new(), error.to_string())
    }

    #[must_use]
    pub const fn status(&self) -> OutcomeStatus {
        self.status
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.status, OutcomeStatus::Succeeded)
    }

    /// Exit code when the process ran to completion.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self.status {
            OutcomeStatus::Succeeded => Some(0),
            OutcomeStatus::Failed { exit_code } => Some(exit_code),
            OutcomeStatus::LaunchFailed | OutcomeStatus::TimedOut { .. } => None,
        }
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured stderr, or the launch error text when the process never ran.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

/// Executes commands through a [`ProcessBackend`] and reports them.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    backend: Arc<dyn ProcessBackend>,
}

impl CommandRunner {
    #[must_use]
    pub fn new(backend: Arc<dyn ProcessBackend>) -> Self {
        Self { backend }
    }

    /// Runner spawning real processes with the given per-command timeout.
    #[must_use]
    pub fn system(timeout: Option<Duration>) -> Self {
        Self::new(Arc::new(SystemBackend::new(timeout)))
    }

    /// Runs `command` and appends what was attempted and observed to `sink`.
    pub async fn execute(&self, command: &Command, sink: &ReportSink) -> CommandOutcome {
        let line = command.command_line();
        sink.append(ReportEntry::info(
            EntryKind::Attempt,
            format!("Running: {line}"),
        ));

        let result = if command.working_dir().as_os_str().is_empty() {
            Err(ProcessError::MissingWorkingDir {
                command: line.clone(),
            })
        } else {
            self.backend.run(command).await
        };

        let outcome = match result {
            Ok(output) => CommandOutcome::from_output(output),
            Err(e) => {
                warn!(cmd = %line, error = %e, "command did not run to completion");
                CommandOutcome::from_error(&e)
            }
        };
        debug!(cmd = %line, status = ?outcome.status(), "command finished");

        report_outcome(command, &line, &outcome, sink);
        outcome
    }
}

fn report_outcome(command: &Command, line: &str, outcome: &CommandOutcome, sink: &ReportSink) {
    if outcome.succeeded() {
        let verdict = command
            .success_message()
            .map_or_else(|| format!("Command succeeded: {line}"), str::to_string);
        sink.append(ReportEntry::success(EntryKind::Verdict, verdict));
        append_stream(sink, outcome.stdout(), Classification::Info);
        return;
    }

    let (verdict, classification) = match command.policy() {
        FailurePolicy::Tolerate { note } => (note.clone(), Classification::Info),
        FailurePolicy::Abort | FailurePolicy::BestEffort => (
            command
                .failure_message()
                .map_or_else(|| failure_text(line, outcome.status()), str::to_string),
            Classification::Error,
        ),
    };
    sink.append(ReportEntry::new(EntryKind::Verdict, classification, verdict));
    append_stream(sink, outcome.stderr(), classification);
}

fn failure_text(line: &str, status: OutcomeStatus) -> String {
    match status {
        OutcomeStatus::Failed { exit_code } => {
            format!("Command failed: {line} (exit code {exit_code})")
        }
        OutcomeStatus::TimedOut { after_secs } => {
            format!("Command timed out after {after_secs}s: {line}")
        }
        OutcomeStatus::Succeeded | OutcomeStatus::LaunchFailed => {
            format!("Command failed: {line}")
        }
    }
}

fn append_stream(sink: &ReportSink, text: &str, classification: Classification) {
    let text = text.trim_end();
    if !text.is_empty() {
        sink.append(ReportEntry::new(EntryKind::Output, classification, text));
    }
}

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
