// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process backend abstraction.
//!
//! ```text
//! CommandRunner --> dyn ProcessBackend
//!                     +--> SystemBackend (tokio process, git CLI)
//!                     +--> scripted backends in tests
//! ```

use std::fmt;
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::debug;

use super::command::Command;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::ProcessError;

/// Runs a [`Command`] to completion.
///
/// A non-zero exit is a regular `ProcessOutput`; `Err` means the process
/// could not be launched or did not finish in time.
pub trait ProcessBackend: Send + Sync + fmt::Debug {
    fn run<'a>(&'a self, command: &'a Command)
    -> BoxFuture<'a, Result<ProcessOutput, ProcessError>>;
}

/// Backend that spawns real processes.
///
/// Always sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so git
/// fails instead of waiting on a credential prompt.
#[derive(Debug, Clone, Default)]
pub struct SystemBackend {
    timeout: Option<Duration>,
}

impl SystemBackend {
    #[must_use]
    pub const fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn process_for(&self, command: &Command) -> Result<ProcessBuilder, ProcessError> {
        let program = ProcessBuilder::find(command.program()).ok_or_else(|| {
            ProcessError::ExecutableNotFound {
                name: command.program().to_string(),
            }
        })?;
        debug!(program = %program.display(), "resolved executable");

        Ok(ProcessBuilder::new(program)
            .name(command.program())
            .args(command.arguments())
            .cwd(command.working_dir())
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .maybe_timeout(self.timeout))
    }
}

impl ProcessBackend for SystemBackend {
    fn run<'a>(
        &'a self,
        command: &'a Command,
    ) -> BoxFuture<'a, Result<ProcessOutput, ProcessError>> {
        async move { self.process_for(command)?.run().await }.boxed()
    }
}
