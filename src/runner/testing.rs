// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory backend for sequencing tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use super::{Command, CommandRunner, ProcessBackend};
use crate::core::process::builder::ProcessOutput;
use crate::error::ProcessError;

#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    LaunchError,
    Timeout,
}

impl Scripted {
    pub(crate) fn ok(stdout: &str) -> Self {
        Self::Exit {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub(crate) fn fail(code: i32, stderr: &str) -> Self {
        Self::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

/// Answers commands by their argument list (`"commit -m msg"`), succeeding
/// with empty output for anything unscripted, and records every call.
#[derive(Debug, Default)]
pub(crate) struct ScriptedBackend {
    responses: BTreeMap<String, Scripted>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, args: &str, response: Scripted) -> Self {
        self.responses.insert(args.to_string(), response);
        self
    }

    pub(crate) const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Argument lists of every executed command, in call order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn into_runner(self) -> (Arc<Self>, CommandRunner) {
        let backend = Arc::new(self);
        let runner = CommandRunner::new(Arc::clone(&backend) as Arc<dyn ProcessBackend>);
        (backend, runner)
    }
}

impl ProcessBackend for ScriptedBackend {
    fn run<'a>(
        &'a self,
        command: &'a Command,
    ) -> BoxFuture<'a, Result<ProcessOutput, ProcessError>> {
        async move {
            let key = command.arguments().join(" ");
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(key.clone());

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            match self.responses.get(&key).cloned() {
                None => Ok(ProcessOutput::default()),
                Some(Scripted::Exit {
                    code,
                    stdout,
                    stderr,
                }) => Ok(ProcessOutput::new(code, stdout, stderr)),
                Some(Scripted::LaunchError) => Err(ProcessError::ExecutableNotFound {
                    name: command.program().to_string(),
                }),
                Some(Scripted::Timeout) => Err(ProcessError::Timeout {
                    command: command.command_line(),
                    timeout_secs: 300,
                }),
            }
        }
        .boxed()
    }
}
