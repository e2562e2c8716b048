// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable description of one external command.

use std::path::{Path, PathBuf};

use crate::core::process::builder::ProcessBuilder;

/// What a failing command means for the rest of its operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failure ends the operation.
    #[default]
    Abort,
    /// Failure is expected and harmless: reported as info with `note`,
    /// execution continues.
    Tolerate { note: String },
    /// Failure is reported as an error, execution continues.
    BestEffort,
}

impl FailurePolicy {
    #[must_use]
    pub fn tolerate(note: impl Into<String>) -> Self {
        Self::Tolerate { note: note.into() }
    }

    /// Whether a failure under this policy lets the next stage run.
    #[must_use]
    pub const fn continues_on_failure(&self) -> bool {
        !matches!(self, Self::Abort)
    }
}

/// Program, discrete arguments and working directory, plus the messages
/// reported for its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
    success_message: Option<String>,
    failure_message: Option<String>,
    policy: FailurePolicy,
}

impl Command {
    pub fn new(program: impl Into<String>, working_dir: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.as_ref().to_path_buf(),
            success_message: None,
            failure_message: None,
            policy: FailurePolicy::Abort,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    #[must_use]
    pub const fn policy(&self) -> &FailurePolicy {
        &self.policy
    }

    /// Command line as shown to the user, e.g. `git commit -m "Update files"`.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.to_process().command_line()
    }

    /// Process description without environment or timeout.
    #[must_use]
    pub fn to_process(&self) -> ProcessBuilder {
        ProcessBuilder::new(&self.program)
            .args(&self.args)
            .cwd(&self.working_dir)
            .name(self.program.as_str())
    }
}
