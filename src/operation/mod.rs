// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logical repository operations.
//!
//! ```text
//! Operation + WorkingContext + GitConfig
//!        |
//!        v
//!   plan::plan() ----------------> PreconditionError (Rejected)
//!        |
//!        v
//!   Vec<Command> --> OperationSequencer::run --> OperationResult
//!                    (stage by stage, FailurePolicy decides)
//! ```

pub mod plan;
mod sequencer;

pub use sequencer::OperationSequencer;

use bon::Builder;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::types::ContextDefaults;
use crate::report::{EntryKind, ReportEntry};

/// A repository action the user can request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Status,
    Init,
    AddRemote,
    Push,
    Pull,
    CreateBranch(String),
    SwitchBranch(String),
    ListBranches,
}

impl Operation {
    /// Short identifier used to tag report entries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Init => "init",
            Self::AddRemote => "add-remote",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::CreateBranch(_) => "create-branch",
            Self::SwitchBranch(_) => "switch-branch",
            Self::ListBranches => "list-branches",
        }
    }

    /// Human-readable name used in summaries.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Status => "Status check",
            Self::Init => "Repository initialization",
            Self::AddRemote => "Remote link",
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::CreateBranch(_) => "Branch creation",
            Self::SwitchBranch(_) => "Branch switch",
            Self::ListBranches => "Branch listing",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs the user provides for operations.
///
/// Each submission works on its own clone; the core never modifies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct WorkingContext {
    #[builder(into, setters(name = with_directory))]
    directory: Option<PathBuf>,
    #[builder(into, setters(name = with_remote_url))]
    remote_url: Option<String>,
    #[builder(into, setters(name = with_commit_message))]
    commit_message: Option<String>,
}

impl WorkingContext {
    /// Context pre-filled from the `[context]` configuration section.
    #[must_use]
    pub fn from_defaults(defaults: &ContextDefaults) -> Self {
        Self {
            directory: defaults.directory.clone(),
            remote_url: defaults.remote_url.clone(),
            commit_message: defaults.commit_message.clone(),
        }
    }

    /// Repository directory, `None` when unset or empty.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Remote URL, `None` when unset or blank.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        non_blank(self.remote_url.as_deref())
    }

    /// Commit message as entered, `None` when unset or blank.
    #[must_use]
    pub fn commit_message(&self) -> Option<&str> {
        self.commit_message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }

    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = Some(directory.into());
    }

    pub fn set_remote_url(&mut self, url: impl Into<String>) {
        self.remote_url = Some(url.into());
    }

    pub fn set_commit_message(&mut self, message: impl Into<String>) {
        self.commit_message = Some(message.into());
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// How an operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    /// Every stage ran; failures, if any, were tolerated or best-effort.
    Completed,
    /// A stage with the `Abort` policy failed.
    Failed,
    /// A precondition failed, no command ran.
    Rejected,
}

/// Entries produced by one operation, in append order, and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    operation: Operation,
    status: OperationStatus,
    entries: Vec<ReportEntry>,
}

impl OperationResult {
    #[must_use]
    pub const fn new(
        operation: Operation,
        status: OperationStatus,
        entries: Vec<ReportEntry>,
    ) -> Self {
        Self {
            operation,
            status,
            entries,
        }
    }

    #[must_use]
    pub const fn operation(&self) -> &Operation {
        &self.operation
    }

    #[must_use]
    pub const fn status(&self) -> OperationStatus {
        self.status
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, OperationStatus::Completed)
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// One entry per executed command.
    pub fn verdicts(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries_of(EntryKind::Verdict)
    }

    /// Closing entry, absent when the operation was rejected.
    #[must_use]
    pub fn summary(&self) -> Option<&ReportEntry> {
        self.entries_of(EntryKind::Summary).last()
    }

    fn entries_of(&self, kind: EntryKind) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }
}
