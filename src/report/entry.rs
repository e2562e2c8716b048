// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report entry types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an entry is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Info,
    Success,
    Error,
}

impl Classification {
    /// Get a short string representation for log output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Working context announcement (directory selected, ...).
    Context,
    /// Operation rejected before any command ran.
    Precondition,
    /// Command line about to be executed.
    Attempt,
    /// Captured stdout/stderr of a command.
    Output,
    /// Outcome of one command.
    Verdict,
    /// Closing line of an operation.
    Summary,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Precondition => "precondition",
            Self::Attempt => "attempt",
            Self::Output => "output",
            Self::Verdict => "verdict",
            Self::Summary => "summary",
        }
    }
}

/// One classified line of the execution log.
///
/// The sequence number is assigned by the sink when the entry is appended;
/// entries built by hand carry `0` until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    sequence: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
    kind: EntryKind,
    classification: Classification,
    text: String,
}

impl ReportEntry {
    #[must_use]
    pub fn new(kind: EntryKind, classification: Classification, text: impl Into<String>) -> Self {
        Self {
            sequence: 0,
            operation: None,
            kind,
            classification,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn info(kind: EntryKind, text: impl Into<String>) -> Self {
        Self::new(kind, Classification::Info, text)
    }

    #[must_use]
    pub fn success(kind: EntryKind, text: impl Into<String>) -> Self {
        Self::new(kind, Classification::Success, text)
    }

    #[must_use]
    pub fn error(kind: EntryKind, text: impl Into<String>) -> Self {
        Self::new(kind, Classification::Error, text)
    }

    /// Tags the entry with the operation that produced it.
    #[must_use]
    pub fn for_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub(super) const fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Position in the session log, strictly increasing in append order.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
