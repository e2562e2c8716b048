// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!    GitdeskError (<= 24 bytes)
//!          |
//!     +----+-----+
//!     |          |
//!     v          v
//!   Config     Other
//!    Box      Box<str>
//!
//! Sub-errors:
//!   Config        ParseError, InvalidValue, NotFound
//!   Process       ExecutableNotFound, SpawnFailed, Timeout,
//!                 OutputError, MissingWorkingDir
//!   Precondition  MissingDirectory, MissingRemoteUrl,
//!                 MissingBranchName, OptionLikeArgument
//! ```
//!
//! `ProcessError` and `PreconditionError` never escape an operation: the
//! runner and the sequencer turn them into report entries. `GitdeskError`
//! is what configuration loading and logging setup return.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GitdeskError`].
pub type GitdeskResult<T> = std::result::Result<T, GitdeskError>;

/// Top-level error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GitdeskError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a [`GitdeskError::Other`] from a message.
pub fn other(message: impl Into<String>) -> GitdeskError {
    GitdeskError::Other(message.into().into_boxed_str())
}

impl From<ConfigError> for GitdeskError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

// --- Process Errors ---

/// Process execution errors.
///
/// A non-zero exit is not an error at this level: it is a regular
/// outcome carried by `ProcessOutput`.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process timed out and was killed.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// Failed to wait for or read from the process.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },

    /// No working directory was given.
    #[error("no working directory set for '{command}'")]
    MissingWorkingDir { command: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Precondition Errors ---

/// A required piece of the working context is missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// No repository directory selected.
    #[error("select the project directory first")]
    MissingDirectory,

    /// Operation needs a remote URL.
    #[error("enter the repository URL first")]
    MissingRemoteUrl,

    /// Branch operation without a branch name.
    #[error("enter a branch name first")]
    MissingBranchName,

    /// Value would be parsed by git as an option.
    #[error("{what} must not start with '-': {value}")]
    OptionLikeArgument { what: &'static str, value: String },
}
