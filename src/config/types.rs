// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gitdesk.
//!
//! ```text
//! Config: GlobalConfig, GitConfig, ContextDefaults
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Commit message used when the context leaves it empty.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update files";

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console diagnostics (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file, no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// How git is invoked and which remote/branch the operations target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Executable name or path.
    pub program: String,
    /// Remote registered by `add-remote` and used by push/pull.
    pub remote: String,
    /// Branch used by push/pull.
    pub branch: String,
    /// Fallback when the context has no commit message.
    pub default_commit_message: String,
    /// Per-command timeout in seconds, 0 disables it.
    pub timeout_secs: u64,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: "origin".to_string(),
            branch: "main".to_string(),
            default_commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            timeout_secs: 300,
        }
    }
}

impl GitConfig {
    /// Returns the per-command timeout, `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Checks that the values are usable as discrete git arguments.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for empty values or values
    /// starting with `-`.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [
            ("program", &self.program),
            ("remote", &self.remote),
            ("branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(invalid_git_value(key, "must not be empty"));
            }
            if value.starts_with('-') {
                return Err(invalid_git_value(key, "must not start with '-'"));
            }
        }
        if self.default_commit_message.trim().is_empty() {
            return Err(invalid_git_value(
                "default_commit_message",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

fn invalid_git_value(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "git".to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Working context values used when the command line leaves them unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextDefaults {
    /// Repository directory.
    pub directory: Option<PathBuf>,
    /// Remote URL for `add-remote` and the init chain.
    pub remote_url: Option<String>,
    /// Commit message for `push`.
    pub commit_message: Option<String>,
}
