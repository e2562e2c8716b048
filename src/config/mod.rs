// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitdesk.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitdesk.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. GITDESK_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITDESK_GIT__REMOTE=upstream      → git.remote = "upstream"
//! GITDESK_GIT__TIMEOUT_SECS=60      → git.timeout_secs = 60
//! GITDESK_CONTEXT__DIRECTORY=/repo  → context.directory = "/repo"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, GitdeskResult};

use loader::ConfigLoader;
use types::{ContextDefaults, GitConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git invocation settings.
    pub git: GitConfig,
    /// Working context defaults.
    pub context: ContextDefaults,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitdesk::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitdesk.toml")
    ///     .with_env_prefix("GITDESK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> GitdeskResult<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> GitdeskResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates values that end up on git command lines.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid value.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.git.validate()
    }

    /// Format configuration options for display, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_git_options(&mut options);
        self.format_context_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.program".into(), self.git.program.clone());
        options.insert("git.remote".into(), self.git.remote.clone());
        options.insert("git.branch".into(), self.git.branch.clone());
        options.insert(
            "git.default_commit_message".into(),
            self.git.default_commit_message.clone(),
        );
        options.insert(
            "git.timeout_secs".into(),
            self.git.timeout_secs.to_string(),
        );
    }

    fn format_context_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "context.directory".into(),
            fmt_path(self.context.directory.as_ref()),
        );
        options.insert(
            "context.remote_url".into(),
            self.context.remote_url.clone().unwrap_or_default(),
        );
        options.insert(
            "context.commit_message".into(),
            self.context.commit_message.clone().unwrap_or_default(),
        );
    }
}

fn fmt_path(p: Option<&PathBuf>) -> String {
    p.map_or_else(String::new, |p| p.display().to_string())
}
