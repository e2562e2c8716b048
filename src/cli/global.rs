// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE      ← Additional config files (can repeat)
//! --directory DIR    ← context.directory
//! --remote-url URL   ← context.remote_url
//! --message MSG      ← context.commit_message
//! --log-level N      ← Console verbosity (0-5)
//! --file-log-level   ← File verbosity (falls back to --log-level)
//! --timeout SECS     ← git.timeout_secs
//!
//! Precedence: CLI flags > GITDESK_* env > --config > gitdesk.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::GitdeskResult;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Repository directory the operation runs in.
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Remote repository URL, used by add-remote and after init.
    #[arg(short = 'r', long = "remote-url", value_name = "URL", global = true)]
    pub remote_url: Option<String>,

    /// Commit message for push.
    #[arg(
        short = 'm',
        long = "message",
        value_name = "MSG",
        allow_hyphen_values = true,
        global = true
    )]
    pub message: Option<String>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Disables auto loading of `gitdesk.toml`, only uses --config.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5), global = true)]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5), global = true)]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prints report entries as JSON lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Per-command timeout in seconds, 0 disables it.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u32>,
}

impl GlobalOptions {
    /// Applies command-line options as configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> GitdeskResult<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level))?;
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.display().to_string())?;
        }

        if let Some(secs) = self.timeout {
            loader = loader.set("git.timeout_secs", i64::from(secs))?;
        }

        if let Some(ref dir) = self.directory {
            loader = loader.set("context.directory", dir.display().to_string())?;
        }

        if let Some(ref url) = self.remote_url {
            loader = loader.set("context.remote_url", url.as_str())?;
        }

        if let Some(ref message) = self.message {
            loader = loader.set("context.commit_message", message.as_str())?;
        }

        Ok(loader)
    }

    /// Loader with the default sources and these options applied.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn config_loader(&self) -> GitdeskResult<ConfigLoader> {
        let mut loader = ConfigLoader::new();
        if !self.no_default_config {
            loader = loader.add_toml_file_optional("gitdesk.toml");
        }
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }
        self.apply_overrides(loader.with_env_prefix("GITDESK"))
    }
}
