// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitdesk using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitdesk [global options] <command>
//! status
//! init
//! add-remote
//! push
//! pull
//! branch {create NAME|switch NAME|list}
//! options
//! version
//! ```

pub mod branch;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::branch::{BranchArgs, BranchCommand};
use crate::cli::global::GlobalOptions;
use crate::operation::Operation;
use clap::{Parser, Subcommand};

/// Git Repository Manager
///
/// Runs git operations against a local repository and reports each step.
#[derive(Debug, Parser)]
#[command(
    name = "gitdesk",
    author,
    version,
    about = "Git Repository Manager",
    long_about = "gitdesk Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs git operations against a local repository and reports\n\
                  every command it runs, what git printed and whether it\n\
                  worked. `gitdesk -C path/to/repo status` checks a repository;\n\
                  `gitdesk -C path/to/repo -m \"message\" push` stages,\n\
                  commits and pushes everything.",
    after_help = "CONFIG FILES:\n\n\
                  gitdesk reads `gitdesk.toml` from the current directory if it\n\
                  exists, then every file given with --config, then GITDESK_*\n\
                  environment variables (e.g. GITDESK_GIT__REMOTE=upstream).\n\
                  Command-line options override all of them. Use\n\
                  --no-default-config to skip `gitdesk.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Shows the working tree status and the linked remotes.
    Status,

    /// Creates a new repository, then links the remote URL if one is set.
    Init,

    /// Links the remote URL, replacing any existing remote of the same name.
    #[command(name = "add-remote")]
    AddRemote,

    /// Stages everything, commits and pushes.
    Push,

    /// Pulls from the configured remote and branch.
    Pull,

    /// Creates, switches or lists branches.
    Branch(BranchArgs),
}

impl Command {
    /// Repository operation behind this command, `None` for local ones.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Version | Self::Options => None,
            Self::Status => Some(Operation::Status),
            Self::Init => Some(Operation::Init),
            Self::AddRemote => Some(Operation::AddRemote),
            Self::Push => Some(Operation::Push),
            Self::Pull => Some(Operation::Pull),
            Self::Branch(args) => Some(match &args.subcommand {
                BranchCommand::Create { name } => Operation::CreateBranch(name.clone()),
                BranchCommand::Switch { name } => Operation::SwitchBranch(name.clone()),
                BranchCommand::List => Operation::ListBranches,
            }),
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
