// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch command arguments.
//!
//! # Subcommands
//!
//! ```text
//! branch create NAME  → git checkout -b NAME
//! branch switch NAME  → git checkout NAME --
//! branch list         → git branch -a
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Args)]
pub struct BranchArgs {
    /// Branch subcommand.
    #[command(subcommand)]
    pub subcommand: BranchCommand,
}

/// Branch subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BranchCommand {
    /// Creates a branch and switches to it.
    Create {
        /// Name of the new branch.
        #[arg(value_name = "NAME", allow_hyphen_values = true)]
        name: String,
    },

    /// Switches to an existing branch.
    Switch {
        /// Branch to switch to.
        #[arg(value_name = "NAME", allow_hyphen_values = true)]
        name: String,
    },

    /// Lists local and remote-tracking branches.
    List,
}
