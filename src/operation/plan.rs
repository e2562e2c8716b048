// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command plans per operation.
//!
//! ```text
//! Status        git status                  (abort)
//!               git remote -v               (best effort)
//! Init          git init                    (abort)
//! AddRemote     git remote remove <remote>  (tolerate)
//!               git remote add <remote> <url>
//!               git remote -v               (best effort)
//! Push          git add .
//!               git commit -m <message>     (tolerate)
//!               git push <remote> <branch>
//! Pull          git pull <remote> <branch>
//! CreateBranch  git checkout -b <name>
//! SwitchBranch  git checkout <name> --
//! ListBranches  git branch -a
//! ```

use std::path::Path;

use super::{Operation, WorkingContext};
use crate::config::types::GitConfig;
use crate::error::PreconditionError;
use crate::runner::{Command, FailurePolicy};

/// Note reported when `git commit` finds nothing to commit.
pub const NOTHING_TO_COMMIT: &str = "No new changes to commit";

/// Checks the context and returns the commands for `operation`, in order.
///
/// # Errors
///
/// Returns a `PreconditionError` when the directory is missing, a required
/// value is missing, or a value would be parsed by git as an option. The
/// directory is always checked first.
pub fn plan(
    operation: &Operation,
    context: &WorkingContext,
    git: &GitConfig,
) -> Result<Vec<Command>, PreconditionError> {
    let dir = context
        .directory()
        .ok_or(PreconditionError::MissingDirectory)?;
    let planner = Planner { dir, git };

    let commands = match operation {
        Operation::Status => vec![
            planner
                .git(["status"])
                .with_success_message("Checked git status"),
            planner.list_remotes(),
        ],
        Operation::Init => vec![
            planner
                .git(["init"])
                .with_success_message("Created new git repository"),
        ],
        Operation::AddRemote => {
            let url = context
                .remote_url()
                .ok_or(PreconditionError::MissingRemoteUrl)?;
            reject_option_like("remote URL", url)?;
            let remote = git.remote.as_str();
            vec![
                planner
                    .git(["remote", "remove", remote])
                    .with_policy(FailurePolicy::tolerate(format!(
                        "No existing remote '{remote}' to replace"
                    ))),
                planner
                    .git(["remote", "add", remote, url])
                    .with_success_message(format!("Linked repository: {url}")),
                planner.list_remotes(),
            ]
        }
        Operation::Push => {
            let message = context
                .commit_message()
                .unwrap_or(git.default_commit_message.as_str());
            vec![
                planner
                    .git(["add", "."])
                    .with_success_message("Added all files"),
                planner
                    .git(["commit", "-m", message])
                    .with_success_message(format!("Saved changes: {message}"))
                    .with_policy(FailurePolicy::tolerate(NOTHING_TO_COMMIT)),
                planner
                    .git(["push", git.remote.as_str(), git.branch.as_str()])
                    .with_success_message("Pushed updates successfully"),
            ]
        }
        Operation::Pull => vec![
            planner
                .git(["pull", git.remote.as_str(), git.branch.as_str()])
                .with_success_message("Pulled updates successfully"),
        ],
        Operation::CreateBranch(name) => {
            let name = branch_name(name)?;
            vec![
                planner
                    .git(["checkout", "-b", name])
                    .with_success_message(format!("Created branch: {name}")),
            ]
        }
        Operation::SwitchBranch(name) => {
            let name = branch_name(name)?;
            vec![
                planner
                    .git(["checkout", name, "--"])
                    .with_success_message(format!("Switched to branch: {name}")),
            ]
        }
        Operation::ListBranches => vec![
            planner
                .git(["branch", "-a"])
                .with_success_message("Branches:"),
        ],
    };

    Ok(commands)
}

struct Planner<'a> {
    dir: &'a Path,
    git: &'a GitConfig,
}

impl Planner<'_> {
    fn git<'s>(&self, args: impl IntoIterator<Item = &'s str>) -> Command {
        Command::new(self.git.program.as_str(), self.dir).args(args)
    }

    fn list_remotes(&self) -> Command {
        self.git(["remote", "-v"])
            .with_success_message("Linked remotes:")
            .with_policy(FailurePolicy::BestEffort)
    }
}

fn branch_name(name: &str) -> Result<&str, PreconditionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PreconditionError::MissingBranchName);
    }
    reject_option_like("branch name", name)?;
    Ok(name)
}

fn reject_option_like(what: &'static str, value: &str) -> Result<(), PreconditionError> {
    if value.starts_with('-') {
        return Err(PreconditionError::OptionLikeArgument {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}
