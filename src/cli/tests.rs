// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::branch::BranchCommand;
use crate::cli::{Cli, Command};
use crate::config::loader::ConfigLoader;
use crate::logging::LogLevel;
use crate::operation::Operation;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["gitdesk", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(cli.command.and_then(|c| c.operation()).is_none());
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["gitdesk"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "gitdesk",
        "-C",
        "/work/site",
        "-r",
        "https://example.com/site.git",
        "-m",
        "fix footer",
        "-l",
        "4",
        "--timeout",
        "60",
        "--json",
        "push",
    ])
    .unwrap();

    assert_eq!(cli.global.directory, Some(PathBuf::from("/work/site")));
    assert_eq!(
        cli.global.remote_url.as_deref(),
        Some("https://example.com/site.git")
    );
    assert_eq!(cli.global.message.as_deref(), Some("fix footer"));
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.timeout, Some(60));
    assert!(cli.global.json);
    assert_eq!(cli.command.and_then(|c| c.operation()), Some(Operation::Push));
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["gitdesk", "status", "-C", "/work/site"]).unwrap();
    assert_eq!(cli.global.directory, Some(PathBuf::from("/work/site")));
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["gitdesk", "-l", "6", "status"]).is_err());
}

#[test]
fn test_parse_branch_commands() {
    let cli = Cli::try_parse_from(["gitdesk", "branch", "create", "feature/login"]).unwrap();
    match &cli.command {
        Some(Command::Branch(args)) => assert!(matches!(
            &args.subcommand,
            BranchCommand::Create { name } if name == "feature/login"
        )),
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(
        cli.command.and_then(|c| c.operation()),
        Some(Operation::CreateBranch("feature/login".to_string()))
    );

    let cli = Cli::try_parse_from(["gitdesk", "branch", "switch", "develop"]).unwrap();
    assert_eq!(
        cli.command.and_then(|c| c.operation()),
        Some(Operation::SwitchBranch("develop".to_string()))
    );

    let cli = Cli::try_parse_from(["gitdesk", "branch", "list"]).unwrap();
    assert_eq!(
        cli.command.and_then(|c| c.operation()),
        Some(Operation::ListBranches)
    );
}

#[test]
fn test_parse_branch_requires_name() {
    assert!(Cli::try_parse_from(["gitdesk", "branch", "create"]).is_err());
}

#[test]
fn test_operation_commands() {
    let cases = [
        ("status", Operation::Status),
        ("init", Operation::Init),
        ("add-remote", Operation::AddRemote),
        ("push", Operation::Push),
        ("pull", Operation::Pull),
    ];
    for (arg, expected) in cases {
        let cli = Cli::try_parse_from(["gitdesk", arg]).unwrap();
        assert_eq!(cli.command.and_then(|c| c.operation()), Some(expected));
    }
}

#[test]
fn test_overrides_reach_config() {
    let cli = Cli::try_parse_from([
        "gitdesk",
        "-C",
        "/work/site",
        "-m",
        "nightly",
        "-l",
        "5",
        "--timeout",
        "0",
        "status",
    ])
    .unwrap();

    let loader = ConfigLoader::new().add_toml_str("[git]\nremote = \"upstream\"\n");
    let config = cli.global.apply_overrides(loader).unwrap().build().unwrap();

    assert_eq!(config.context.directory, Some(PathBuf::from("/work/site")));
    assert_eq!(config.context.commit_message.as_deref(), Some("nightly"));
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.git.timeout(), None);
    assert_eq!(config.git.remote, "upstream");
}

#[test]
fn test_file_log_level_overrides_log_level() {
    let cli = Cli::try_parse_from(["gitdesk", "-l", "1", "--file-log-level", "3", "status"]).unwrap();
    let config = cli
        .global
        .apply_overrides(ConfigLoader::new())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
    assert_eq!(config.global.file_log_level, LogLevel::INFO);
}
