// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::{ConfigError, GitdeskError};
use crate::config::types::DEFAULT_COMMIT_MESSAGE;
use crate::logging::LogLevel;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert_eq!(config.git.program, "git");
    assert_eq!(config.git.remote, "origin");
    assert_eq!(config.git.branch, "main");
    assert!(config.context.directory.is_none());
}

#[test]
fn test_parse_toml() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 4

        [git]
        remote = "upstream"
        branch = "develop"
        timeout_secs = 0

        [context]
        directory = "/work/site"
        remote_url = "https://example.com/site.git"
        "#,
    )
    .expect("config should parse");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.git.remote, "upstream");
    assert_eq!(config.git.branch, "develop");
    assert_eq!(config.git.program, "git");
    assert_eq!(config.git.timeout(), None);
    assert_eq!(
        config.context.directory,
        Some(PathBuf::from("/work/site"))
    );
    assert_eq!(
        config.context.remote_url.as_deref(),
        Some("https://example.com/site.git")
    );
    assert!(config.context.commit_message.is_none());
}

#[test]
fn test_unknown_section_rejected() {
    let result = Config::parse("[paths]\nprefix = \"/tmp\"\n");
    assert!(result.is_err());
}

#[test]
fn test_option_like_remote_rejected() {
    let result = Config::parse("[git]\nremote = \"--upload-pack=evil\"\n");
    let err = result.expect_err("remote starting with '-' must be rejected");
    assert!(err.to_string().contains("remote"), "unexpected error: {err}");
}

#[test]
fn test_empty_branch_rejected() {
    assert!(Config::parse("[git]\nbranch = \"  \"\n").is_err());
}

#[test]
fn test_overrides_win() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nbranch = \"develop\"\n")
        .set("git.branch", "release")
        .expect("override key should be valid")
        .build()
        .expect("config should build");
    assert_eq!(config.git.branch, "release");
}

#[test]
fn test_timeout_default() {
    let config = Config::default();
    assert_eq!(config.git.timeout(), Some(Duration::from_secs(300)));
    assert_eq!(config.git.default_commit_message, DEFAULT_COMMIT_MESSAGE);
}

#[test]
fn test_format_options() {
    let config = Config::default();
    let rendered: Vec<_> = config
        .format_options()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    context.commit_message     =
    context.directory          =
    context.remote_url         =
    git.branch                 = main
    git.default_commit_message = Update files
    git.program                = git
    git.remote                 = origin
    git.timeout_secs           = 300
    global.file_log_level      = 4
    global.log_file            =
    global.output_log_level    = 2
    ");
}

#[test]
fn test_loaded_files_listing() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("does-not-exist-gitdesk.toml");
    assert_eq!(loader.format_loaded_files(), vec!["1. [string] <string>"]);
}

#[test]
fn test_missing_required_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = ConfigLoader::new()
        .add_toml_file(&missing)
        .build()
        .expect_err("required file is missing");

    match err {
        GitdeskError::Config(inner) => match *inner {
            ConfigError::NotFound(path) => assert!(path.ends_with("absent.toml"), "{path}"),
            other => panic!("unexpected config error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = Config::parse("[git\nremote = ").expect_err("malformed TOML");
    assert!(
        matches!(&err, GitdeskError::Config(inner) if matches!(**inner, ConfigError::ParseError { .. })),
        "unexpected error: {err}"
    );
}
