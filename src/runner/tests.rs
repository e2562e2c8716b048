// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::testing::{Scripted, ScriptedBackend};
use super::*;

fn rendered(sink: &ReportSink) -> Vec<String> {
    sink.snapshot()
        .iter()
        .map(|e| format!("{} {} {}", e.kind().as_str(), e.classification(), e.text()))
        .collect()
}

#[test]
fn test_command_line_and_accessors() {
    let command = Command::new("git", "/repo")
        .args(["commit", "-m", "Update files"])
        .with_success_message("Saved changes: Update files")
        .with_policy(FailurePolicy::tolerate("No new changes to commit"));

    insta::assert_snapshot!(command.command_line(), @r#"git commit -m "Update files""#);
    assert_eq!(command.program(), "git");
    assert_eq!(command.arguments(), ["commit", "-m", "Update files"]);
    assert_eq!(command.working_dir(), std::path::Path::new("/repo"));
    assert_eq!(command.failure_message(), None);
    assert!(command.policy().continues_on_failure());
    assert!(!FailurePolicy::Abort.continues_on_failure());
    assert!(FailurePolicy::BestEffort.continues_on_failure());
}

#[tokio::test]
async fn test_success_reports_attempt_verdict_and_stdout() {
    let (_, runner) = ScriptedBackend::new()
        .respond("status", Scripted::ok("On branch main\nnothing to commit\n"))
        .into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "/repo")
        .arg("status")
        .with_success_message("Checked git status");

    let outcome = runner.execute(&command, &sink).await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.exit_code(), Some(0));
    assert_eq!(
        rendered(&sink),
        [
            "attempt info Running: git status",
            "verdict success Checked git status",
            "output info On branch main\nnothing to commit",
        ]
    );
}

#[tokio::test]
async fn test_success_without_message_uses_generic_verdict() {
    let (_, runner) = ScriptedBackend::new().into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "/repo").args(["remote", "remove", "origin"]);

    runner.execute(&command, &sink).await;

    assert_eq!(
        rendered(&sink),
        [
            "attempt info Running: git remote remove origin",
            "verdict success Command succeeded: git remote remove origin",
        ]
    );
}

#[tokio::test]
async fn test_failure_reports_error_verdict_and_stderr() {
    let (_, runner) = ScriptedBackend::new()
        .respond("push origin main", Scripted::fail(128, "fatal: no remote\n"))
        .into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "/repo").args(["push", "origin", "main"]);

    let outcome = runner.execute(&command, &sink).await;

    assert_eq!(outcome.status(), OutcomeStatus::Failed { exit_code: 128 });
    assert_eq!(outcome.stderr(), "fatal: no remote\n");
    assert_eq!(
        rendered(&sink),
        [
            "attempt info Running: git push origin main",
            "verdict error Command failed: git push origin main (exit code 128)",
            "output error fatal: no remote",
        ]
    );
}

#[tokio::test]
async fn test_failure_message_overrides_generic_text() {
    let (_, runner) = ScriptedBackend::new()
        .respond("pull origin main", Scripted::fail(1, ""))
        .into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "/repo")
        .args(["pull", "origin", "main"])
        .with_failure_message("Could not pull updates");

    runner.execute(&command, &sink).await;

    assert_eq!(
        rendered(&sink),
        [
            "attempt info Running: git pull origin main",
            "verdict error Could not pull updates",
        ]
    );
}

#[tokio::test]
async fn test_tolerated_failure_is_downgraded_to_info() {
    let (_, runner) = ScriptedBackend::new()
        .respond("remote remove origin", Scripted::fail(2, "error: No such remote: 'origin'"))
        .into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "/repo")
        .args(["remote", "remove", "origin"])
        .with_policy(FailurePolicy::tolerate("No previous remote to remove"));

    let outcome = runner.execute(&command, &sink).await;

    assert!(!outcome.succeeded());
    assert!(
        sink.snapshot()
            .iter()
            .all(|e| e.classification() == Classification::Info)
    );
    assert_eq!(
        rendered(&sink),
        [
            "attempt info Running: git remote remove origin",
            "verdict info No previous remote to remove",
            "output info error: No such remote: 'origin'",
        ]
    );
}

#[tokio::test]
async fn test_launch_error_becomes_failure_outcome() {
    let (_, runner) = ScriptedBackend::new()
        .respond("status", Scripted::LaunchError)
        .into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "/repo").arg("status");

    let outcome = runner.execute(&command, &sink).await;

    assert_eq!(outcome.status(), OutcomeStatus::LaunchFailed);
    assert_eq!(outcome.exit_code(), None);
    assert_eq!(
        rendered(&sink),
        [
            "attempt info Running: git status",
            "verdict error Command failed: git status",
            "output error executable not found: 'git' (not in PATH)",
        ]
    );
}

#[tokio::test]
async fn test_timeout_becomes_failure_outcome() {
    let (_, runner) = ScriptedBackend::new()
        .respond("push origin main", Scripted::Timeout)
        .into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "/repo").args(["push", "origin", "main"]);

    let outcome = runner.execute(&command, &sink).await;

    assert_eq!(outcome.status(), OutcomeStatus::TimedOut { after_secs: 300 });
    let verdict = &sink.snapshot()[1];
    assert_eq!(verdict.classification(), Classification::Error);
    assert_eq!(
        verdict.text(),
        "Command timed out after 300s: git push origin main"
    );
}

#[tokio::test]
async fn test_empty_working_dir_never_reaches_backend() {
    let (backend, runner) = ScriptedBackend::new().into_runner();
    let sink = ReportSink::new();
    let command = Command::new("git", "").arg("status");

    let outcome = runner.execute(&command, &sink).await;

    assert_eq!(outcome.status(), OutcomeStatus::LaunchFailed);
    assert!(backend.calls().is_empty());
    assert_eq!(sink.len(), 3);
}

#[cfg(unix)]
#[tokio::test]
async fn test_system_backend_reports_missing_executable() {
    let runner = CommandRunner::system(Some(Duration::from_secs(5)));
    let sink = ReportSink::new();
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let command = Command::new("gitdesk-no-such-program", temp.path()).arg("status");

    let outcome = runner.execute(&command, &sink).await;

    assert_eq!(outcome.status(), OutcomeStatus::LaunchFailed);
    assert!(outcome.stderr().contains("gitdesk-no-such-program"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_system_backend_runs_real_process() {
    let runner = CommandRunner::system(None);
    let sink = ReportSink::new();
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let command = Command::new("sh", temp.path()).args(["-c", "printf '%s' \"$GIT_TERMINAL_PROMPT\""]);

    let outcome = runner.execute(&command, &sink).await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.stdout(), "0");
}
