// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::*;
use crate::report::Classification;
use crate::runner::testing::ScriptedBackend;

fn session() -> Session {
    let (_, runner) = ScriptedBackend::new()
        .with_delay(Duration::from_millis(10))
        .into_runner();
    Session::with_runner(runner, GitConfig::default())
}

#[test]
fn test_set_directory_is_reported() {
    let mut session = session();
    session.set_directory("/work/site");

    let entries = session.sink().snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind(), EntryKind::Context);
    assert_eq!(entries[0].classification(), Classification::Info);
    assert_eq!(entries[0].text(), "Selected directory: /work/site");
    assert_eq!(entries[0].operation(), None);
}

#[test]
fn test_announce_without_directory_is_silent() {
    let session = session();
    session.announce_context();
    assert!(session.sink().is_empty());
}

#[test]
fn test_new_uses_context_defaults() {
    let config = Config::parse(
        r#"
[context]
directory = "/srv/repo"
commit_message = "sync"
"#,
    )
    .expect("config should parse");
    let session = Session::new(&config);

    assert_eq!(
        session.context().directory(),
        Some(std::path::Path::new("/srv/repo"))
    );
    assert_eq!(session.context().commit_message(), Some("sync"));
}

#[tokio::test]
async fn test_subscription_sees_whole_submission_then_ends() {
    let mut session = session();
    session.context_mut().set_directory("/work/site");
    let mut live = session.subscribe();

    let handle = session.submit(Operation::Init);
    assert!(session.busy());
    let results = handle.join().await;
    session.finish().await;

    let mut seen = Vec::new();
    while let Some(entry) = live.next().await {
        seen.push(entry);
    }
    assert_eq!(seen, results[0].entries());
    assert!(!session.busy());
}
