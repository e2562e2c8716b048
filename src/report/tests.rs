// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use futures_util::StreamExt;

use super::*;

fn texts(entries: &[ReportEntry]) -> Vec<&str> {
    entries.iter().map(ReportEntry::text).collect()
}

#[test]
fn test_append_assigns_increasing_sequence() {
    let sink = ReportSink::new();
    assert!(sink.is_empty());

    let first = sink.append(ReportEntry::info(EntryKind::Attempt, "git status"));
    let second = sink.append(ReportEntry::success(EntryKind::Verdict, "done"));

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(sink.len(), 2);

    let snapshot = sink.snapshot();
    assert_eq!(texts(&snapshot), ["git status", "done"]);
    assert_eq!(snapshot[1].sequence(), 1);
    assert_eq!(snapshot[1].classification(), Classification::Success);
}

#[test]
fn test_entries_from_position() {
    let sink = ReportSink::new();
    for text in ["a", "b", "c"] {
        sink.append(ReportEntry::info(EntryKind::Output, text));
    }

    assert_eq!(texts(&sink.entries_from(1)), ["b", "c"]);
    assert!(sink.entries_from(3).is_empty());
    assert!(sink.entries_from(10).is_empty());
}

#[test]
fn test_entry_serializes_lowercase() {
    let sink = ReportSink::new();
    sink.append(
        ReportEntry::error(EntryKind::Precondition, "select the project directory first")
            .for_operation("push"),
    );

    let json = serde_json::to_string(&sink.snapshot()[0]).expect("entry should serialize");
    insta::assert_snapshot!(json, @r#"{"sequence":0,"operation":"push","kind":"precondition","classification":"error","text":"select the project directory first"}"#);
}

#[test]
fn test_entry_without_operation_omits_field() {
    let entry = ReportEntry::info(EntryKind::Context, "Selected directory: /tmp");
    let json = serde_json::to_string(&entry).expect("entry should serialize");
    assert!(!json.contains("operation"));
}

#[tokio::test]
async fn test_subscribe_starts_at_current_end() {
    let sink = ReportSink::new();
    sink.append(ReportEntry::info(EntryKind::Output, "before"));

    let mut live = sink.subscribe();
    assert_eq!(live.position(), 1);
    assert!(live.try_next().is_none());

    sink.append(ReportEntry::info(EntryKind::Output, "after"));
    let entry = live.next().await.expect("entry should arrive");
    assert_eq!(entry.text(), "after");
    assert_eq!(entry.sequence(), 1);
}

#[tokio::test]
async fn test_replay_yields_from_start() {
    let sink = ReportSink::new();
    for text in ["one", "two"] {
        sink.append(ReportEntry::info(EntryKind::Output, text));
    }
    sink.close();

    let collected: Vec<ReportEntry> = sink.replay().into_stream().collect().await;
    assert_eq!(texts(&collected), ["one", "two"]);
}

#[tokio::test]
async fn test_subscription_ends_after_close() {
    let sink = ReportSink::new();
    let mut subscription = sink.subscribe();

    let writer = sink.clone();
    let task = tokio::spawn(async move {
        writer.append(ReportEntry::info(EntryKind::Output, "last"));
        writer.close();
    });

    let entry = subscription.next().await.expect("entry should arrive");
    assert_eq!(entry.text(), "last");
    assert!(subscription.next().await.is_none());
    task.await.expect("writer task should finish");
    assert!(sink.is_closed());
}

#[tokio::test]
async fn test_subscription_waits_for_late_entries() {
    let sink = ReportSink::new();
    let mut subscription = sink.subscribe();

    let writer = sink.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        writer.append(ReportEntry::success(EntryKind::Summary, "late"));
    });

    let entry = tokio::time::timeout(Duration::from_secs(5), subscription.next())
        .await
        .expect("entry should arrive before the timeout")
        .expect("sink is still open");
    assert_eq!(entry.text(), "late");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_keep_entries_whole_and_ordered() {
    let sink = ReportSink::new();
    let mut handles = Vec::new();

    for writer_id in 0..8 {
        let sink = sink.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..50 {
                sink.append(ReportEntry::info(
                    EntryKind::Output,
                    format!("writer {writer_id} line {i}"),
                ));
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.expect("writer should finish");
    }

    let snapshot = sink.snapshot();
    assert_eq!(snapshot.len(), 400);
    for (index, entry) in snapshot.iter().enumerate() {
        assert_eq!(entry.sequence(), index as u64);
    }

    for writer_id in 0..8 {
        let prefix = format!("writer {writer_id} ");
        let lines: Vec<&str> = snapshot
            .iter()
            .map(ReportEntry::text)
            .filter(|text| text.starts_with(&prefix))
            .collect();
        let expected: Vec<String> = (0..50).map(|i| format!("{prefix}line {i}")).collect();
        assert_eq!(lines, expected);
    }
}

#[tokio::test]
async fn test_append_after_close_is_kept() {
    let sink = ReportSink::new();
    sink.close();
    sink.append(ReportEntry::info(EntryKind::Output, "straggler"));

    assert_eq!(sink.len(), 1);
    let mut replay = sink.replay();
    assert_eq!(replay.next().await.map(|e| e.sequence()), Some(0));
    assert!(replay.next().await.is_none());
}

#[test]
fn test_labeled_handle_tags_entries() {
    let sink = ReportSink::new();
    let push = sink.labeled("push");

    push.append(ReportEntry::info(EntryKind::Attempt, "Running: git add ."));
    push.append(ReportEntry::info(EntryKind::Attempt, "tagged").for_operation("pull"));
    sink.append(ReportEntry::info(EntryKind::Context, "plain"));

    let snapshot = sink.snapshot();
    let operations: Vec<Option<&str>> = snapshot.iter().map(ReportEntry::operation).collect();
    assert_eq!(operations, [Some("push"), Some("pull"), None]);
    assert_eq!(push.label(), Some("push"));
    assert_eq!(push.len(), 3);
    assert_eq!(texts(&push.recorded()), ["Running: git add .", "tagged"]);
    assert!(sink.recorded().is_empty());
}
