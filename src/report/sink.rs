// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Append-only report log shared by all running operations.
//!
//! ```text
//! append(entry) --lock--> Vec<ReportEntry> (sequence = index)
//!                   |
//!                   +--> watch::Sender<u64> (entry count)
//!                             |
//!              ReportSubscription::next().await
//! ```

use futures_util::Stream;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::entry::{Classification, ReportEntry};

#[derive(Debug, Default)]
struct Log {
    entries: Vec<ReportEntry>,
    closed: bool,
}

#[derive(Debug)]
struct Shared {
    log: RwLock<Log>,
    changes: watch::Sender<u64>,
}

impl Shared {
    fn read(&self) -> RwLockReadGuard<'_, Log> {
        self.log.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Log> {
        self.log.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Entries appended through one labeled handle.
#[derive(Debug)]
struct Scope {
    label: Box<str>,
    recorded: Mutex<Vec<ReportEntry>>,
}

/// Ordered, append-only, thread-safe stream of report entries.
///
/// Cloning yields another handle to the same log. A handle obtained from
/// [`ReportSink::labeled`] tags untagged entries with an operation label and
/// remembers what it appended.
#[derive(Debug, Clone)]
pub struct ReportSink {
    shared: Arc<Shared>,
    scope: Option<Arc<Scope>>,
}

impl Default for ReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink {
    #[must_use]
    pub fn new() -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                log: RwLock::new(Log::default()),
                changes,
            }),
            scope: None,
        }
    }

    /// Another handle to the same log that tags entries with `operation`
    /// and records them. Clones of the returned handle share the record.
    #[must_use]
    pub fn labeled(&self, operation: &str) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            scope: Some(Arc::new(Scope {
                label: operation.into(),
                recorded: Mutex::new(Vec::new()),
            })),
        }
    }

    /// Operation label applied by this handle, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.scope.as_ref().map(|scope| &*scope.label)
    }

    /// Entries appended through this labeled handle, in append order.
    /// Empty for unlabeled handles.
    #[must_use]
    pub fn recorded(&self) -> Vec<ReportEntry> {
        self.scope.as_ref().map_or_else(Vec::new, |scope| {
            scope
                .recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        })
    }

    /// Appends an entry and returns its sequence number.
    ///
    /// Appends are atomic: concurrent callers never interleave inside an
    /// entry, and the sequence number equals the entry's position.
    pub fn append(&self, mut entry: ReportEntry) -> u64 {
        if entry.operation().is_none()
            && let Some(label) = self.label()
        {
            entry = entry.for_operation(label);
        }
        let stored = {
            let mut log = self.shared.write();
            if log.closed {
                warn!(text = %entry.text(), "report appended after the sink was closed");
            }
            let sequence = log.entries.len() as u64;
            let stored = entry.with_sequence(sequence);
            log.entries.push(stored.clone());
            self.shared.changes.send_replace(sequence + 1);
            stored
        };
        trace_entry(&stored);
        let sequence = stored.sequence();
        if let Some(scope) = &self.scope {
            scope
                .recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(stored);
        }
        sequence
    }

    /// Number of entries appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.read().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every entry appended so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ReportEntry> {
        self.shared.read().entries.clone()
    }

    /// Entries from `position` onwards.
    #[must_use]
    pub fn entries_from(&self, position: usize) -> Vec<ReportEntry> {
        self.shared
            .read()
            .entries
            .get(position..)
            .map(<[ReportEntry]>::to_vec)
            .unwrap_or_default()
    }

    /// Subscribes from the current end of the log.
    #[must_use]
    pub fn subscribe(&self) -> ReportSubscription {
        let cursor = self.len();
        self.subscription_at(cursor)
    }

    /// Subscribes from the first entry of the session.
    #[must_use]
    pub fn replay(&self) -> ReportSubscription {
        self.subscription_at(0)
    }

    fn subscription_at(&self, cursor: usize) -> ReportSubscription {
        ReportSubscription {
            shared: Arc::clone(&self.shared),
            changes: self.shared.changes.subscribe(),
            cursor,
        }
    }

    /// Marks the session as finished. Subscriptions end once drained.
    pub fn close(&self) {
        self.shared.write().closed = true;
        self.shared.changes.send_modify(|_| {});
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.read().closed
    }
}

fn trace_entry(entry: &ReportEntry) {
    let operation = entry.operation().unwrap_or("-");
    match entry.classification() {
        Classification::Error => warn!(
            seq = entry.sequence(),
            operation,
            kind = entry.kind().as_str(),
            text = %entry.text(),
            "report"
        ),
        Classification::Success => info!(
            seq = entry.sequence(),
            operation,
            kind = entry.kind().as_str(),
            text = %entry.text(),
            "report"
        ),
        Classification::Info => debug!(
            seq = entry.sequence(),
            operation,
            kind = entry.kind().as_str(),
            text = %entry.text(),
            "report"
        ),
    }
}

/// Lazy cursor over a [`ReportSink`].
///
/// Yields entries in append order as they arrive and ends once the sink is
/// closed and every entry has been seen.
#[derive(Debug)]
pub struct ReportSubscription {
    shared: Arc<Shared>,
    changes: watch::Receiver<u64>,
    cursor: usize,
}

impl ReportSubscription {
    /// Index of the next entry this subscription will yield.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the next entry if one is already available.
    pub fn try_next(&mut self) -> Option<ReportEntry> {
        let entry = self.shared.read().entries.get(self.cursor).cloned();
        if entry.is_some() {
            self.cursor += 1;
        }
        entry
    }

    /// Waits for the next entry; `None` once the sink is closed and drained.
    pub async fn next(&mut self) -> Option<ReportEntry> {
        loop {
            self.changes.borrow_and_update();
            if let Some(entry) = self.try_next() {
                return Some(entry);
            }
            if self.shared.read().closed {
                return None;
            }
            if self.changes.changed().await.is_err() {
                return self.try_next();
            }
        }
    }

    /// Converts the subscription into a `Stream`.
    pub fn into_stream(self) -> impl Stream<Item = ReportEntry> + Send {
        futures_util::stream::unfold(self, |mut subscription| async move {
            subscription
                .next()
                .await
                .map(|entry| (entry, subscription))
        })
    }
}
