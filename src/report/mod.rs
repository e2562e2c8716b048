// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classified report stream consumed by the presentation layer.
//!
//! ```text
//!  runner / sequencer            presentation
//!         |                           ^
//!         v                           |
//!   ReportSink::append  ---->  ReportSubscription
//!   (atomic, ordered)          next().await / Stream
//! ```
//!
//! Entries are never removed or reordered; insertion order is display
//! order.

mod entry;
mod sink;

pub use entry::{Classification, EntryKind, ReportEntry};
pub use sink::{ReportSink, ReportSubscription};

#[cfg(test)]
mod tests;
