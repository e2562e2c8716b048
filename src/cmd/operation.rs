// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository operation command.
//!
//! ```text
//! Session::new(config)
//!   printer task: replay() subscription + busy signal --> stdout / spinner
//!   announce_context()
//!   submit(op).join()
//!   finish()  (sink closed --> printer drains and exits)
//! ```

use anyhow::Context;
use tokio::sync::watch;

use super::render::{BusyIndicator, OutputFormat, render_entry};
use crate::config::Config;
use crate::error::Result;
use crate::operation::{Operation, OperationResult};
use crate::report::ReportSubscription;
use crate::session::Session;

/// Runs one operation and prints its report live.
///
/// Returns `true` when every resulting operation completed.
///
/// # Errors
///
/// Returns an error if the printer task panicked.
pub async fn run_operation_command(
    operation: Operation,
    config: &Config,
    format: OutputFormat,
) -> Result<bool> {
    let session = Session::new(config);
    let printer = tokio::spawn(print_reports(
        session.sink().replay(),
        session.scheduler().busy_signal(),
        format,
        format!("{}...", operation.title()),
    ));

    session.announce_context();
    let results = session.submit(operation).join().await;
    session.finish().await;
    printer.await.context("report printer stopped unexpectedly")?;

    Ok(!results.is_empty() && results.iter().all(OperationResult::is_completed))
}

async fn print_reports(
    mut reports: ReportSubscription,
    mut busy: watch::Receiver<usize>,
    format: OutputFormat,
    message: String,
) {
    let mut indicator = BusyIndicator::new(message);
    indicator.set_busy(*busy.borrow_and_update() > 0);
    let mut busy_open = true;

    loop {
        tokio::select! {
            entry = reports.next() => match entry {
                Some(entry) => indicator.println(&render_entry(&entry, format)),
                None => break,
            },
            changed = busy.changed(), if busy_open => match changed {
                Ok(()) => indicator.set_busy(*busy.borrow_and_update() > 0),
                Err(_) => busy_open = false,
            },
        }
    }
}
