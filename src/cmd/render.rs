// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal rendering of report entries.
//!
//! ```text
//! text:  "[ok]   Pushed updates successfully"
//!        "       <output line 2>"
//! json:  {"sequence":3,"operation":"push",...}
//! ```

use std::fmt::Write as _;
use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::report::{Classification, EntryKind, ReportEntry};

const INDENT: &str = "       ";

/// How entries are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Formats one entry for display.
#[must_use]
pub fn render_entry(entry: &ReportEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(entry)
            .unwrap_or_else(|e| format!("{{\"error\":\"unrenderable entry: {e}\"}}")),
        OutputFormat::Text => render_text(entry),
    }
}

fn render_text(entry: &ReportEntry) -> String {
    let tag = match (entry.kind(), entry.classification()) {
        (EntryKind::Output, _) => "",
        (_, Classification::Success) => "[ok]",
        (_, Classification::Error) => "[fail]",
        (EntryKind::Attempt, Classification::Info) => "[run]",
        (_, Classification::Info) => "[info]",
    };

    let mut out = String::new();
    for (i, line) in entry.text().lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if i == 0 && !tag.is_empty() {
            let _ = write!(out, "{tag:<7}{line}");
        } else {
            let _ = write!(out, "{INDENT}{line}");
        }
    }
    out
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Indeterminate progress indicator shown while operations are in flight.
///
/// Draws to stderr and stays hidden when stderr is not a terminal.
#[derive(Debug)]
pub struct BusyIndicator {
    bar: Option<ProgressBar>,
    message: String,
}

impl BusyIndicator {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            bar: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Shows the spinner when `busy`, clears it otherwise.
    pub fn set_busy(&mut self, busy: bool) {
        match (busy, self.bar.take()) {
            (true, None) => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(spinner_style());
                bar.set_message(self.message.clone());
                bar.enable_steady_tick(std::time::Duration::from_millis(100));
                self.bar = Some(bar);
            }
            (true, Some(bar)) => self.bar = Some(bar),
            (false, Some(bar)) => bar.finish_and_clear(),
            (false, None) => {}
        }
    }

    /// Prints a line on stdout without tearing the spinner.
    pub fn println(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }
}

impl Drop for BusyIndicator {
    fn drop(&mut self) {
        self.set_busy(false);
    }
}
