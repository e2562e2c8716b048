// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for gitdesk.

use crate::config::Config;

/// Display the configuration sources, then the effective options.
pub fn run_options_command(config: &Config, sources: &[String]) {
    if sources.is_empty() {
        println!("Sources: defaults only");
    } else {
        println!("Sources:");
        for source in sources {
            println!("  {source}");
        }
    }
    println!();
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display the version.
pub fn run_version_command() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
