// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   operation (status, init, push, ...), config (options, version)
//!   render: entries --> stdout, spinner --> stderr
//! ```

pub mod config;
pub mod operation;
pub mod render;
