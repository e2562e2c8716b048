// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           operation / render
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          session          |
//!              |  context, sink, scheduler |
//!              '-------------+-------------'
//!                            v
//!                        scheduler
//!                 one tokio task per submit
//!                            v
//!                        operation
//!                   plan + sequencer
//!                            v
//!                         runner  ----------> report
//!                 Command, ProcessBackend    ReportSink
//!                            v
//!   +-----------------------------------------+
//!   |  core     process (tokio, argv, timeout)|
//!   +-----------------------------------------+
//!   |  foundation   error, logging, config    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod operation;
pub mod report;
pub mod runner;
pub mod scheduler;
pub mod session;
