// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Status | Init | AddRemote | Push | Pull | Branch
//! ```

use std::process::ExitCode;

use gitdesk::cli::global::GlobalOptions;
use gitdesk::cli::{self, Command};
use gitdesk::cmd::config::{run_options_command, run_version_command};
use gitdesk::cmd::operation::run_operation_command;
use gitdesk::cmd::render::OutputFormat;
use gitdesk::config::Config;
use gitdesk::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    if matches!(command, Command::Version) {
        run_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, sources) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config, cli.global.json) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(sources = ?sources, "configuration loaded");
    dispatch_command(command, &config, &sources, &cli.global).await
}

fn start_logging(config: &Config, json: bool) -> gitdesk::error::GitdeskResult<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_json_console(json)
        .build();
    init_logging(&log_config)
}

async fn dispatch_command(
    command: Command,
    config: &Config,
    sources: &[String],
    global: &GlobalOptions,
) -> ExitCode {
    let result = match command.operation() {
        Some(operation) => {
            let format = OutputFormat::from_json_flag(global.json);
            run_operation_command(operation, config, format).await
        }
        None => {
            run_options_command(config, sources);
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(global: &GlobalOptions) -> gitdesk::error::Result<(Config, Vec<String>)> {
    let loader = global.config_loader()?;
    let sources = loader.format_loaded_files();
    Ok((loader.build()?, sources))
}
