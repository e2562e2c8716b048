// gitdesk: Git Repository Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (lines, lossy UTF-8)
//!   wait + join readers, under one deadline
//!   deadline passed --> kill child, abort readers
//!   --> ProcessOutput { stdout, stderr, exit_code }
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::ProcessError;

/// Spawns a task that collects a stream into a string.
fn spawn_reader<R>(
    stream: Option<R>,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    stream.map(|stream| {
        let name = process_name.to_string();
        tokio::spawn(async move { read_stream(stream, &name, stream_name).await })
    })
}

async fn join_reader(handle: Option<&mut JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Runs the child process, capturing output and waiting for completion.
    ///
    /// The timeout covers both the exit and the draining of stdout/stderr,
    /// so a descendant that keeps a pipe open cannot stall the caller.
    pub(super) async fn run_child(
        &self,
        name: &str,
        cmd_line: &str,
        child: &mut Child,
    ) -> Result<ProcessOutput, ProcessError> {
        let mut stdout_handle = spawn_reader(child.stdout.take(), name, "stdout");
        let mut stderr_handle = spawn_reader(child.stderr.take(), name, "stderr");

        let collect = async {
            let exit_status = child.wait().await.map_err(|e| ProcessError::OutputError {
                command: cmd_line.to_string(),
                message: e.to_string(),
            })?;
            let stdout = join_reader(stdout_handle.as_mut()).await;
            let stderr = join_reader(stderr_handle.as_mut()).await;
            Ok::<_, ProcessError>(ProcessOutput::new(
                exit_status.code().unwrap_or(-1),
                stdout,
                stderr,
            ))
        };

        let Some(timeout_duration) = self.timeout_duration() else {
            return collect.await;
        };

        let outcome = tokio::time::timeout(timeout_duration, collect).await;
        if let Ok(result) = outcome {
            return result;
        }

        warn!(process = %name, timeout = ?timeout_duration, "Process timed out");
        if let Err(e) = child.kill().await {
            debug!(process = %name, error = %e, "kill after timeout failed");
        }
        for handle in [stdout_handle, stderr_handle].into_iter().flatten() {
            handle.abort();
        }
        Err(ProcessError::Timeout {
            command: cmd_line.to_string(),
            timeout_secs: timeout_duration.as_secs(),
        })
    }
}

/// Reads a stream line by line, forwarding each line to the trace log.
async fn read_stream<R>(reader: R, process_name: &str, stream_name: &str) -> String
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut output = String::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                trace!(process = %process_name, stream = %stream_name, line = %line.trim_end(), "output");
                output.push_str(&line);
            }
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }

    output
}
