// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Process spawning and stream plumbing.
//!
//! Everything a running session produces (output lines, ticks, exit) is
//! funnelled into one event channel. The readers drain stdout and stderr
//! independently so a process writing heavily to one stream can never
//! deadlock the other pipe buffer.

use crate::elevation::WrappedCommand;
use crate::error::SpawnError;
use dh_core::{ActionSpec, Secret};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;

/// Events delivered to a session's dispatch loop.
#[derive(Debug)]
pub(crate) enum RunnerEvent {
    /// A stdout line, newline stripped.
    Stdout(String),
    /// A stderr line, newline stripped.
    Stderr(String),
    /// Once-per-second progress tick with elapsed whole seconds.
    Tick(u64),
    /// The configured timeout was exceeded. Sent at most once.
    TimeoutExceeded,
    /// Process exit; `None` if killed by a signal.
    Exited(Option<i32>),
}

/// Handle to a spawned process, for signalling its group.
#[derive(Debug)]
pub(crate) struct RunningProcess {
    /// Process id; also the process group id (the child leads its own group).
    pub(crate) pid: Option<i32>,
}

/// Spawn the wrapped command and wire its streams into `tx`.
///
/// The child is placed in its own process group so termination signals
/// reach any grandchildren the command spawns. The secret (if any) is
/// written to stdin first — `sudo -S` consumes it — followed by the
/// caller's stdin payload, then the pipe closes for EOF.
///
/// A spawn failure is fatal and immediate; nothing is retried.
pub(crate) async fn spawn(
    wrapped: &WrappedCommand,
    spec: &ActionSpec,
    secret: Option<Secret>,
    stdin_payload: Option<String>,
    tx: mpsc::Sender<RunnerEvent>,
) -> Result<RunningProcess, SpawnError> {
    let mut cmd = Command::new(&wrapped.program);
    cmd.args(&wrapped.args);
    for (key, value) in &spec.env {
        cmd.env(key, value);
    }
    cmd.process_group(0);

    let feed_stdin = secret.is_some() || stdin_payload.is_some();
    cmd.stdin(if feed_stdin { Stdio::piped() } else { Stdio::null() });
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| SpawnError::Spawn {
        program: wrapped.program.clone(),
        source,
    })?;
    let pid = child.id().map(|p| p as i32);

    if feed_stdin {
        if let Some(mut stdin) = child.stdin.take() {
            tokio::spawn(async move {
                if let Some(secret) = secret {
                    // sudo -S reads exactly one newline-terminated line.
                    if stdin.write_all(secret.expose()).await.is_ok() {
                        let _ = stdin.write_all(b"\n").await;
                    }
                    // The secret drops (and is wiped) here, before any
                    // caller payload is written.
                }
                if let Some(payload) = stdin_payload {
                    if let Err(error) = stdin.write_all(payload.as_bytes()).await {
                        tracing::debug!(%error, "stdin payload write failed");
                    }
                }
                drop(stdin); // close pipe to signal EOF
            });
        }
    }

    if let Some(stdout) = child.stdout.take() {
        let tx = tx.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if tx.send(RunnerEvent::Stdout(line)).await.is_err() {
                    break;
                }
            }
        });
    }

    if let Some(stderr) = child.stderr.take() {
        let tx = tx.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if tx.send(RunnerEvent::Stderr(line)).await.is_err() {
                    break;
                }
            }
        });
    }

    // Exit awaiter. Resolves whether the process exited naturally or was
    // force-killed; the dispatch loop owns the bounded reap wait.
    tokio::spawn(async move {
        let code = match child.wait().await {
            Ok(status) => status.code(),
            Err(error) => {
                tracing::warn!(%error, "wait on child failed");
                None
            }
        };
        let _ = tx.send(RunnerEvent::Exited(code)).await;
    });

    Ok(RunningProcess { pid })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
