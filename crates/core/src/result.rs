// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Immutable outcome of one action execution.

use crate::time_fmt::format_elapsed;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exit code reported when the process never produced one (signal-killed,
/// or reaping timed out after a force kill).
pub const EXIT_CODE_KILLED: i32 = -1;

/// How an execution ended.
///
/// `Terminated` is an explicit status set by the cancellation path — it is
/// never inferred from output text or from the exit code alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecStatus {
    /// Process exited on its own with code 0.
    Completed,
    /// Process exited on its own with a non-zero code, or never spawned.
    Failed,
    /// Execution was ended by cancellation or timeout.
    Terminated,
}

crate::simple_display! {
    ExecStatus {
        Completed => "completed",
        Failed => "failed",
        Terminated => "terminated",
    }
}

/// Result of one action execution.
///
/// Produced once, after the session ends; safe to pass across component
/// boundaries by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub status: ExecStatus,
    /// OS exit code, or [`EXIT_CODE_KILLED`] when none was reported.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    /// Set only when the process could not be spawned at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn_error: Option<String>,
}

impl ActionResult {
    /// Result for a process that failed to spawn (binary missing,
    /// permission denied). No output is ever captured in this case.
    pub fn spawn_failure(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            status: ExecStatus::Failed,
            exit_code: EXIT_CODE_KILLED,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            spawn_error: Some(message.into()),
        }
    }

    /// Exit code 0 and not terminated by request or timeout.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0 && self.status != ExecStatus::Terminated
    }

    pub fn has_output(&self) -> bool {
        !self.stdout.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.stderr.is_empty()
    }

    /// One-line human rendering for status bars and logs.
    pub fn summary(&self) -> String {
        let elapsed = format_elapsed(self.duration.as_secs());
        match self.status {
            ExecStatus::Completed => format!("completed in {elapsed}"),
            ExecStatus::Terminated => format!("terminated after {elapsed}"),
            ExecStatus::Failed => match &self.spawn_error {
                Some(err) => format!("failed to start: {err}"),
                None => format!("failed (exit {}) in {elapsed}", self.exit_code),
            },
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
