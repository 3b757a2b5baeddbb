// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Mutable runtime state of one in-flight execution.

use crate::config::EngineConfig;
use dh_core::Clock;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Termination phase of a session.
///
/// Transitions are monotonic: `Running → GracefulTermRequested →
/// ForceKilled`; no transition ever reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionPhase {
    Running,
    GracefulTermRequested,
    ForceKilled,
}

/// One in-flight run of an [`ActionSpec`](dh_core::ActionSpec).
///
/// Owned exclusively by the engine; a retry creates a fresh session.
pub(crate) struct ExecutionSession<C: Clock> {
    pub(crate) id: String,
    clock: C,
    started: Instant,
    phase: SessionPhase,
    stdout: OutputBuffer,
    stderr: OutputBuffer,
}

impl<C: Clock> ExecutionSession<C> {
    pub(crate) fn new(clock: C, config: &EngineConfig) -> Self {
        let started = clock.now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            clock,
            started,
            phase: SessionPhase::Running,
            stdout: OutputBuffer::new(config.max_captured_bytes),
            stderr: OutputBuffer::new(config.max_captured_bytes),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.clock.elapsed(self.started)
    }

    pub(crate) fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether cancellation or timeout has been requested.
    pub(crate) fn termination_requested(&self) -> bool {
        self.phase != SessionPhase::Running
    }

    /// Enter `GracefulTermRequested`. Returns false if already past
    /// `Running` (idempotent cancellation).
    pub(crate) fn request_graceful(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.phase = SessionPhase::GracefulTermRequested;
        true
    }

    /// Enter `ForceKilled`. Only reachable from `GracefulTermRequested`.
    pub(crate) fn mark_force_killed(&mut self) -> bool {
        if self.phase != SessionPhase::GracefulTermRequested {
            return false;
        }
        self.phase = SessionPhase::ForceKilled;
        true
    }

    pub(crate) fn push_stdout(&mut self, line: &str) {
        self.stdout.push(line);
    }

    pub(crate) fn push_stderr(&mut self, line: &str) {
        self.stderr.push(line);
    }

    /// Freeze the buffers into their final string form.
    pub(crate) fn into_output(self) -> (String, String) {
        (self.stdout.concatenated(), self.stderr.concatenated())
    }
}

/// Byte-capped line accumulator; drops the oldest lines once over budget.
struct OutputBuffer {
    lines: VecDeque<String>,
    total_bytes: usize,
    max_bytes: usize,
}

impl OutputBuffer {
    fn new(max_bytes: usize) -> Self {
        Self { lines: VecDeque::new(), total_bytes: 0, max_bytes }
    }

    fn push(&mut self, line: &str) {
        self.total_bytes = self.total_bytes.saturating_add(line.len() + 1);
        self.lines.push_back(line.to_string());

        while self.total_bytes > self.max_bytes {
            match self.lines.pop_front() {
                Some(dropped) => {
                    self.total_bytes = self.total_bytes.saturating_sub(dropped.len() + 1);
                }
                None => break,
            }
        }
    }

    /// All retained lines, each newline-terminated.
    fn concatenated(&self) -> String {
        let mut out = String::with_capacity(self.total_bytes);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
