// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Engine entry point and per-session dispatch loop.

use crate::callbacks::ExecCallbacks;
use crate::cancel::CancellationCoordinator;
use crate::config::EngineConfig;
use crate::elevation;
use crate::runner::{self, RunnerEvent};
use crate::session::{ExecutionSession, SessionPhase};
use crate::supervisor;
use dh_core::{ActionResult, ActionSpec, Clock, ExecStatus, Secret, SystemClock, EXIT_CODE_KILLED};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// The action execution engine.
///
/// Stateless between sessions: each [`execute`](Engine::execute) call owns
/// its session's buffers, timer, and cancellation escalation. The only
/// process-wide shared resource is the read-only elevation cache probe.
pub struct Engine<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
}

impl Engine<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, clock: SystemClock }
    }
}

impl<C: Clock> Engine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Whether elevation credentials are already cached, so the caller can
    /// skip prompting for a secret before [`execute`](Engine::execute).
    pub async fn is_elevation_cached(&self) -> bool {
        elevation::is_elevation_cached(&self.config).await
    }

    /// Run one action to completion.
    ///
    /// Cancelling `cancel` (or exceeding the spec's timeout) sends SIGTERM
    /// to the process group, waits out the configured grace window, then
    /// SIGKILLs. A token cancelled before the process has spawned is
    /// honored as soon as spawning completes.
    ///
    /// After the process exits, output from surviving group members is
    /// drained for at most the configured drain window; cancellation cuts
    /// that drain short and sweeps the group.
    ///
    /// All errors come back as data in the [`ActionResult`]; this method
    /// never panics or returns early on process failure.
    pub async fn execute(
        &self,
        spec: &ActionSpec,
        cancel: CancellationToken,
        secret: Option<Secret>,
        stdin: Option<String>,
        callbacks: &mut ExecCallbacks,
    ) -> ActionResult {
        let session = ExecutionSession::new(self.clock.clone(), &self.config);
        let span = tracing::info_span!(
            "exec.session",
            action = %spec.display_name(),
            session_id = %session.id,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            status = tracing::field::Empty,
        );
        self.run_session(session, spec, cancel, secret, stdin, callbacks)
            .instrument(span)
            .await
    }

    async fn run_session(
        &self,
        mut session: ExecutionSession<C>,
        spec: &ActionSpec,
        cancel: CancellationToken,
        secret: Option<Secret>,
        stdin: Option<String>,
        callbacks: &mut ExecCallbacks,
    ) -> ActionResult {
        let session_id = session.id.clone();
        let wrapped = elevation::wrap_command(spec, &self.config, secret.is_some());
        // The elevation path owns the secret; without it the secret is
        // dropped (and wiped) here instead of reaching the child.
        let secret = if wrapped.needs_secret { secret } else { None };
        let (tx, mut rx) = mpsc::channel(self.config.channel_capacity);

        let process = match runner::spawn(&wrapped, spec, secret, stdin, tx.clone()).await {
            Ok(process) => process,
            Err(error) => {
                tracing::warn!(session_id = %session_id, %error, "spawn failed");
                let result = ActionResult::spawn_failure(error.to_string(), session.elapsed());
                tracing::Span::current()
                    .record("status", tracing::field::display(result.status));
                return result;
            }
        };

        let stop_ticker = CancellationToken::new();
        supervisor::start(spec.timeout_secs, tx, stop_ticker.clone());

        let coordinator = CancellationCoordinator::new(process.pid);
        let mut exit_code: Option<i32> = None;
        let mut exited = false;
        // Absolute deadline for the current phase: the grace window while
        // GracefulTermRequested, the reap wait after SIGKILL, the drain
        // window once the process has exited.
        let mut deadline: Option<tokio::time::Instant> = None;

        loop {
            tokio::select! {
                biased;

                () = cancel.cancelled(), if !exited && !session.termination_requested() => {
                    if coordinator.request_graceful(&mut session) {
                        callbacks.emit_graceful_terminate();
                        deadline =
                            Some(tokio::time::Instant::now() + self.config.grace_window);
                    }
                }

                // The event channel stays open until every pipe holder is
                // gone; a backgrounded grandchild inherits the pipes, so
                // cancellation must still reach the group after exit.
                () = cancel.cancelled(), if exited => {
                    coordinator.sweep_group();
                    break;
                }

                () = sleep_until_opt(deadline), if deadline.is_some() => {
                    if exited {
                        // Drain window over; whatever still holds the
                        // pipes is an orphan the session does not wait on.
                        break;
                    }
                    match session.phase() {
                        SessionPhase::GracefulTermRequested => {
                            if coordinator.force_kill(&mut session) {
                                callbacks.emit_force_kill();
                            }
                            deadline =
                                Some(tokio::time::Instant::now() + self.config.reap_wait);
                        }
                        SessionPhase::ForceKilled => {
                            // The OS never delivered the exit within the
                            // reap wait; stop waiting and report sentinel.
                            tracing::warn!(session_id = %session_id, "reap wait expired");
                            break;
                        }
                        SessionPhase::Running => deadline = None,
                    }
                }

                event = rx.recv() => match event {
                    Some(RunnerEvent::Stdout(line)) => {
                        session.push_stdout(&line);
                        callbacks.emit_output(&line);
                    }
                    Some(RunnerEvent::Stderr(line)) => {
                        session.push_stderr(&line);
                        callbacks.emit_error_line(&line);
                    }
                    Some(RunnerEvent::Tick(elapsed_secs)) => {
                        if !exited {
                            callbacks.emit_progress(elapsed_secs);
                        }
                    }
                    Some(RunnerEvent::TimeoutExceeded) => {
                        if !exited && coordinator.request_graceful(&mut session) {
                            callbacks.emit_graceful_terminate();
                            deadline =
                                Some(tokio::time::Instant::now() + self.config.grace_window);
                        }
                    }
                    Some(RunnerEvent::Exited(code)) => {
                        exited = true;
                        exit_code = code;
                        stop_ticker.cancel();
                        deadline =
                            Some(tokio::time::Instant::now() + self.config.drain_wait);
                    }
                    // All producers done: streams drained and exit seen.
                    None => break,
                }
            }
        }
        stop_ticker.cancel();

        // An early break leaves delivered-but-unread lines in the channel.
        while let Ok(event) = rx.try_recv() {
            match event {
                RunnerEvent::Stdout(line) => {
                    session.push_stdout(&line);
                    callbacks.emit_output(&line);
                }
                RunnerEvent::Stderr(line) => {
                    session.push_stderr(&line);
                    callbacks.emit_error_line(&line);
                }
                _ => {}
            }
        }

        let duration = session.elapsed();
        let terminated = session.termination_requested();
        let (stdout, stderr) = session.into_output();
        let status = if terminated {
            ExecStatus::Terminated
        } else if exit_code == Some(0) {
            ExecStatus::Completed
        } else {
            ExecStatus::Failed
        };
        let result = ActionResult {
            status,
            exit_code: exit_code.unwrap_or(EXIT_CODE_KILLED),
            stdout,
            stderr,
            duration,
            spawn_error: None,
        };

        let span = tracing::Span::current();
        span.record("exit_code", result.exit_code);
        span.record("duration_ms", duration.as_millis() as u64);
        span.record("status", tracing::field::display(result.status));
        tracing::debug!(session_id = %session_id, status = %result.status, "session finished");

        result
    }
}

/// Sleep until an optional absolute deadline; pends forever on `None`.
async fn sleep_until_opt(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod tests;
