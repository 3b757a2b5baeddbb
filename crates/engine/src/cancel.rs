// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Escalating cancellation: graceful signal, bounded grace, force kill.

use crate::session::ExecutionSession;
use dh_core::Clock;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;

/// Arbitrates the termination of one session's process group.
///
/// Both manual cancellation and timeout go through here. Requests are
/// idempotent: once a phase has been entered, repeating the request is a
/// no-op and signals are not re-sent.
pub(crate) struct CancellationCoordinator {
    pgid: Option<Pid>,
}

impl CancellationCoordinator {
    pub(crate) fn new(pid: Option<i32>) -> Self {
        Self { pgid: pid.map(Pid::from_raw) }
    }

    /// Send SIGTERM to the process group and enter `GracefulTermRequested`.
    ///
    /// Returns true if the transition happened now (the caller then fires
    /// the graceful-terminate hook and arms the grace timer).
    pub(crate) fn request_graceful<C: Clock>(&self, session: &mut ExecutionSession<C>) -> bool {
        if !session.request_graceful() {
            return false;
        }
        tracing::info!(session_id = %session.id, "graceful termination requested");
        self.signal(Signal::SIGTERM);
        true
    }

    /// Send SIGKILL to the process group and enter `ForceKilled`.
    ///
    /// Returns true if the transition happened now.
    pub(crate) fn force_kill<C: Clock>(&self, session: &mut ExecutionSession<C>) -> bool {
        if !session.mark_force_killed() {
            return false;
        }
        tracing::warn!(session_id = %session.id, "grace window elapsed, force killing");
        self.signal(Signal::SIGKILL);
        true
    }

    /// SIGTERM the group without a phase transition.
    ///
    /// For cancellation arriving after the main process has exited: the
    /// session outcome is already decided, but surviving group members
    /// still hold the output pipes open.
    pub(crate) fn sweep_group(&self) {
        self.signal(Signal::SIGTERM);
    }

    fn signal(&self, sig: Signal) {
        let Some(pgid) = self.pgid else { return };
        if let Err(errno) = killpg(pgid, sig) {
            // ESRCH just means the group already exited.
            tracing::debug!(pgid = pgid.as_raw(), %errno, ?sig, "killpg failed");
        }
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
