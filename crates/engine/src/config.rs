// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Engine tunables.

use std::time::Duration;

/// Configuration for an [`Engine`](crate::Engine).
///
/// The defaults match interactive dashboard use; tests shorten the grace
/// window so escalation paths run in milliseconds.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Shell the command line is handed to (`shell -c <command>`).
    pub(crate) shell: String,
    /// Privilege elevation program.
    pub(crate) sudo_program: String,
    /// How long a process gets between SIGTERM and SIGKILL.
    pub(crate) grace_window: Duration,
    /// Bounded wait for the OS to reap a force-killed process.
    pub(crate) reap_wait: Duration,
    /// How long to keep draining output after the process has exited.
    /// A backgrounded grandchild inherits the pipes and can hold them
    /// open long after the action itself is done.
    pub(crate) drain_wait: Duration,
    /// Capacity of the session event channel.
    pub(crate) channel_capacity: usize,
    /// Retained bytes per output stream; oldest lines are dropped beyond this.
    pub(crate) max_captured_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shell: "/bin/sh".to_string(),
            sudo_program: "sudo".to_string(),
            grace_window: Duration::from_secs(5),
            reap_wait: Duration::from_secs(2),
            drain_wait: Duration::from_millis(500),
            channel_capacity: 256,
            max_captured_bytes: 1024 * 1024,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    dh_core::setters! {
        into {
            shell: String,
            sudo_program: String,
        }
        set {
            grace_window: Duration,
            reap_wait: Duration,
            drain_wait: Duration,
            channel_capacity: usize,
            max_captured_bytes: usize,
        }
    }
}
