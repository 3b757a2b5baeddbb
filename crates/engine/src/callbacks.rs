// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Per-session callback hooks.
//!
//! The UI layer subscribes to these instead of the engine driving UI
//! transitions. All hooks for one session are invoked from the session's
//! dispatch task, so they are never called concurrently with each other.

/// Elapsed-seconds progress hook.
pub type ProgressFn = Box<dyn FnMut(u64) + Send>;
/// Output line hook (newline stripped).
pub type LineFn = Box<dyn FnMut(&str) + Send>;
/// Termination phase hook.
pub type PhaseFn = Box<dyn FnMut() + Send>;

/// Optional hooks for one execution session.
#[derive(Default)]
pub struct ExecCallbacks {
    on_progress: Option<ProgressFn>,
    on_output: Option<LineFn>,
    on_error_line: Option<LineFn>,
    on_graceful_terminate: Option<PhaseFn>,
    on_force_kill: Option<PhaseFn>,
}

impl ExecCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired once per second with the elapsed whole seconds.
    pub fn on_progress(mut self, f: impl FnMut(u64) + Send + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    /// Fired for every stdout line as soon as it is available.
    pub fn on_output(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_output = Some(Box::new(f));
        self
    }

    /// Fired for every stderr line as soon as it is available.
    pub fn on_error_line(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_error_line = Some(Box::new(f));
        self
    }

    /// Fired once when the graceful termination signal is sent.
    pub fn on_graceful_terminate(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_graceful_terminate = Some(Box::new(f));
        self
    }

    /// Fired once if the process survives the grace window and is killed.
    pub fn on_force_kill(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_force_kill = Some(Box::new(f));
        self
    }

    pub(crate) fn emit_progress(&mut self, elapsed_secs: u64) {
        if let Some(f) = &mut self.on_progress {
            f(elapsed_secs);
        }
    }

    pub(crate) fn emit_output(&mut self, line: &str) {
        if let Some(f) = &mut self.on_output {
            f(line);
        }
    }

    pub(crate) fn emit_error_line(&mut self, line: &str) {
        if let Some(f) = &mut self.on_error_line {
            f(line);
        }
    }

    pub(crate) fn emit_graceful_terminate(&mut self) {
        if let Some(f) = &mut self.on_graceful_terminate {
            f();
        }
    }

    pub(crate) fn emit_force_kill(&mut self) {
        if let Some(f) = &mut self.on_force_kill {
            f();
        }
    }
}
