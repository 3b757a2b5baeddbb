// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Immutable description of a shell action a widget can trigger.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to run, as configured on a dashboard widget.
///
/// Immutable once built. The engine borrows the spec for the duration of a
/// single execution; retries submit the same spec again with a fresh session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Display label shown on the widget ("Restart nginx").
    pub label: String,
    /// Command line, handed verbatim to the configured shell.
    pub command: String,
    /// Destructive action — the caller must confirm before executing.
    #[serde(default)]
    pub danger: bool,
    /// Run through the privilege elevation wrapper.
    #[serde(default)]
    pub requires_sudo: bool,
    /// Timeout in whole seconds. 0 means unlimited.
    #[serde(default)]
    pub timeout_secs: u64,
    /// Refresh the owning widget after a successful run.
    #[serde(default)]
    pub refresh_after_success: bool,
    /// Extra environment variables merged over the inherited environment.
    #[serde(default)]
    pub env: Vec<(String, String)>,
}

impl ActionSpec {
    /// Start building a spec for the given command line.
    pub fn builder(command: impl Into<String>) -> ActionSpecBuilder {
        ActionSpecBuilder {
            label: String::new(),
            command: command.into(),
            danger: false,
            requires_sudo: false,
            timeout_secs: 0,
            refresh_after_success: false,
            env: Vec::new(),
        }
    }

    /// Configured timeout, or `None` for unlimited.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Label if set, otherwise the command line itself.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.command
        } else {
            &self.label
        }
    }
}

/// Builder for [`ActionSpec`].
#[derive(Debug, Clone)]
pub struct ActionSpecBuilder {
    label: String,
    command: String,
    danger: bool,
    requires_sudo: bool,
    timeout_secs: u64,
    refresh_after_success: bool,
    env: Vec<(String, String)>,
}

impl ActionSpecBuilder {
    crate::setters! {
        into { label: String }
        set {
            danger: bool,
            requires_sudo: bool,
            timeout_secs: u64,
            refresh_after_success: bool,
        }
    }

    /// Add one extra environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> ActionSpec {
        ActionSpec {
            label: self.label,
            command: self.command,
            danger: self.danger,
            requires_sudo: self.requires_sudo,
            timeout_secs: self.timeout_secs,
            refresh_after_success: self.refresh_after_success,
            env: self.env,
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
