// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Privilege elevation wrapping.
//!
//! The gate never retries: a wrong secret makes the wrapped process exit
//! non-zero and the caller must resubmit with a fresh one.

use crate::config::EngineConfig;
use dh_core::ActionSpec;
use std::process::Stdio;

/// A command line resolved to a concrete program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WrappedCommand {
    pub program: String,
    pub args: Vec<String>,
    /// The elevation wrapper expects a secret on stdin.
    pub needs_secret: bool,
}

/// Wrap a spec's command line for execution.
///
/// Without elevation the command passes through to the shell unchanged.
/// With elevation and a secret available, `sudo -S` reads the secret from
/// stdin (`-p ''` suppresses the prompt). With cached credentials, `sudo -n`
/// runs without prompting at all.
pub(crate) fn wrap_command(
    spec: &ActionSpec,
    config: &EngineConfig,
    have_secret: bool,
) -> WrappedCommand {
    if !spec.requires_sudo {
        return WrappedCommand {
            program: config.shell.clone(),
            args: vec!["-c".to_string(), spec.command.clone()],
            needs_secret: false,
        };
    }

    let mut args = if have_secret {
        vec!["-S".to_string(), "-p".to_string(), String::new()]
    } else {
        vec!["-n".to_string()]
    };
    args.extend([
        "--".to_string(),
        config.shell.clone(),
        "-c".to_string(),
        spec.command.clone(),
    ]);

    WrappedCommand { program: config.sudo_program.clone(), args, needs_secret: have_secret }
}

/// Probe whether elevation credentials are already cached.
///
/// Runs a no-op through the wrapper with prompting disabled; a zero exit
/// means no secret is needed. Read-only from the engine's perspective.
pub(crate) async fn is_elevation_cached(config: &EngineConfig) -> bool {
    let status = tokio::process::Command::new(&config.sudo_program)
        .args(["-n", "true"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    matches!(status, Ok(s) if s.success())
}

#[cfg(test)]
#[path = "elevation_tests.rs"]
mod tests;
