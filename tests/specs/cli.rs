// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! CLI surface specs: help text, flag validation, danger gating.

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    deckhand().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn run_help_shows_usage() {
    deckhand().args(&["run", "--help"]).passes().stdout_has("Usage:").stdout_has("--timeout");
}

#[test]
fn version_shows_version() {
    deckhand().args(&["--version"]).passes().stdout_has("0.1");
}

/// Dangerous actions never run without explicit confirmation.
#[test]
fn danger_without_yes_is_refused() {
    deckhand().args(&["run", "--danger", "echo boom"]).fails().stderr_has("--yes");
}

#[test]
fn danger_with_yes_runs() {
    deckhand().args(&["run", "--danger", "--yes", "echo confirmed"]).passes().stdout_has("confirmed");
}

#[test]
fn malformed_env_pair_is_rejected() {
    deckhand().args(&["run", "--env", "NO_EQUALS", "echo hi"]).fails().stderr_has("KEY=VALUE");
}
