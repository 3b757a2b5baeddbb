// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Execution specs: output streaming, exit codes, stdin, timeouts.

use crate::prelude::*;

#[test]
fn echo_round_trip() {
    deckhand()
        .args(&["run", "echo hello-from-deckhand"])
        .passes()
        .stdout_has("hello-from-deckhand")
        .stderr_has("completed in");
}

#[test]
fn nonzero_exit_code_propagates() {
    deckhand().args(&["run", "exit 7"]).exits_with(7).stderr_has("failed (exit 7)");
}

#[test]
fn stderr_lines_reach_stderr() {
    deckhand().args(&["run", "echo oops >&2"]).passes().stderr_has("oops");
}

#[test]
fn label_names_the_action_in_the_summary() {
    deckhand()
        .args(&["run", "--label", "disk-check", "true"])
        .passes()
        .stderr_has("disk-check: completed");
}

#[test]
fn env_pairs_reach_the_command() {
    deckhand()
        .args(&["run", "--env", "DECK_SPEC_VALUE=flotsam", "echo $DECK_SPEC_VALUE"])
        .passes()
        .stdout_has("flotsam");
}

#[test]
fn stdin_flag_feeds_the_command() {
    deckhand().args(&["run", "--stdin", "cat"]).stdin("ahoy\n").passes().stdout_has("ahoy");
}

#[test]
fn missing_binary_fails_through_the_shell() {
    deckhand().args(&["run", "/no/such/binary"]).exits_with(127).stderr_has("failed (exit 127)");
}

#[test]
fn refresh_hint_prints_after_success() {
    deckhand()
        .args(&["run", "--refresh", "true"])
        .passes()
        .stderr_has("widget refresh requested");
}

/// A command that outlives its timeout is escalated and reported as
/// terminated, never as a plain failure.
#[test]
fn timeout_terminates_a_long_command() {
    deckhand()
        .args(&["run", "--timeout", "1", "sleep 30"])
        .deadline(20)
        .exits_with(1)
        .stderr_has("terminating (SIGTERM sent)")
        .stderr_has("terminated after");
}

#[test]
fn json_result_for_a_successful_run() {
    let outcome = deckhand().args(&["run", "--json", "echo hi"]).passes();
    let json = outcome.result_json();
    assert_eq!(json["status"], "completed");
    assert_eq!(json["exit_code"], 0);
    assert_eq!(json["stdout"], "hi\n");
    assert!(json.get("spawn_error").is_none());
}

#[test]
fn json_result_for_a_failed_run() {
    let outcome = deckhand().args(&["run", "--json", "exit 3"]).exits_with(3);
    let json = outcome.result_json();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["exit_code"], 3);
}

#[test]
fn json_result_for_a_terminated_run() {
    let outcome = deckhand()
        .args(&["run", "--json", "--timeout", "1", "sleep 30"])
        .deadline(20)
        .exits_with(1);
    let json = outcome.result_json();
    assert_eq!(json["status"], "terminated");
    assert_eq!(json["exit_code"], -1);
}
