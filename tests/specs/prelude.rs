// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Shared harness for the CLI specs.

use std::process::Output;
use std::time::Duration;

/// Start building a `deckhand` invocation.
pub fn deckhand() -> Cli {
    Cli { cmd: assert_cmd::Command::cargo_bin("deckhand").expect("deckhand binary") }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_owned());
        self
    }

    /// Kill the invocation if it runs longer than `secs`. Guards the
    /// escalation specs against a hung child wedging the whole suite.
    pub fn deadline(mut self, secs: u64) -> Self {
        self.cmd.timeout(Duration::from_secs(secs));
        self
    }

    fn output(mut self) -> Output {
        self.cmd.output().expect("spawn deckhand")
    }

    pub fn passes(self) -> Outcome {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        Outcome { output }
    }

    pub fn fails(self) -> Outcome {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected failure, got {:?}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
        );
        Outcome { output }
    }

    pub fn exits_with(self, code: i32) -> Outcome {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        Outcome { output }
    }
}

pub struct Outcome {
    output: Output,
}

impl Outcome {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing `{needle}`:\n{}",
            self.stdout(),
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing `{needle}`:\n{}",
            self.stderr(),
        );
        self
    }

    /// Parse the JSON document the `--json` flag appends to stdout. The
    /// command's own output lines precede it, so parse from the first
    /// brace onward.
    pub fn result_json(&self) -> serde_json::Value {
        let stdout = self.stdout();
        let start = stdout.find('{').expect("JSON document on stdout");
        serde_json::from_str(&stdout[start..]).expect("well-formed result JSON")
    }
}
