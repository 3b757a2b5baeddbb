// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Compact elapsed-time rendering for live counters and summaries.

/// Format whole seconds as `"42s"`, `"2m03s"`, or `"1h04m"`.
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
