// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Timeout supervision and progress ticking.

use crate::runner::RunnerEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Start the once-per-second ticker for a session.
///
/// Emits `Tick(elapsed_secs)` every second with a strictly increasing
/// value. With `timeout_secs > 0`, emits `TimeoutExceeded` exactly once
/// when elapsed reaches the timeout, then stops ticking. With
/// `timeout_secs == 0` it ticks until `stop` is cancelled (process exit),
/// so the UI can show a live counter indefinitely.
pub(crate) fn start(
    timeout_secs: u64,
    tx: mpsc::Sender<RunnerEvent>,
    stop: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = Duration::from_secs(1);
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        let mut elapsed_secs: u64 = 0;

        loop {
            tokio::select! {
                () = stop.cancelled() => break,
                _ = interval.tick() => {
                    elapsed_secs += 1;
                    if tx.send(RunnerEvent::Tick(elapsed_secs)).await.is_err() {
                        break;
                    }
                    if timeout_secs > 0 && elapsed_secs >= timeout_secs {
                        let _ = tx.send(RunnerEvent::TimeoutExceeded).await;
                        break;
                    }
                }
            }
        }
    })
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
