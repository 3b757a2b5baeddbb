// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Engine error types.

use thiserror::Error;

/// The process could not be started at all.
///
/// This is the only engine fault surfaced as an error value; everything
/// after a successful spawn is reported through the
/// [`ActionResult`](dh_core::ActionResult).
#[derive(Debug, Error)]
pub enum SpawnError {
    /// Executable missing or not permitted.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
