// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dh-engine: the deckhand action execution engine.
//!
//! Takes a user-approved [`ActionSpec`](dh_core::ActionSpec), optionally
//! elevates privileges, spawns and supervises the OS process, streams its
//! output line by line, enforces the timeout, and escalates cancellation
//! from a graceful terminate to a force kill.
//!
//! One [`Engine::execute`] call is one execution session. All callbacks for
//! a session are invoked from a single dispatch task, never concurrently
//! with each other.

pub mod callbacks;
pub mod config;
pub mod error;
pub mod execute;

mod cancel;
mod elevation;
mod runner;
mod session;
mod supervisor;

pub use callbacks::ExecCallbacks;
pub use config::EngineConfig;
pub use error::SpawnError;
pub use execute::Engine;
