// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dh-core: data model for the deckhand action execution engine

pub mod macros;

pub mod action;
pub mod clock;
pub mod result;
pub mod secret;
pub mod time_fmt;

pub use action::{ActionSpec, ActionSpecBuilder};
pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use result::{ActionResult, ExecStatus, EXIT_CODE_KILLED};
pub use secret::Secret;
pub use time_fmt::format_elapsed;
