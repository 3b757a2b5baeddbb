// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! Scoped-lifetime secret buffer for elevation credentials.
//!
//! The secret is written to the elevation wrapper's stdin exactly once and
//! the in-memory copy is overwritten when the value drops. It is never
//! cloned, serialized, or printed.

use std::fmt;

/// A byte buffer holding an elevation secret.
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self { bytes: value.into() }
    }

    /// Borrow the raw bytes for writing to the wrapper's stdin.
    pub fn expose(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        // Best-effort wipe without unsafe; shrinks the window during which
        // the secret is resident in memory.
        for b in self.bytes.iter_mut() {
            *b = 0;
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;
