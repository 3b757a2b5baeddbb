// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

use super::*;

#[test]
fn exposes_bytes() {
    let secret = Secret::new(b"hunter2".to_vec());
    assert_eq!(secret.expose(), b"hunter2");
    assert_eq!(secret.len(), 7);
    assert!(!secret.is_empty());
}

#[test]
fn from_string() {
    let secret: Secret = String::from("pw").into();
    assert_eq!(secret.expose(), b"pw");
}

#[test]
fn debug_is_redacted() {
    let secret = Secret::new(b"hunter2".to_vec());
    let rendered = format!("{secret:?}");
    assert!(!rendered.contains("hunter2"));
    assert_eq!(rendered, "Secret(<redacted>)");
}

#[test]
fn empty_secret() {
    let secret = Secret::new(Vec::new());
    assert!(secret.is_empty());
    assert_eq!(secret.len(), 0);
}
