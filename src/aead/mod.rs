//! ChaCha20-Poly1305 authenticated encryption with associated data (RFC 8439).
//!
//! This module exposes the public `seal`/`open` entry points and re-exports
//! the size constants and error type callers need. Internally it combines
//! [`crate::chacha20`] for confidentiality and [`crate::poly1305`] for
//! authentication behind the exact framing RFC 8439 §2.8 specifies.
//!
//! The API is one-shot: callers hand over the whole plaintext (or
//! ciphertext) in one call. There is no streaming/incremental variant —
//! see the crate root docs for why that is out of scope.

mod core;

pub use core::{open, open_into, seal, seal_into, AeadError, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
