//! Poly1305 message authentication code (RFC 8439 §2.5).
//!
//! This module provides an internal implementation of the Poly1305
//! one-time message authenticator, used as a building block for the
//! ChaCha20-Poly1305 AEAD construction in [`crate::aead`].
//!
//! The implementation is split into two layers, same as the rest of this
//! crate's algorithm modules:
//!
//! - `core`: limb arithmetic and block absorption (two interchangeable
//!   limb-width profiles, selected at compile time)
//! - `mac`: the stateful MAC interface built on top of `core` — block
//!   alignment, one-time key handling, finalization, and constant-time tag
//!   comparison
//!
//! This module is **not** intended to be used directly by end users; it is
//! exposed internally to support [`crate::aead`].

/// Low-level Poly1305 limb arithmetic.
///
/// Contains the 32-bit and 64-bit limb-width profiles, selected at compile
/// time (see the crate's `poly1305-32bit` / `poly1305-64bit` features).
/// Cryptographically sensitive; must remain internal.
mod core;

/// High-level, one-time Poly1305 MAC interface built on `core`.
pub(crate) mod mac;
