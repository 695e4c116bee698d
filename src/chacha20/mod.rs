//! ChaCha20 stream cipher (RFC 8439 §2.3-2.4).
//!
//! This module provides a low-level, dependency-free implementation of the
//! ChaCha20 block function and keystream generator. It is designed to be
//! used as a cryptographic primitive underneath an AEAD construction, and
//! therefore:
//! - performs no heap allocation
//! - runs in constant time with respect to key, nonce, and plaintext bytes
//! - exposes only the minimal, explicit API the AEAD layer needs
//!
//! This module **does not** implement authenticated encryption by itself.
//! See [`crate::aead`] for the ChaCha20-Poly1305 construction built on top
//! of it.

mod core;
mod stream;

pub(crate) use stream::{one_block_keystream, xor};
