//! A portable implementation of ChaCha20-Poly1305 (RFC 8439).
//!
//! This crate provides the ChaCha20 stream cipher, the Poly1305 one-time
//! message authenticator, and the AEAD composition RFC 8439 builds from
//! them — nothing more.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All three
//! components are explicit in their semantics and suitable for
//! security-critical code: no heap allocation, no data-dependent branches
//! over secret material, and byte-identical output across little- and
//! big-endian hosts.
//!
//! # Module overview
//!
//! - `chacha20`
//!   The ChaCha20 block function and keystream generator. Internal only —
//!   used by `aead` to derive the one-time Poly1305 key and to encrypt or
//!   decrypt the message body.
//!
//! - `poly1305`
//!   The Poly1305 one-time authenticator: limb arithmetic over
//!   `2^130 - 5` and the stateful MAC interface built on top of it.
//!   Internal only.
//!
//! - `aead`
//!   The public surface of this crate: `seal` and `open`, plus the
//!   combined-buffer `seal_into`/`open_into` pair, implementing the exact
//!   transcript framing RFC 8439 §2.8 specifies.
//!
//! # What this crate is not
//!
//! There is no streaming/incremental AEAD, no nonce management or key
//! derivation, no hardware-accelerated (SIMD) code path, and no secure
//! random number generator. Callers are responsible for generating nonces
//! and keys and for never reusing a `(key, nonce)` pair.
//!
//! # Design goals
//!
//! - No heap allocations
//! - Constant time with respect to secret data (key, nonce, plaintext, MAC
//!   state, tag comparison)
//! - Minimal and explicit APIs
//! - Portable across endianness and unaligned-access restrictions

mod chacha20;
mod poly1305;

pub mod aead;
