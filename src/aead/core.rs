//! ChaCha20-Poly1305 authenticated encryption (RFC 8439).
//!
//! This module implements the ChaCha20-Poly1305 AEAD construction specified
//! in RFC 8439 §2.8. It combines:
//!
//! - ChaCha20 as a stream cipher for confidentiality
//! - Poly1305 as a one-time MAC for authentication
//!
//! ## Design goals
//!
//! - No heap allocation
//! - Constant-time authentication check
//! - Explicit nonce and key management; `(key, nonce)` uniqueness is the
//!   caller's responsibility
//! - Plaintext is never written before the tag has been verified
//!
//! ## Key size constants
//!
//! Key = 32 bytes, nonce = 12 bytes, tag = 16 bytes, ChaCha20 block = 64
//! bytes, Poly1305 block = 16 bytes.

use crate::chacha20::{one_block_keystream, xor};
use crate::poly1305::mac::{ct_eq_tag, Poly1305};
use zeroize::Zeroize;

/// Length of the ChaCha20-Poly1305 key, in bytes.
pub const KEY_SIZE: usize = 32;
/// Length of the ChaCha20-Poly1305 nonce (IETF variant), in bytes.
pub const NONCE_SIZE: usize = 12;
/// Length of the Poly1305 authentication tag, in bytes.
pub const TAG_SIZE: usize = 16;

/// Errors that can occur during ChaCha20-Poly1305 sealing or opening.
///
/// All three conditions are reported uniformly to external callers of
/// [`seal`]/[`open`] as a single opaque failure (see module docs); the
/// distinct variants exist for precise internal testing, not as an
/// invitation to build a padding oracle on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadError {
    /// The input and output buffers are neither identical nor disjoint.
    BufferOverlap,
    /// The plaintext/ciphertext output buffer does not match the input
    /// length, or `ciphertext_and_tag` is shorter than [`TAG_SIZE`].
    LengthMismatch,
    /// Authentication tag verification failed.
    AuthenticationFailed,
}

/// Returns zero bytes needed to pad `len` up to the next multiple of 16,
/// per RFC 8439 §2.8: `pad16(x)` is empty when `len` is already aligned.
#[inline(always)]
fn pad16_len(len: usize) -> usize {
    (16 - (len % 16)) % 16
}

/// Returns `true` if `a` and `b` denote the same slice (safe in-place
/// operation) or are entirely disjoint in memory. Any other overlap is
/// rejected: Rust's borrow checker already forbids most unsafe overlaps
/// between a `&[u8]` and a `&mut [u8]` at the type level, so this check
/// only needs to handle the one case the type system permits through —
/// the caller passing the same buffer as both input and output.
fn buffers_ok(input: &[u8], output: &[u8]) -> bool {
    if input.len() != output.len() {
        return true;
    }
    let same = input.as_ptr() == output.as_ptr();
    let disjoint = {
        let i_start = input.as_ptr() as usize;
        let i_end = i_start + input.len();
        let o_start = output.as_ptr() as usize;
        let o_end = o_start + output.len();
        i_end <= o_start || o_end <= i_start
    };
    same || disjoint
}

/// Derives the one-time Poly1305 key (ChaCha20 keystream, counter = 0) and
/// feeds it the RFC 8439 §2.8 transcript framing:
///
/// ```text
/// AD || pad16(AD) || ciphertext || pad16(ciphertext) || LE64(|AD|) || LE64(|ciphertext|)
/// ```
fn compute_tag(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], ad: &[u8], ciphertext: &[u8]) -> [u8; TAG_SIZE] {
    let block0 = one_block_keystream(key, nonce);
    let mut otk = [0u8; KEY_SIZE];
    otk.copy_from_slice(&block0[..KEY_SIZE]);

    let mut mac = Poly1305::new(&otk);
    otk.zeroize();

    static ZEROES: [u8; 16] = [0u8; 16];

    mac.update(ad);
    mac.update(&ZEROES[..pad16_len(ad.len())]);

    mac.update(ciphertext);
    mac.update(&ZEROES[..pad16_len(ciphertext.len())]);

    mac.update(&(ad.len() as u64).to_le_bytes());
    mac.update(&(ciphertext.len() as u64).to_le_bytes());

    mac.finish()
}

/// Encrypts and authenticates `plaintext` using ChaCha20-Poly1305.
///
/// Writes the ciphertext to `ciphertext` (same length as `plaintext`) and
/// the 16-byte authentication tag to `tag`. `ad` is authenticated but not
/// encrypted, and may be empty.
///
/// # Errors
///
/// Returns [`AeadError::BufferOverlap`] if `plaintext` and `ciphertext`
/// are neither the same buffer nor disjoint.
pub fn seal(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
    ciphertext: &mut [u8],
    tag: &mut [u8; TAG_SIZE],
) -> Result<(), AeadError> {
    if ciphertext.len() != plaintext.len() {
        return Err(AeadError::LengthMismatch);
    }
    if !buffers_ok(plaintext, ciphertext) {
        return Err(AeadError::BufferOverlap);
    }

    xor(key, nonce, 1, plaintext, ciphertext);
    *tag = compute_tag(key, nonce, ad, ciphertext);

    Ok(())
}

/// Verifies and decrypts a ChaCha20-Poly1305-sealed message.
///
/// The entire ciphertext is authenticated before any plaintext byte is
/// written: on tag mismatch, `plaintext` is left untouched and
/// [`AeadError::AuthenticationFailed`] is returned, indistinguishable from
/// any other input-shape failure to external callers (see module docs).
///
/// # Errors
///
/// - [`AeadError::BufferOverlap`] if `ciphertext` and `plaintext` are
///   neither the same buffer nor disjoint.
/// - [`AeadError::AuthenticationFailed`] if the tag does not match.
pub fn open(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    tag: &[u8; TAG_SIZE],
    ciphertext: &[u8],
    plaintext: &mut [u8],
) -> Result<(), AeadError> {
    if plaintext.len() != ciphertext.len() {
        return Err(AeadError::LengthMismatch);
    }
    if !buffers_ok(ciphertext, plaintext) {
        return Err(AeadError::BufferOverlap);
    }

    let mut expected = compute_tag(key, nonce, ad, ciphertext);
    let matches = ct_eq_tag(&expected, tag);
    expected.zeroize();

    if !matches {
        return Err(AeadError::AuthenticationFailed);
    }

    xor(key, nonce, 1, ciphertext, plaintext);
    Ok(())
}

/// Seals `plaintext` into a single `ciphertext_and_tag` buffer
/// (`ciphertext || tag`), matching the length-or-failure convention
/// described in RFC 8439 §6 (here as a native `Result<usize, _>` rather
/// than a signed sentinel length).
///
/// `out` must be exactly `plaintext.len() + TAG_SIZE` bytes. Returns the
/// total output length on success.
pub fn seal_into(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    plaintext: &[u8],
    out: &mut [u8],
) -> Result<usize, AeadError> {
    if out.len() != plaintext.len() + TAG_SIZE {
        return Err(AeadError::LengthMismatch);
    }

    let (ciphertext, tag_slot) = out.split_at_mut(plaintext.len());
    let mut tag = [0u8; TAG_SIZE];
    seal(key, nonce, ad, plaintext, ciphertext, &mut tag)?;
    tag_slot.copy_from_slice(&tag);
    tag.zeroize();

    Ok(plaintext.len() + TAG_SIZE)
}

/// Opens a `ciphertext_and_tag` buffer (`ciphertext || tag`) into
/// `plaintext`, the inverse of [`seal_into`].
///
/// `ciphertext_and_tag` must be at least `TAG_SIZE` bytes; `plaintext`
/// must be exactly `ciphertext_and_tag.len() - TAG_SIZE` bytes. Returns
/// the plaintext length on success.
pub fn open_into(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    ciphertext_and_tag: &[u8],
    plaintext: &mut [u8],
) -> Result<usize, AeadError> {
    if ciphertext_and_tag.len() < TAG_SIZE {
        return Err(AeadError::LengthMismatch);
    }

    let ct_len = ciphertext_and_tag.len() - TAG_SIZE;
    if plaintext.len() != ct_len {
        return Err(AeadError::LengthMismatch);
    }

    let (ciphertext, tag_bytes) = ciphertext_and_tag.split_at(ct_len);
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(tag_bytes);

    let result = open(key, nonce, ad, &tag, ciphertext, plaintext);
    tag.zeroize();
    result?;

    Ok(ct_len)
}
