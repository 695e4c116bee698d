//! Poly1305 one-time message authenticator (RFC 8439 §2.5).
//!
//! This module is the high-level state machine built on top of the limb
//! arithmetic in [`super::core`]: it owns block alignment (the 16-byte
//! staging buffer for partial `update` calls), the one-time key split into
//! `r`/`s`, and the final `s`-addition step. It must never be reused across
//! messages or keys — a fresh [`Poly1305`] is required per authentication.

use super::core::Accumulator;
use zeroize::Zeroize;

/// Poly1305 one-time authenticator state.
///
/// Created from a 32-byte one-time key (the first 16 bytes become the
/// clamped multiplier `r`, the last 16 become the additive pad `s`), fed
/// message bytes through [`Poly1305::update`] in any chunking, and
/// consumed exactly once by [`Poly1305::finish`].
pub(crate) struct Poly1305 {
    acc: Accumulator,
    s: [u8; 16],
    buffer: [u8; 16],
    leftover: usize,
}

impl Poly1305 {
    /// Initializes a new authenticator from a one-time 32-byte key.
    ///
    /// `key[0..16]` is clamped and becomes the multiplier `r`; `key[16..32]`
    /// becomes the additive pad `s`. The caller must guarantee the key is
    /// never reused across messages.
    pub(crate) fn new(one_time_key: &[u8; 32]) -> Self {
        let mut r = [0u8; 16];
        r.copy_from_slice(&one_time_key[0..16]);

        let mut s = [0u8; 16];
        s.copy_from_slice(&one_time_key[16..32]);

        Poly1305 {
            acc: Accumulator::new(r),
            s,
            buffer: [0u8; 16],
            leftover: 0,
        }
    }

    /// Absorbs `data` into the running MAC, in any chunking the caller
    /// chooses — partial blocks are staged in an internal 16-byte buffer
    /// until a full block is available.
    pub(crate) fn update(&mut self, mut data: &[u8]) {
        if self.leftover > 0 {
            let want = (16 - self.leftover).min(data.len());
            self.buffer[self.leftover..self.leftover + want].copy_from_slice(&data[..want]);
            self.leftover += want;
            data = &data[want..];

            if self.leftover < 16 {
                return;
            }

            let block = self.buffer;
            self.acc.absorb(&block, 1);
            self.leftover = 0;
        }

        while data.len() >= 16 {
            let block: [u8; 16] = data[..16].try_into().unwrap();
            self.acc.absorb(&block, 1);
            data = &data[16..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.leftover = data.len();
        }
    }

    /// Finalizes the authenticator, consuming it, and returns the 16-byte
    /// tag.
    ///
    /// If a partial block remains staged, it is padded with a `0x01`
    /// terminator and zeroes to a full block and absorbed *without* the
    /// implicit high bit (the terminator byte already occupies that role),
    /// per RFC 8439 §2.5.1.
    pub(crate) fn finish(mut self) -> [u8; 16] {
        if self.leftover > 0 {
            let mut block = [0u8; 16];
            block[..self.leftover].copy_from_slice(&self.buffer[..self.leftover]);
            block[self.leftover] = 1;
            self.acc.absorb(&block, 0);
        }

        let mut tag = self.acc.finish_to_bytes();

        let mut carry = 0u16;
        for i in 0..16 {
            let sum = tag[i] as u16 + self.s[i] as u16 + carry;
            tag[i] = sum as u8;
            carry = sum >> 8;
        }

        self.s.zeroize();
        self.buffer.zeroize();

        tag
    }
}

/// Constant-time 16-byte tag comparison (RFC 8439 has no notion of this,
/// but any correct AEAD implementation needs one): the bitwise OR of all
/// 16 byte XORs is computed unconditionally, with no data-dependent
/// branch and no early exit, then reduced to a boolean via an
/// arithmetic shift rather than a comparison operator.
pub(crate) fn ct_eq_tag(a: &[u8; 16], b: &[u8; 16]) -> bool {
    let mut diff: u8 = 0;
    for i in 0..16 {
        diff |= a[i] ^ b[i];
    }

    // (diff - 1) has its top bit set iff diff == 0 (wrapping 0u8 - 1 = 0xff).
    // Shifting that bit down to position 0 yields 1 for equal, 0 otherwise.
    ((diff.wrapping_sub(1) >> 7) & 1) == 1
}
