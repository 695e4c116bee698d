//! ChaCha20 block function (RFC 8439 §2.3).
//!
//! This module implements the 20-round ARX permutation over the 16-word
//! ChaCha20 state and the state-initialization rules from RFC 8439. It
//! performs no I/O, no allocation, and never branches on secret data: the
//! only inputs that influence control flow are loop trip counts that are
//! public (round count, word indices), never key, nonce, or counter bytes.

/// ChaCha20 constant words, the ASCII string `"expand 32-byte k"` encoded as
/// four little-endian `u32` words, as defined in RFC 8439 §2.3.
const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Loads a little-endian `u32` from a 4-byte slice.
///
/// Two code paths exist, selected at compile time (RFC 8439's "portability
/// contract"): a portable byte-wise path that works on any target including
/// those that forbid unaligned word loads, and a host-word-copy path used on
/// known little-endian targets where `u32::from_le_bytes` compiles down to a
/// plain load. Both must produce identical output.
#[inline(always)]
fn load_word_le(bytes: &[u8]) -> u32 {
    #[cfg(all(not(feature = "portable-bytes"), target_endian = "little"))]
    {
        u32::from_le_bytes(bytes[..4].try_into().unwrap())
    }
    #[cfg(any(feature = "portable-bytes", not(target_endian = "little")))]
    {
        (bytes[0] as u32)
            | ((bytes[1] as u32) << 8)
            | ((bytes[2] as u32) << 16)
            | ((bytes[3] as u32) << 24)
    }
}

/// Stores a `u32` as little-endian bytes, mirroring [`load_word_le`]'s
/// dual-path selection.
#[inline(always)]
fn store_word_le(word: u32, out: &mut [u8]) {
    #[cfg(all(not(feature = "portable-bytes"), target_endian = "little"))]
    {
        out[..4].copy_from_slice(&word.to_le_bytes());
    }
    #[cfg(any(feature = "portable-bytes", not(target_endian = "little")))]
    {
        out[0] = (word & 0xff) as u8;
        out[1] = ((word >> 8) & 0xff) as u8;
        out[2] = ((word >> 16) & 0xff) as u8;
        out[3] = ((word >> 24) & 0xff) as u8;
    }
}

/// Performs one ChaCha20 quarter round on four words of the state.
///
/// Branchless, constant-time with respect to the word *values* (the indices
/// `a, b, c, d` are always public round-structure constants, never derived
/// from secret data).
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the 20-round ChaCha20 permutation (10 column/diagonal round pairs)
/// to `state` in place.
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Builds the initial 16-word ChaCha20 state from key, block counter, and
/// nonce, per the layout in RFC 8439 §2.3:
///
/// ```text
/// word  0..3   constants ("expand 32-byte k")
/// word  4..11  key[0..31], eight little-endian u32 words
/// word  12     block counter
/// word  13..15 nonce[0..11], three little-endian u32 words
/// ```
fn init_state(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u32; 16] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CONSTANTS);

    for (word, chunk) in state[4..12].iter_mut().zip(key.chunks_exact(4)) {
        *word = load_word_le(chunk);
    }

    state[12] = counter;

    for (word, chunk) in state[13..16].iter_mut().zip(nonce.chunks_exact(4)) {
        *word = load_word_le(chunk);
    }

    state
}

/// Generates a single 64-byte ChaCha20 keystream block for the given key,
/// block counter, and nonce.
///
/// This is the ChaCha20 block function of RFC 8439 §2.3: ten double rounds
/// applied to the initialized state, followed by a word-wise feed-forward
/// addition of the original state, serialized as sixteen little-endian
/// `u32` words.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let original = init_state(key, counter, nonce);
    let mut working = original;

    rounds(&mut working);

    for (word, orig) in working.iter_mut().zip(&original) {
        *word = word.wrapping_add(*orig);
    }

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(4).zip(&working) {
        store_word_le(*word, chunk);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439 §2.3.2 test vector.
    #[test]
    fn block_matches_rfc_vector() {
        let key: [u8; 32] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b,
            0x1c, 0x1d, 0x1e, 0x1f,
        ];
        let nonce: [u8; 12] = [
            0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x4a, 0x00, 0x00, 0x00, 0x00,
        ];
        let expected: [u8; 64] = [
            0x10, 0xf1, 0xe7, 0xe4, 0xd1, 0x3b, 0x59, 0x15, 0x50, 0x0f, 0xdd, 0x1f, 0xa3, 0x20,
            0x71, 0xc4, 0xc7, 0xd1, 0xf4, 0xc7, 0x33, 0xc0, 0x68, 0x03, 0x04, 0x22, 0xaa, 0x9a,
            0xc3, 0xd4, 0x6c, 0x4e, 0xd2, 0x82, 0x64, 0x46, 0x07, 0x9f, 0xaa, 0x09, 0x14, 0xc2,
            0xd7, 0x05, 0xd9, 0x8b, 0x02, 0xa2, 0xb5, 0x12, 0x9c, 0xd1, 0xde, 0x16, 0x4e, 0xb9,
            0xcb, 0xd0, 0x83, 0xe8, 0xa2, 0x50, 0x3c, 0x4e,
        ];

        assert_eq!(block(&key, 1, &nonce), expected);
    }

    #[test]
    fn portable_and_host_word_paths_agree() {
        let key = [0x42u8; 32];
        let nonce = [0x24u8; 12];

        let portable = {
            let mut s = init_state(&key, 7, &nonce);
            let original = s;
            rounds(&mut s);
            for (w, o) in s.iter_mut().zip(&original) {
                *w = w.wrapping_add(*o);
            }
            s
        };

        let mut bytewise = [0u8; 64];
        for (chunk, word) in bytewise.chunks_exact_mut(4).zip(&portable) {
            chunk[0] = (*word & 0xff) as u8;
            chunk[1] = ((*word >> 8) & 0xff) as u8;
            chunk[2] = ((*word >> 16) & 0xff) as u8;
            chunk[3] = ((*word >> 24) & 0xff) as u8;
        }

        assert_eq!(block(&key, 7, &nonce), bytewise);
    }
}
