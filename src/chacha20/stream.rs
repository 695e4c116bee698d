//! ChaCha20 keystream generation over arbitrary-length buffers.
//!
//! Built on top of [`super::core::block`], the single 64-byte block
//! function. This module owns the counter-increment loop and the
//! one-block keygen helper used to derive the Poly1305 one-time key.

use super::core::block;

/// XORs `input` with the ChaCha20 keystream starting at block counter
/// `counter`, writing the result to `output`.
///
/// `output` must be the same length as `input`. The counter increments by
/// one per full 64-byte block emitted and wraps modulo 2^32, matching the
/// state's 32-bit counter word; callers are responsible for keeping any
/// single message within the RFC 8439 cap of 2^32 * 64 bytes.
///
/// # Panics
///
/// Panics if `input.len() != output.len()`.
pub(crate) fn xor(key: &[u8; 32], nonce: &[u8; 12], counter: u32, input: &[u8], output: &mut [u8]) {
    assert_eq!(input.len(), output.len());

    let mut block_counter = counter;
    let mut offset = 0usize;

    while offset < input.len() {
        let keystream = block(key, block_counter, nonce);
        block_counter = block_counter.wrapping_add(1);

        let remaining = input.len() - offset;
        let take = remaining.min(64);

        for i in 0..take {
            output[offset + i] = input[offset + i] ^ keystream[i];
        }

        offset += take;
    }
}

/// Produces the first 64 bytes of ChaCha20 keystream at counter = 0.
///
/// This is the keygen step of RFC 8439 §2.6: the first 32 bytes of the
/// result are the one-time Poly1305 key. Exposed as a dedicated helper
/// rather than `xor` against a zero buffer because it is materially
/// cheaper — no input buffer, no XOR pass — and because keying off a
/// caller-supplied buffer (XORing the keystream against the key bytes,
/// say) would silently diverge from RFC 8439 for any non-zero input.
pub(crate) fn one_block_keystream(key: &[u8; 32], nonce: &[u8; 12]) -> [u8; 64] {
    block(key, 0, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439 §2.4.2 test vector (AD/nonce/key as given, counter = 1).
    #[test]
    fn xor_matches_rfc_vector() {
        let key: [u8; 32] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b,
            0x1c, 0x1d, 0x1e, 0x1f,
        ];
        let nonce: [u8; 12] = [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x4a, 0x00, 0x00, 0x00, 0x00,
        ];
        let plaintext =
            b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";
        let expected: [u8; 114] = [
            0x6e, 0x2e, 0x35, 0x9a, 0x25, 0x68, 0xf9, 0x80, 0x41, 0xba, 0x07, 0x28, 0xdd, 0x0d,
            0x69, 0x81, 0xe9, 0x7e, 0x7a, 0xec, 0x1d, 0x43, 0x60, 0xc2, 0x0a, 0x27, 0xaf, 0xcc,
            0xfd, 0x9f, 0xae, 0x0b, 0xf9, 0x1b, 0x65, 0xc5, 0x52, 0x47, 0x33, 0xab, 0x8f, 0x59,
            0x3d, 0xab, 0xcd, 0x62, 0xb3, 0x57, 0x16, 0x39, 0xd6, 0x24, 0xe6, 0x51, 0x52, 0xab,
            0x8f, 0x53, 0x0c, 0x35, 0x9f, 0x08, 0x61, 0xd8, 0x07, 0xca, 0x0d, 0xbf, 0x50, 0x0d,
            0x6a, 0x61, 0x56, 0xa3, 0x8e, 0x08, 0x8a, 0x22, 0xb6, 0x5e, 0x52, 0xbc, 0x51, 0x4d,
            0x16, 0xcc, 0xf8, 0x06, 0x81, 0x8c, 0xe9, 0x1a, 0xb7, 0x79, 0x37, 0x36, 0x5a, 0xf9,
            0x0b, 0xbf, 0x74, 0xa3, 0x5b, 0xe6, 0xb4, 0x0b, 0x8e, 0xed, 0xf2, 0x78, 0x5e, 0x42,
            0x87, 0x4d,
        ];

        let mut out = [0u8; 114];
        xor(&key, &nonce, 1, plaintext, &mut out);
        assert_eq!(out, expected);
    }

    #[test]
    fn counter_spans_block_boundary() {
        let key = [0x11u8; 32];
        let nonce = [0x22u8; 12];
        let plaintext = [0u8; 65];

        let mut full = [0u8; 65];
        xor(&key, &nonce, 2, &plaintext, &mut full);

        // Byte 64 (the 65th byte) must equal keystream byte 0 from counter = 3.
        let next_block = block(&key, 3, &nonce);
        assert_eq!(full[64], next_block[0]);
    }

    #[test]
    fn keystream_is_deterministic() {
        let key = [0x7au8; 32];
        let nonce = [0x5cu8; 12];

        let a = one_block_keystream(&key, &nonce);
        let b = one_block_keystream(&key, &nonce);
        assert_eq!(a, b);
    }

    #[test]
    fn nonce_reuse_reveals_identical_keystream() {
        let key = [0x03u8; 32];
        let nonce = [0x09u8; 12];

        let p1 = b"the quick brown fox jumps over";
        let p2 = b"a completely different message";

        let mut c1 = [0u8; 30];
        let mut c2 = [0u8; 30];
        xor(&key, &nonce, 1, p1, &mut c1);
        xor(&key, &nonce, 1, p2, &mut c2);

        for i in 0..p1.len() {
            assert_eq!(c1[i] ^ c2[i] ^ p1[i] ^ p2[i], 0);
        }
    }
}
