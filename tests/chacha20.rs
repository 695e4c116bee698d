//! Black-box checks of ChaCha20 keystream behavior, observed through `seal`
//! since the stream cipher itself is a private implementation detail of
//! this crate (see `src/chacha20` unit tests for direct block-function
//! vectors and the portable/host byte-path cross-check).

use chachapoly::aead::{seal, NONCE_SIZE, TAG_SIZE};

fn keystream_of(key: &[u8; 32], nonce: &[u8; NONCE_SIZE], len: usize) -> Vec<u8> {
    // XOR-ing an all-zero plaintext with the keystream just *is* the
    // keystream, since encryption is plain XOR.
    let plaintext = vec![0u8; len];
    let mut ciphertext = vec![0u8; len];
    let mut tag = [0u8; TAG_SIZE];
    seal(key, nonce, &[], &plaintext, &mut ciphertext, &mut tag).unwrap();
    ciphertext
}

#[test]
fn keystream_is_deterministic_for_fixed_key_and_nonce() {
    let key = [0x07u8; 32];
    let nonce = [0x09u8; NONCE_SIZE];

    let a = keystream_of(&key, &nonce, 300);
    let b = keystream_of(&key, &nonce, 300);
    assert_eq!(a, b);
}

#[test]
fn keystream_prefix_is_stable_regardless_of_total_length() {
    // Block counter starts at 1 for the message body (block 0 is reserved
    // for the Poly1305 key), so the keystream bytes for a given block must
    // not depend on how many further blocks are requested afterwards.
    let key = [0xABu8; 32];
    let nonce = [0xCDu8; NONCE_SIZE];

    let short = keystream_of(&key, &nonce, 64);
    let long = keystream_of(&key, &nonce, 200);
    assert_eq!(short[..], long[..64]);
}

#[test]
fn counter_spans_block_boundary_consistently() {
    // Scenario 5: a message just past one block boundary (65 bytes) must
    // produce the same first 64 bytes as a one-block message, and the 65th
    // byte (first byte of the *second* keystream block) must match the
    // corresponding byte of any longer message using the same key/nonce.
    let key = [0x5Au8; 32];
    let nonce = [0x5Bu8; NONCE_SIZE];

    let one_block = keystream_of(&key, &nonce, 64);
    let boundary = keystream_of(&key, &nonce, 65);
    let longer = keystream_of(&key, &nonce, 129);

    assert_eq!(one_block[..], boundary[..64]);
    assert_eq!(boundary[64], longer[64]);
}

#[test]
fn different_nonces_produce_unrelated_keystreams() {
    let key = [0x01u8; 32];
    let a = keystream_of(&key, &[0x00u8; NONCE_SIZE], 64);
    let b = keystream_of(&key, &[0x01u8; NONCE_SIZE], 64);
    assert_ne!(a, b);
}
