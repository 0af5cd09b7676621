//! Helpers for the 32-bit words the key schedule works in.
//!
//! FIPS-197 treats a word as four bytes, most significant first; the
//! paper's SubWord and RotWord appear here as [`substitute`] and
//! [`rotate`].

use super::constants::SBOX;
use crate::math::matrix::Vector;

/// Packs four bytes into a word, most significant byte first.
pub fn pack(bytes: [u8; 4]) -> u32 {
    (bytes[0] as u32) << 24 | (bytes[1] as u32) << 16 | (bytes[2] as u32) << 8 | bytes[3] as u32
}

/// Unpacks a word into its four bytes, inverse of [`pack`].
pub fn unpack(word: u32) -> [u8; 4] {
    [
        (word >> 24) as u8,
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
    ]
}

/// A word as a four-byte column vector, ready to be XORed into the state.
pub fn to_vector(word: u32) -> Vector {
    Vector::new(unpack(word))
}

/// Circular left shift by one byte: [b0 b1 b2 b3] becomes [b1 b2 b3 b0].
pub fn rotate(word: u32) -> u32 {
    word << 8 | word >> 24
}

/// Replaces each byte of the word with its S-box substitution
/// (FIPS-197 Section 5.2).
pub fn substitute(word: u32) -> u32 {
    let bytes = unpack(word);
    pack([
        SBOX[bytes[0] as usize],
        SBOX[bytes[1] as usize],
        SBOX[bytes[2] as usize],
        SBOX[bytes[3] as usize],
    ])
}

/// Reads a byte slice as big-endian words. The slice length must be a
/// multiple of four; key construction guarantees this.
pub fn words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| pack([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
