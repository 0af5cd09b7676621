//! Keys and the key expansion routine of FIPS-197 Section 5.2.

use rand::{CryptoRng, RngCore};

use super::word;
use crate::error::{Error, Result};
use crate::math::gf256;

/// Number of columns in the state. Rijndael allows this to vary, but AES
/// fixes it at 4 (the `Nb` parameter, FIPS-197 Section 2.2).
pub(crate) const NUM_COLUMNS: usize = 4;

/// The three key sizes AES admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    /// The raw key material length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes192 => 24,
            KeySize::Aes256 => 32,
        }
    }
}

/// A cipher key: 4, 6 or 8 words of material, from which the key
/// schedule is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    words: Vec<u32>,
}

impl Key {
    /// Parses raw key material. Anything other than 16, 24 or 32 bytes
    /// is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            16 | 24 | 32 => Ok(Self {
                words: word::words(bytes),
            }),
            n => Err(Error::InvalidKeyLength(n)),
        }
    }

    /// Draws a fresh key of the given size from a cryptographic RNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, size: KeySize) -> Self {
        let mut bytes = vec![0u8; size.byte_len()];
        rng.fill_bytes(&mut bytes);

        Self {
            words: word::words(&bytes),
        }
    }

    /// The number of 32-bit words in the key (the `Nk` parameter).
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn words(&self) -> &[u32] {
        &self.words
    }
}

/// The round constant: x^round reduced mod the field polynomial, placed
/// in the most significant byte of a word. The power is taken as a
/// plain integer shift before reduction.
fn rcon(round: usize) -> u32 {
    gf256::poly_mod(1 << round, gf256::POLY) << 24
}

/// Expands a key into `Nb * (Nr + 1)` words of round-key material
/// (the KeyExpansion routine, FIPS-197 Figure 11).
pub(crate) fn expand(key: &Key, num_rounds: usize) -> Vec<u32> {
    let nk = key.num_words();
    let total = NUM_COLUMNS * (num_rounds + 1);
    let mut out = vec![0u32; total];

    // The schedule opens with the key itself, verbatim.
    out[..nk].copy_from_slice(key.words());

    for i in nk..total {
        let mut temp = out[i - 1];
        if i % nk == 0 {
            temp = word::substitute(word::rotate(temp)) ^ rcon(i / nk - 1);
        } else if nk > 6 && i % nk == 4 {
            // Only the 256-bit schedule takes this extra substitution.
            temp = word::substitute(temp);
        }
        out[i] = out[i - nk] ^ temp;
    }

    out
}
