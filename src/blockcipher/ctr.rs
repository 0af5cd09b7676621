//! Counter mode: a block cipher turned stream cipher by encrypting a
//! counter and XORing the result with the data.

use super::{Block, BlockCipher, BLOCK_SIZE};

/// CTR mode around a block cipher.
///
/// The counter block is two little-endian 64-bit halves: a fixed nonce
/// in the first eight bytes and a running block counter in the last
/// eight. The counter starts at zero and advances once per block,
/// persisting across calls on the same mode value, so a single `Ctr`
/// never reuses a keystream block. Reusing a `(key, nonce)` pair across
/// two separate `Ctr` values replays the keystream against new
/// plaintext, which forfeits all confidentiality.
pub struct Ctr<C: BlockCipher> {
    cipher: C,
    nonce: u64,
    counter: u64,
}

impl<C: BlockCipher> Ctr<C> {
    /// A counter mode with an all-zero nonce half.
    pub fn new(cipher: C) -> Self {
        Self::with_nonce(cipher, 0)
    }

    /// A counter mode with a caller-chosen nonce in the upper half of
    /// the counter block.
    pub fn with_nonce(cipher: C, nonce: u64) -> Self {
        Self {
            cipher,
            nonce,
            counter: 0,
        }
    }

    /// Encrypts the counter block for the current position.
    fn keystream_block(&self) -> Block {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes[..8].copy_from_slice(&self.nonce.to_le_bytes());
        bytes[8..].copy_from_slice(&self.counter.to_le_bytes());

        self.cipher.encrypt_block(Block::from(bytes))
    }

    /// XORs the keystream over a byte stream of any length. A final
    /// partial block consumes one keystream block and emits only as
    /// many bytes as it was given; nothing is padded.
    pub fn encrypt(&mut self, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes.len());

        for chunk in bytes.chunks(BLOCK_SIZE) {
            let keystream = self.keystream_block();
            self.counter += 1;

            for (i, &byte) in chunk.iter().enumerate() {
                out.push(byte ^ keystream[i]);
            }
        }

        out
    }

    /// Identical to [`encrypt`](Self::encrypt): XORing the same
    /// keystream twice is the identity.
    pub fn decrypt(&mut self, bytes: &[u8]) -> Vec<u8> {
        self.encrypt(bytes)
    }
}
