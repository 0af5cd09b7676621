//! Electronic codebook mode: each block through the cipher on its own.

use super::{blockify, BlockCipher, BLOCK_SIZE};
use crate::error::{Error, Result};

/// ECB is the degenerate mode: no chaining, no per-message state.
///
/// Equal plaintext blocks produce equal ciphertext blocks, which leaks
/// the structure of the message. It is here because the paper's test
/// vectors use it, not because anyone should.
pub struct Ecb<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> Ecb<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Encrypts a byte stream, padding a final partial block.
    pub fn encrypt(&self, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes.len() + BLOCK_SIZE);
        for block in blockify(bytes) {
            out.extend_from_slice(self.cipher.encrypt_block(block).as_ref());
        }

        out
    }

    /// Decrypts a stream of whole ciphertext blocks. Padding, if the
    /// encryptor added any, is left in place.
    pub fn decrypt(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        if bytes.len() % BLOCK_SIZE != 0 {
            return Err(Error::NotBlockAligned(bytes.len()));
        }

        let mut out = Vec::with_capacity(bytes.len());
        for block in blockify(bytes) {
            out.extend_from_slice(self.cipher.decrypt_block(block).as_ref());
        }

        Ok(out)
    }
}
