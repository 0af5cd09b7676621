//! Cipher block chaining: each plaintext block is XORed with the
//! previous ciphertext block before encryption, seeded by an IV.

use super::{blockify, Block, BlockCipher, BLOCK_SIZE};
use crate::error::{Error, Result};

/// CBC mode around a block cipher and an initialization vector.
///
/// Every `encrypt` or `decrypt` call restarts the chain from the IV the
/// mode was built with. That makes repeated calls with one `Cbc` value
/// equivalent to reusing an IV, so callers wanting one-IV-per-message
/// semantics build a fresh mode (with a fresh [`Block::random`] IV) per
/// message and ship the IV alongside the ciphertext.
pub struct Cbc<C: BlockCipher> {
    cipher: C,
    iv: Block,
}

impl<C: BlockCipher> Cbc<C> {
    pub fn new(cipher: C, iv: Block) -> Self {
        Self { cipher, iv }
    }

    /// Encrypts a byte stream, padding a final partial block.
    pub fn encrypt(&self, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes.len() + BLOCK_SIZE);
        let mut previous = self.iv;

        for block in blockify(bytes) {
            let encrypted = self.cipher.encrypt_block(block ^ previous);
            out.extend_from_slice(encrypted.as_ref());
            previous = encrypted;
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
        let mut previous = self.iv;

        for block in blockify(bytes) {
            let decrypted = self.cipher.decrypt_block(block) ^ previous;
            out.extend_from_slice(decrypted.as_ref());
            previous = block;
        }

        Ok(out)
    }
}
