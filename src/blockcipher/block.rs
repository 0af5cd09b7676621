//! The 16-byte block, and the chopping of byte streams into blocks.

use std::ops::{BitXor, Index};

use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// AES always works on 128-bit blocks, whatever the key size.
pub const BLOCK_SIZE: usize = 16;

/// A 16-byte block, the unit the cipher consumes and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block([u8; BLOCK_SIZE]);

impl Block {
    /// Builds a block from up to 16 bytes, zero-padding short input on
    /// the right. More than 16 bytes is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > BLOCK_SIZE {
            return Err(Error::BlockTooLarge(bytes.len()));
        }

        let mut block = [0u8; BLOCK_SIZE];
        block[..bytes.len()].copy_from_slice(bytes);

        Ok(Self(block))
    }

    /// Draws a random block from a cryptographic RNG. The usual way to
    /// pick a CBC initialization vector.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut block);

        Self(block)
    }

    pub const fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }
}

impl From<[u8; BLOCK_SIZE]> for Block {
    fn from(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Index<usize> for Block {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Byte-wise XOR of two blocks, the combining step of CBC and CTR.
impl BitXor for Block {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut out = [0u8; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            out[i] = self.0[i] ^ rhs.0[i];
        }

        Self(out)
    }
}

/// Splits a byte stream into blocks. A final partial block of r bytes
/// is completed with `16 - r` bytes of value `16 - r` (the PKCS#7
/// count-byte scheme); input already a whole number of blocks gains
/// nothing, so block-aligned messages survive an encrypt/decrypt
/// round trip unchanged.
pub fn blockify(bytes: &[u8]) -> Vec<Block> {
    let mut out = Vec::with_capacity(bytes.len() / BLOCK_SIZE + 1);

    let mut chunks = bytes.chunks_exact(BLOCK_SIZE);
    for chunk in &mut chunks {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        out.push(Block(block));
    }

    let remainder = chunks.remainder();
    if !remainder.is_empty() {
        let pad = (BLOCK_SIZE - remainder.len()) as u8;
        let mut block = [pad; BLOCK_SIZE];
        block[..remainder.len()].copy_from_slice(remainder);
        out.push(Block(block));
    }

    out
}

/// Strips trailing count-byte padding, for consumers that know the
/// original message was padded. The mode layer itself never unpads:
/// decryption hands back every byte it produced.
pub fn unpad(bytes: &[u8]) -> Result<&[u8]> {
    if bytes.len() % BLOCK_SIZE != 0 {
        return Err(Error::NotBlockAligned(bytes.len()));
    }

    let Some(&last) = bytes.last() else {
        return Err(Error::InvalidPadding);
    };

    let count = last as usize;
    if count == 0 || count > BLOCK_SIZE {
        return Err(Error::InvalidPadding);
    }

    let (message, padding) = bytes.split_at(bytes.len() - count);
    if padding.iter().any(|&b| b as usize != count) {
        return Err(Error::InvalidPadding);
    }

    Ok(message)
}
