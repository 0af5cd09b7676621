//! A didactic implementation of the Rijndael encryption algorithm as
//! described in the FIPS-197 AES paper.
//! See <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.197.pdf>
//!
//! The internals follow the paper section by section: the GF(2⁸)
//! arithmetic of Section 4 lives in [`math::gf256`], the state matrix
//! of Section 3.4 in [`math::matrix`], the key expansion of Section 5.2
//! in [`aes`], and the cipher routines of Sections 5.1 and 5.3 in
//! [`aes::Cipher`]. The [`blockcipher`] module layers the standard ECB,
//! CBC and CTR modes of operation over the block primitive.
//!
//! This crate aims to be clear and easy to read alongside the paper,
//! rather than efficient or constant-time. Do not use it for real
//! cryptography.
//!
//! ```
//! use rijndael::{Block, Cipher, Ecb, Key};
//!
//! let key = Key::from_bytes(b"sixteen byte key").unwrap();
//! let mode = Ecb::new(Cipher::new(key));
//!
//! let ciphertext = mode.encrypt(b"attack at dawn");
//! let decrypted = mode.decrypt(&ciphertext).unwrap();
//! assert_eq!(&decrypted[..14], b"attack at dawn");
//! ```

pub mod aes;
pub mod blockcipher;
pub mod error;
pub mod math;

pub use aes::{Cipher, Key, KeySize};
pub use blockcipher::{Block, BlockCipher, Cbc, Ctr, Ecb, BLOCK_SIZE};
pub use error::{Error, Result};
