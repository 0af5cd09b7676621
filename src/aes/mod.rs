//! The AES flavour of Rijndael: the key schedule and the block
//! transformation, organised to follow FIPS-197 section by section.

mod cipher;
mod constants;
mod key;
pub mod word;

pub use cipher::Cipher;
pub use key::{Key, KeySize};
