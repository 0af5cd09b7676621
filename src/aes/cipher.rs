//! The block transformation itself: the Cipher and InvCipher routines
//! of FIPS-197 Sections 5.1 and 5.3.
//!
//! Each round function takes a state by value and returns a fresh one,
//! mirroring the paper's `state' = f(state)` notation.

use super::constants::{
    MIX_COLUMN_POLYNOMIALS, MIX_COLUMN_POLYNOMIALS_INVERSE, SBOX, SBOX_INVERSE,
};
use super::key::{self, Key, NUM_COLUMNS};
use super::word;
use crate::blockcipher::{Block, BlockCipher};
use crate::math::gf256;
use crate::math::matrix::{Matrix, Vector};

/// A key schedule and its round count, bundled for reuse.
///
/// A `Cipher` is immutable once built: it can encrypt any number of
/// blocks, and shared references to it may be used from any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Cipher {
    schedule: Vec<u32>,
    num_rounds: usize,
}

impl Cipher {
    /// Derives the key schedule. The number of rounds follows from the
    /// key size alone: 10, 12 or 14 (the `Nr` parameter, FIPS-197
    /// Section 2.2).
    pub fn new(key: Key) -> Self {
        let num_rounds = 6 + key.num_words();

        Self {
            schedule: key::expand(&key, num_rounds),
            num_rounds,
        }
    }

    /// Encrypts one block (FIPS-197 Section 5.1).
    pub fn encrypt(&self, block: Block) -> Block {
        let mut state = parse(block);

        // The zeroth round only adds the round key.
        state = add_round_key(state, &self.schedule, 0);

        // The intermediate rounds run all four transformations.
        for round in 1..self.num_rounds {
            state = sub_bytes(state);
            state = shift_rows(state);
            state = mix_columns(state, MIX_COLUMN_POLYNOMIALS);
            state = add_round_key(state, &self.schedule, round);
        }

        // The last round skips column mixing.
        state = sub_bytes(state);
        state = shift_rows(state);
        state = add_round_key(state, &self.schedule, self.num_rounds);

        emit(state)
    }

    /// Decrypts one block: the InvCipher routine of FIPS-197
    /// Section 5.3, the encryption steps inverted and in reverse order.
    pub fn decrypt(&self, block: Block) -> Block {
        let mut state = parse(block);

        state = add_round_key(state, &self.schedule, self.num_rounds);

        for round in (1..self.num_rounds).rev() {
            state = shift_rows_inverse(state);
            state = sub_bytes_inverse(state);
            state = add_round_key(state, &self.schedule, round);
            state = mix_columns(state, MIX_COLUMN_POLYNOMIALS_INVERSE);
        }

        state = shift_rows_inverse(state);
        state = sub_bytes_inverse(state);
        state = add_round_key(state, &self.schedule, 0);

        emit(state)
    }
}

impl BlockCipher for Cipher {
    fn encrypt_block(&self, block: Block) -> Block {
        self.encrypt(block)
    }

    fn decrypt_block(&self, block: Block) -> Block {
        self.decrypt(block)
    }
}

/// Loads a block into the state column by column:
/// `state[r][c] = block[r + 4c]` (FIPS-197 Section 3.4).
fn parse(block: Block) -> Matrix {
    let mut state = Matrix::new();
    for r in 0..4 {
        for c in 0..4 {
            state[r][c] = block[r + 4 * c];
        }
    }

    state
}

/// Unloads the state back into a block, the inverse of [`parse`]:
/// walking the transpose row by row lands `state[r][c]` at `r + 4c`.
fn emit(state: Matrix) -> Block {
    let transposed = state.transpose();
    let mut out = [0u8; 16];
    for r in 0..4 {
        for c in 0..4 {
            out[4 * r + c] = transposed[r][c];
        }
    }

    Block::from(out)
}

/// Substitutes every state byte through the forward S-box.
fn sub_bytes(state: Matrix) -> Matrix {
    let mut out = Matrix::new();
    for row in 0..4 {
        for col in 0..4 {
            out[row][col] = SBOX[state[row][col] as usize];
        }
    }

    out
}

fn sub_bytes_inverse(state: Matrix) -> Matrix {
    let mut out = Matrix::new();
    for row in 0..4 {
        for col in 0..4 {
            out[row][col] = SBOX_INVERSE[state[row][col] as usize];
        }
    }

    out
}

/// Rotates row i left by i positions (FIPS-197 Section 5.1.2).
fn shift_rows(state: Matrix) -> Matrix {
    let mut out = Matrix::new();
    for i in 0..4 {
        let row = state.row(i);
        let mut rotated = Vector::zero();
        for j in 0..4 {
            rotated[j] = row[(j + i) % 4];
        }
        out.set_row(rotated, i);
    }

    out
}

/// Rotates row i right by i positions, undoing [`shift_rows`].
fn shift_rows_inverse(state: Matrix) -> Matrix {
    let mut out = Matrix::new();
    for i in 0..4 {
        let row = state.row(i);
        let mut rotated = Vector::zero();
        for j in 0..4 {
            rotated[j] = row[(j + 4 - i) % 4];
        }
        out.set_row(rotated, i);
    }

    out
}

/// Multiplies every state column by a fixed coefficient matrix over
/// GF(2⁸). Encryption and decryption differ only in which matrix is
/// passed in.
fn mix_columns(state: Matrix, polynomials: Matrix) -> Matrix {
    let mut out = Matrix::new();
    for row in 0..4 {
        for col in 0..4 {
            out[row][col] = gf256::dot(polynomials.row(row), state.column(col));
        }
    }

    out
}

/// XORs the round's four schedule words into the state, column by
/// column (FIPS-197 Section 5.1.4).
fn add_round_key(state: Matrix, schedule: &[u32], round: usize) -> Matrix {
    let mut out = Matrix::new();
    for c in 0..NUM_COLUMNS {
        let column = state.column(c) ^ word::to_vector(schedule[round * NUM_COLUMNS + c]);
        out.set_column(column, c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex::FromHex;

    fn block(hex: &str) -> Block {
        Block::from(<[u8; 16]>::from_hex(hex).unwrap())
    }

    fn cipher(key_hex: &str) -> Cipher {
        let bytes = Vec::from_hex(key_hex).unwrap();
        Cipher::new(Key::from_bytes(&bytes).unwrap())
    }

    #[test]
    fn test_parse_emit_self_inverse() {
        let input = block("000102030405060708090a0b0c0d0e0f");
        assert_eq!(emit(parse(input)), input);
        // And parse really is column-major.
        let state = parse(input);
        assert_eq!(state.column(0), Vector::new([0x00, 0x01, 0x02, 0x03]));
        assert_eq!(state.row(0), Vector::new([0x00, 0x04, 0x08, 0x0c]));
    }

    #[test]
    fn test_shift_rows_round_trips() {
        let state = parse(block("00112233445566778899aabbccddeeff"));
        assert_eq!(shift_rows_inverse(shift_rows(state)), state);
        // Row 0 is left in place.
        assert_eq!(shift_rows(state).row(0), state.row(0));
        // Row 1 rotates left by one.
        let row = state.row(1);
        assert_eq!(
            shift_rows(state).row(1),
            Vector::new([row[1], row[2], row[3], row[0]])
        );
    }

    #[test]
    fn test_sub_bytes_round_trips() {
        let state = parse(block("3243f6a8885a308d313198a2e0370734"));
        assert_eq!(sub_bytes_inverse(sub_bytes(state)), state);
    }

    #[test]
    fn test_mix_columns_round_trips() {
        let state = parse(block("d4bf5d30e0b452aeb84111f11e2798e5"));
        let mixed = mix_columns(state, MIX_COLUMN_POLYNOMIALS);
        // The FIPS-197 Appendix B round 1 MixColumns output.
        assert_eq!(mixed, parse(block("046681e5e0cb199a48f8d37a2806264c")));
        assert_eq!(mix_columns(mixed, MIX_COLUMN_POLYNOMIALS_INVERSE), state);
    }

    #[test]
    fn test_fips_appendix_b() {
        let aes = cipher("2b7e151628aed2a6abf7158809cf4f3c");
        let plaintext = block("3243f6a8885a308d313198a2e0370734");
        let ciphertext = block("3925841d02dc09fbdc118597196a0b32");

        assert_eq!(aes.encrypt(plaintext), ciphertext);
        assert_eq!(aes.decrypt(ciphertext), plaintext);
    }

    #[test]
    fn test_fips_appendix_c1_aes128() {
        let aes = cipher("000102030405060708090a0b0c0d0e0f");
        let plaintext = block("00112233445566778899aabbccddeeff");
        let ciphertext = block("69c4e0d86a7b0430d8cdb78070b4c55a");

        assert_eq!(aes.encrypt(plaintext), ciphertext);
        assert_eq!(aes.decrypt(ciphertext), plaintext);
    }

    #[test]
    fn test_fips_appendix_c2_aes192() {
        let aes = cipher("000102030405060708090a0b0c0d0e0f1011121314151617");
        let plaintext = block("00112233445566778899aabbccddeeff");
        let ciphertext = block("dda97ca4864cdfe06eaf70a0ec0d7191");

        assert_eq!(aes.encrypt(plaintext), ciphertext);
        assert_eq!(aes.decrypt(ciphertext), plaintext);
    }

    #[test]
    fn test_fips_appendix_c3_aes256() {
        let aes = cipher(
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        );
        let plaintext = block("00112233445566778899aabbccddeeff");
        let ciphertext = block("8ea2b7ca516745bfeafc49904b496089");

        assert_eq!(aes.encrypt(plaintext), ciphertext);
        assert_eq!(aes.decrypt(ciphertext), plaintext);
    }

    #[test]
    fn test_round_trip_assorted_blocks() {
        let aes = cipher("2b7e151628aed2a6abf7158809cf4f3c");
        for input in [
            block("00000000000000000000000000000000"),
            block("ffffffffffffffffffffffffffffffff"),
            block("0123456789abcdef0123456789abcdef"),
        ] {
            assert_eq!(aes.decrypt(aes.encrypt(input)), input);
        }
    }
}
