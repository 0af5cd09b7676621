use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported at the crate's public boundary.
///
/// All of these are construction-time rejections of malformed input;
/// nothing in the cipher core itself can fail once a `Key` and `Block`
/// have been built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// AES keys are 16, 24 or 32 bytes; nothing else expands to a schedule.
    #[error("invalid key length: expected 16, 24 or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Blocks hold at most 16 bytes; shorter inputs are zero-padded,
    /// longer inputs are rejected.
    #[error("block too large: expected at most 16 bytes, got {0}")]
    BlockTooLarge(usize),

    /// Ciphertext handed to ECB or CBC decryption must already be whole
    /// blocks; the mode layer never pads on the way back.
    #[error("input length {0} is not a multiple of the 16-byte block size")]
    NotBlockAligned(usize),

    /// The trailing count byte of a padded message did not describe the
    /// bytes in front of it.
    #[error("final block contains invalid padding")]
    InvalidPadding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidKeyLength(15).to_string(),
            "invalid key length: expected 16, 24 or 32 bytes, got 15"
        );
        assert_eq!(
            Error::NotBlockAligned(17).to_string(),
            "input length 17 is not a multiple of the 16-byte block size"
        );
    }
}
