use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the Base58 codec and the Base58Check envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character outside the 58-symbol alphabet was found while decoding.
    #[error("character {character:?} at position {position} is not a valid base58 character")]
    InvalidAlphabet { character: char, position: usize },
    /// A version number outside 0..=255 was supplied.
    #[error("version must be in range 0 to 255 inclusive; got {0}")]
    InvalidVersion(i64),
    /// The decoded data cannot hold a version byte and a checksum.
    #[error("decoded data is {0} bytes, need at least 5 for version and checksum")]
    MalformedPayload(usize),
    /// The embedded checksum does not match the recomputed one.
    #[error("checksum mismatch: expected {expected:02x?}, calculated {calculated:02x?}")]
    ChecksumMismatch {
        expected: [u8; 4],
        calculated: [u8; 4],
    },
}

impl Error {
    /// True when the text decoded cleanly but failed integrity verification.
    ///
    /// Everything else means the text itself was malformed (a typo, a foreign
    /// character, truncation) rather than corrupted data under a valid encoding.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, Error::ChecksumMismatch { .. })
    }
}
