//! Error types for mail-cleaner.
//!
//! Only decoding steps can fail. The high-level cleaning entry points absorb
//! these errors; they surface through the lower-level decoding functions.

/// Error type for decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character outside Latin-1 cannot be mapped to a single byte for
    /// quoted-printable decoding.
    #[error("character {ch:?} at position {position} is not representable in Latin-1")]
    UnencodableChar {
        /// The offending character.
        ch: char,
        /// Character index (not byte offset) within the input.
        position: usize,
    },

    /// An explicit charset label was not recognised.
    #[error("Unknown character encoding: {0}")]
    UnknownEncoding(String),
}

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;
