//! Error types for the huffpress system.
//!
//! All operations return structured errors rather than panicking.
//! The encoder exposes a typed taxonomy so calling code and tests can
//! discriminate failure modes; the CLI layer flattens everything into a
//! single user-facing message.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a failure domain:
/// - Encode: Huffman code construction or bit packing failures
/// - I/O: file system operations
/// - Config: invalid command-line configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman encoding error (e.g., nothing to encode)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Huffman encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Input contained no symbols, so no code tree can be built
    #[error("empty input: no symbols to encode")]
    EmptyInput,

    /// A derived code does not fit the packed 64-bit representation
    #[error("code length {length} exceeds maximum 64 bits")]
    CodeTooLong { length: usize },

    /// An input symbol has no assigned code; cannot occur when the code
    /// table was derived from the same input buffer
    #[error("no code assigned for symbol {symbol:#04x}")]
    MissingCode { symbol: u8 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
