//! Error types for buffer operations.

use thiserror::Error;

/// Errors raised when a buffer cannot be split into S-AES blocks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaesError {
    /// The buffer length is not a multiple of the 2-byte block size.
    #[error("input length {len} is not a multiple of the {block} byte block size", block = crate::BLOCK_BYTES)]
    InvalidInputLength {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },
}

/// Result alias for buffer operations.
pub type Result<T> = std::result::Result<T, SaesError>;
