//! Runtime for applying S-AES to byte buffers.
//!
//! Buffers are processed as consecutive big-endian 16-bit blocks, each
//! encrypted independently under one expanded key. No padding is applied.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;

pub use crate::cipher::SaesCipher;
pub use crate::error::{Result, SaesError};

/// Size of one S-AES block in bytes.
pub const BLOCK_BYTES: usize = 2;
