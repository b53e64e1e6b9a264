//! Reference Simplified-AES (S-AES) implementation.
//!
//! S-AES is the educational 16-bit block cipher with a 16-bit key and a
//! 2.5-round substitution-permutation network. This crate provides:
//! - Multiplication in GF(2^4) modulo `x^4 + x + 1`.
//! - The fixed forward/inverse S-boxes and mix matrices.
//! - The two-step key schedule.
//! - Single-block encryption and decryption, plus per-stage traces.
//!
//! Every function is a pure transform over fixed-width integers. The cipher is
//! a teaching aid and offers no security.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
mod cipher;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;

pub use crate::block::{Nibble, State};
pub use crate::cipher::{
    decrypt, decrypt_block, decrypt_trace, encrypt, encrypt_block, encrypt_trace, Stage,
};
pub use crate::gf::gf_multiply;
pub use crate::key::{expand_key, key_expansion, RoundKeys, SaesKey};
pub use crate::sbox::SboxKind;
