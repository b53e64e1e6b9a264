//! Arithmetic in GF(2^4) modulo `x^4 + x + 1`.

use crate::block::{join_byte, split_byte, Nibble};

/// Reduction polynomial `x^4 + x + 1`.
const MODULUS: u8 = 0b1_0011;

/// 2×2 matrix of GF(2^4) elements, row-major.
pub type MixMatrix = [[Nibble; 2]; 2];

/// Matrix applied to each column by MixColumns.
pub const MIX_MATRIX: MixMatrix = [[0x1, 0x4], [0x4, 0x1]];

/// Inverse of [`MIX_MATRIX`] over GF(2^4).
pub const INV_MIX_MATRIX: MixMatrix = [[0x9, 0x2], [0x2, 0x9]];

/// Multiplies two nibbles in GF(2^4).
///
/// Inputs wider than four bits are truncated before use.
pub fn gf_multiply(a: Nibble, b: Nibble) -> Nibble {
    let mut a = a & 0xF;
    let mut b = b & 0xF;
    let mut product = 0u8;
    for _ in 0..4 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x8;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= MODULUS;
        }
        b >>= 1;
    }
    product & 0xF
}

/// Multiplies a column `(top, bottom)` packed into a byte by `matrix`.
pub fn mix_column(matrix: &MixMatrix, column: u8) -> u8 {
    let (s0, s1) = split_byte(column);
    let t0 = gf_multiply(matrix[0][0], s0) ^ gf_multiply(matrix[0][1], s1);
    let t1 = gf_multiply(matrix[1][0], s0) ^ gf_multiply(matrix[1][1], s1);
    join_byte(t0, t1)
}
