//! State representation helpers.
//!
//! The 16-bit state is a 2×2 nibble matrix in column-major order:
//!
//! ```text
//! bits 15..12 -> (row 0, col 0)    bits 7..4 -> (row 0, col 1)
//! bits 11..8  -> (row 1, col 0)    bits 3..0 -> (row 1, col 1)
//! ```

/// 4-bit value stored in the low half of a `u8`.
pub type Nibble = u8;

/// S-AES block of 16 bits.
pub type State = u16;

/// Splits a state into its four nibbles, most significant first.
#[inline]
pub fn to_nibbles(state: State) -> [Nibble; 4] {
    [
        ((state >> 12) & 0xF) as Nibble,
        ((state >> 8) & 0xF) as Nibble,
        ((state >> 4) & 0xF) as Nibble,
        (state & 0xF) as Nibble,
    ]
}

/// Joins four nibbles, most significant first, into a state.
#[inline]
pub fn from_nibbles(nibbles: [Nibble; 4]) -> State {
    nibbles
        .iter()
        .fold(0u16, |acc, &n| (acc << 4) | State::from(n & 0xF))
}

/// Splits a state into its two 8-bit columns `(col0, col1)`.
#[inline]
pub fn to_columns(state: State) -> (u8, u8) {
    ((state >> 8) as u8, (state & 0xFF) as u8)
}

/// Joins two 8-bit columns into a state.
#[inline]
pub fn from_columns(col0: u8, col1: u8) -> State {
    (State::from(col0) << 8) | State::from(col1)
}

/// Splits a byte into `(high, low)` nibbles.
#[inline]
pub fn split_byte(byte: u8) -> (Nibble, Nibble) {
    ((byte >> 4) & 0xF, byte & 0xF)
}

/// Joins `(high, low)` nibbles into a byte.
#[inline]
pub fn join_byte(high: Nibble, low: Nibble) -> u8 {
    ((high & 0xF) << 4) | (low & 0xF)
}
