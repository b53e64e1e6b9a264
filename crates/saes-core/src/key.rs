//! Key types and the S-AES key schedule.

use crate::block::State;
use crate::sbox::{substitute_byte, SboxKind};

const RCON1: u8 = 0x80;
const RCON2: u8 = 0x30;

/// S-AES 16-bit master key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SaesKey(pub u16);

impl From<u16> for SaesKey {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<[u8; 2]> for SaesKey {
    fn from(value: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(value))
    }
}

/// Whitening keys in pipeline order: master key, `round_key1`, `round_key2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [State; 3]);

impl RoundKeys {
    /// Returns the key mixed in at `round` (0..=2).
    #[inline]
    pub fn get(&self, round: usize) -> State {
        self.0[round]
    }
}

/// Swaps the two nibbles of a byte.
#[inline]
fn rot_nib(word: u8) -> u8 {
    word.rotate_left(4)
}

#[inline]
fn sub_nib(word: u8) -> u8 {
    substitute_byte(SboxKind::Forward, word)
}

/// Expands a 16-bit key into `(round_key1, round_key2)`.
pub fn key_expansion(key: u16) -> (u16, u16) {
    let [w0, w1] = key.to_be_bytes();

    let w2 = w0 ^ RCON1 ^ sub_nib(rot_nib(w1));
    let w3 = w2 ^ w1;

    // Round two rotates w3, not w1.
    let w4 = w2 ^ RCON2 ^ sub_nib(rot_nib(w3));
    let w5 = w4 ^ w3;

    (u16::from_be_bytes([w2, w3]), u16::from_be_bytes([w4, w5]))
}

/// Expands a key into the three whitening keys used by the pipeline.
pub fn expand_key(key: &SaesKey) -> RoundKeys {
    let (k1, k2) = key_expansion(key.0);
    RoundKeys([key.0, k1, k2])
}
