//! S-AES nibble substitution tables.

use crate::block::{from_nibbles, join_byte, split_byte, to_nibbles, Nibble, State};

/// Forward S-box, indexed `[n >> 2][n & 3]`.
const SBOX: [[Nibble; 4]; 4] = [
    [0x9, 0x4, 0xA, 0xB],
    [0xD, 0x1, 0x8, 0x5],
    [0x6, 0x2, 0x0, 0x3],
    [0xC, 0xE, 0xF, 0x7],
];

/// Inverse S-box, indexed like [`SBOX`].
const INV_SBOX: [[Nibble; 4]; 4] = [
    [0xA, 0x5, 0x9, 0xB],
    [0x1, 0x7, 0x8, 0xF],
    [0x6, 0x0, 0x2, 0x3],
    [0xC, 0x4, 0xD, 0xE],
];

/// Selects which substitution table a lookup uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SboxKind {
    /// Table used by encryption and the key schedule.
    Forward,
    /// Table used by decryption.
    Inverse,
}

impl SboxKind {
    #[inline]
    fn table(self) -> &'static [[Nibble; 4]; 4] {
        match self {
            SboxKind::Forward => &SBOX,
            SboxKind::Inverse => &INV_SBOX,
        }
    }
}

/// Substitutes a single nibble.
#[inline]
pub fn substitute_nibble(kind: SboxKind, nibble: Nibble) -> Nibble {
    let n = nibble & 0xF;
    kind.table()[usize::from(n >> 2)][usize::from(n & 0x3)]
}

/// Substitutes both nibbles of a byte independently.
#[inline]
pub fn substitute_byte(kind: SboxKind, byte: u8) -> u8 {
    let (high, low) = split_byte(byte);
    join_byte(substitute_nibble(kind, high), substitute_nibble(kind, low))
}

/// Substitutes each of the four nibbles of a state, keeping positions.
#[inline]
pub fn substitute_state(kind: SboxKind, state: State) -> State {
    from_nibbles(to_nibbles(state).map(|n| substitute_nibble(kind, n)))
}

/// Forward S-box lookup.
#[inline]
pub fn sbox(nibble: Nibble) -> Nibble {
    substitute_nibble(SboxKind::Forward, nibble)
}

/// Inverse S-box lookup.
#[inline]
pub fn inv_sbox(nibble: Nibble) -> Nibble {
    substitute_nibble(SboxKind::Inverse, nibble)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_mutual_inverses() {
        for n in 0..16u8 {
            assert_eq!(inv_sbox(sbox(n)), n);
            assert_eq!(sbox(inv_sbox(n)), n);
        }
    }

    #[test]
    fn forward_table_is_a_permutation() {
        let mut seen = [false; 16];
        for n in 0..16u8 {
            seen[usize::from(sbox(n))] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn lookup_ignores_high_bits() {
        assert_eq!(sbox(0xF0), sbox(0x0));
        assert_eq!(sbox(0x0), 0x9);
        assert_eq!(sbox(0xF), 0x7);
    }

    #[test]
    fn byte_and_state_substitution_is_nibble_wise() {
        assert_eq!(substitute_byte(SboxKind::Forward, 0x0A), 0x90);
        assert_eq!(substitute_state(SboxKind::Forward, 0x1234), 0x4ABD);
        assert_eq!(substitute_state(SboxKind::Inverse, 0x4ABD), 0x1234);
    }
}
