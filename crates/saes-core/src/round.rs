//! S-AES round transformations.
//!
//! Each transformation maps a [`State`] to a new state and has an exact
//! inverse: AddRoundKey and ShiftRows are involutions, the substitution and
//! column mixing steps come in forward/inverse pairs.

use crate::block::{from_columns, from_nibbles, to_columns, to_nibbles, State};
use crate::gf::{mix_column, MixMatrix, INV_MIX_MATRIX, MIX_MATRIX};
use crate::sbox::{substitute_state, SboxKind};

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: State, round_key: State) -> State {
    state ^ round_key
}

/// Applies the forward S-box to every nibble.
#[inline]
pub fn sub_nibbles(state: State) -> State {
    substitute_state(SboxKind::Forward, state)
}

/// Applies the inverse S-box to every nibble.
#[inline]
pub fn inv_sub_nibbles(state: State) -> State {
    substitute_state(SboxKind::Inverse, state)
}

/// Swaps the two nibbles of row 1.
#[inline]
pub fn shift_rows(state: State) -> State {
    let [n0, n1, n2, n3] = to_nibbles(state);
    from_nibbles([n0, n3, n2, n1])
}

/// Inverse of [`shift_rows`], which is its own inverse.
#[inline]
pub fn inv_shift_rows(state: State) -> State {
    shift_rows(state)
}

fn mix_both_columns(matrix: &MixMatrix, state: State) -> State {
    let (c0, c1) = to_columns(state);
    from_columns(mix_column(matrix, c0), mix_column(matrix, c1))
}

/// MixColumns over both columns.
#[inline]
pub fn mix_columns(state: State) -> State {
    mix_both_columns(&MIX_MATRIX, state)
}

/// Inverse MixColumns over both columns.
#[inline]
pub fn inv_mix_columns(state: State) -> State {
    mix_both_columns(&INV_MIX_MATRIX, state)
}
