//! S-AES block encryption/decryption and stage tracing.

use core::fmt;

use crate::block::State;
use crate::key::{expand_key, RoundKeys, SaesKey};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_nibbles, mix_columns, shift_rows,
    sub_nibbles,
};

/// Encrypts a single 16-bit block with pre-expanded round keys.
pub fn encrypt_block(block: State, round_keys: &RoundKeys) -> State {
    let mut state = add_round_key(block, round_keys.get(0));

    state = sub_nibbles(state);
    state = shift_rows(state);
    state = mix_columns(state);
    state = add_round_key(state, round_keys.get(1));

    state = sub_nibbles(state);
    state = shift_rows(state);
    add_round_key(state, round_keys.get(2))
}

/// Decrypts a single 16-bit block with pre-expanded round keys.
pub fn decrypt_block(block: State, round_keys: &RoundKeys) -> State {
    let mut state = add_round_key(block, round_keys.get(2));
    state = inv_shift_rows(state);
    state = inv_sub_nibbles(state);

    state = add_round_key(state, round_keys.get(1));
    state = inv_mix_columns(state);
    state = inv_shift_rows(state);
    state = inv_sub_nibbles(state);

    add_round_key(state, round_keys.get(0))
}

/// Encrypts `plaintext` under the 16-bit `key`.
pub fn encrypt(plaintext: u16, key: u16) -> u16 {
    encrypt_block(plaintext, &expand_key(&SaesKey(key)))
}

/// Decrypts `ciphertext` under the 16-bit `key`.
pub fn decrypt(ciphertext: u16, key: u16) -> u16 {
    decrypt_block(ciphertext, &expand_key(&SaesKey(key)))
}

/// A single named step of the encryption or decryption pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// XOR with the master key.
    AddKey0,
    /// Round 1 nibble substitution.
    SubNibbles1,
    /// Round 1 row shift.
    ShiftRows1,
    /// Round 1 column mixing.
    MixColumns1,
    /// XOR with `round_key1`.
    AddKey1,
    /// Round 2 nibble substitution.
    SubNibbles2,
    /// Round 2 row shift.
    ShiftRows2,
    /// XOR with `round_key2`.
    AddKey2,
    /// Inverse of [`Stage::ShiftRows2`].
    InvShiftRows2,
    /// Inverse of [`Stage::SubNibbles2`].
    InvSubNibbles2,
    /// Inverse of [`Stage::MixColumns1`].
    InvMixColumns1,
    /// Inverse of [`Stage::ShiftRows1`].
    InvShiftRows1,
    /// Inverse of [`Stage::SubNibbles1`].
    InvSubNibbles1,
}

const ENCRYPT_STAGES: [Stage; 8] = [
    Stage::AddKey0,
    Stage::SubNibbles1,
    Stage::ShiftRows1,
    Stage::MixColumns1,
    Stage::AddKey1,
    Stage::SubNibbles2,
    Stage::ShiftRows2,
    Stage::AddKey2,
];

const DECRYPT_STAGES: [Stage; 8] = [
    Stage::AddKey2,
    Stage::InvShiftRows2,
    Stage::InvSubNibbles2,
    Stage::AddKey1,
    Stage::InvMixColumns1,
    Stage::InvShiftRows1,
    Stage::InvSubNibbles1,
    Stage::AddKey0,
];

impl Stage {
    /// Applies this step to `state`.
    pub fn apply(self, state: State, round_keys: &RoundKeys) -> State {
        match self {
            Stage::AddKey0 => add_round_key(state, round_keys.get(0)),
            Stage::AddKey1 => add_round_key(state, round_keys.get(1)),
            Stage::AddKey2 => add_round_key(state, round_keys.get(2)),
            Stage::SubNibbles1 | Stage::SubNibbles2 => sub_nibbles(state),
            Stage::ShiftRows1 | Stage::ShiftRows2 => shift_rows(state),
            Stage::MixColumns1 => mix_columns(state),
            Stage::InvShiftRows1 | Stage::InvShiftRows2 => inv_shift_rows(state),
            Stage::InvSubNibbles1 | Stage::InvSubNibbles2 => inv_sub_nibbles(state),
            Stage::InvMixColumns1 => inv_mix_columns(state),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Stage::AddKey0 => "add key 0",
            Stage::SubNibbles1 => "round 1 sub nibbles",
            Stage::ShiftRows1 => "round 1 shift rows",
            Stage::MixColumns1 => "round 1 mix columns",
            Stage::AddKey1 => "add key 1",
            Stage::SubNibbles2 => "round 2 sub nibbles",
            Stage::ShiftRows2 => "round 2 shift rows",
            Stage::AddKey2 => "add key 2",
            Stage::InvShiftRows2 => "round 2 inv shift rows",
            Stage::InvSubNibbles2 => "round 2 inv sub nibbles",
            Stage::InvMixColumns1 => "round 1 inv mix columns",
            Stage::InvShiftRows1 => "round 1 inv shift rows",
            Stage::InvSubNibbles1 => "round 1 inv sub nibbles",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn trace(block: State, round_keys: &RoundKeys, stages: &[Stage]) -> Vec<(Stage, State)> {
    let mut state = block;
    stages
        .iter()
        .map(|&stage| {
            state = stage.apply(state, round_keys);
            (stage, state)
        })
        .collect()
}

/// Encrypts `block`, recording the state after every stage.
pub fn encrypt_trace(block: State, round_keys: &RoundKeys) -> Vec<(Stage, State)> {
    trace(block, round_keys, &ENCRYPT_STAGES)
}

/// Decrypts `block`, recording the state after every stage.
pub fn decrypt_trace(block: State, round_keys: &RoundKeys) -> Vec<(Stage, State)> {
    trace(block, round_keys, &DECRYPT_STAGES)
}
