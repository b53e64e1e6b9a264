//! Block-by-block S-AES over byte buffers.

use saes_core::{decrypt_block, encrypt_block, expand_key, RoundKeys, SaesKey, State};

use crate::error::{Result, SaesError};
use crate::BLOCK_BYTES;

/// S-AES cipher bound to one expanded key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaesCipher {
    round_keys: RoundKeys,
}

impl SaesCipher {
    /// Expands `key` once for repeated block operations.
    pub fn new(key: SaesKey) -> Self {
        Self {
            round_keys: expand_key(&key),
        }
    }

    /// Returns the expanded whitening keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one 16-bit block.
    #[inline]
    pub fn encrypt_block(&self, block: State) -> State {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one 16-bit block.
    #[inline]
    pub fn decrypt_block(&self, block: State) -> State {
        decrypt_block(block, &self.round_keys)
    }

    /// Encrypts every 2-byte block of `data` in place.
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        self.apply(data, |block| self.encrypt_block(block))
    }

    /// Decrypts every 2-byte block of `data` in place.
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        self.apply(data, |block| self.decrypt_block(block))
    }

    /// Encrypts `data` into a new buffer.
    pub fn encrypt_vec(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = data.to_vec();
        self.encrypt_in_place(&mut out)?;
        Ok(out)
    }

    /// Decrypts `data` into a new buffer.
    pub fn decrypt_vec(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = data.to_vec();
        self.decrypt_in_place(&mut out)?;
        Ok(out)
    }

    fn apply(&self, data: &mut [u8], op: impl Fn(State) -> State) -> Result<()> {
        if data.len() % BLOCK_BYTES != 0 {
            return Err(SaesError::InvalidInputLength { len: data.len() });
        }
        for chunk in data.chunks_exact_mut(BLOCK_BYTES) {
            let block = State::from_be_bytes([chunk[0], chunk[1]]);
            chunk.copy_from_slice(&op(block).to_be_bytes());
        }
        Ok(())
    }
}

impl From<SaesKey> for SaesCipher {
    fn from(key: SaesKey) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn buffer_matches_known_vector() {
        let cipher = SaesCipher::new(SaesKey(0xA73B));
        let ct = cipher.encrypt_vec(b"SAES").expect("even length");
        assert_eq!(ct, [0xf8u8, 0xda, 0x65, 0x8a]);
        assert_eq!(cipher.decrypt_vec(&ct).expect("even length"), b"SAES");
    }

    #[test]
    fn blocks_are_big_endian() {
        let cipher = SaesCipher::new(SaesKey(0xABCD));
        let mut data = [0x12, 0x34];
        cipher.encrypt_in_place(&mut data).expect("even length");
        assert_eq!(data, [0xAB, 0x86]);
        assert_eq!(cipher.encrypt_block(0x1234), 0xAB86);
    }

    #[test]
    fn odd_length_is_rejected_untouched() {
        let cipher = SaesCipher::new(SaesKey(0x4AF5));
        let mut data = [1u8, 2, 3];
        let err = cipher.encrypt_in_place(&mut data).unwrap_err();
        assert_eq!(err, SaesError::InvalidInputLength { len: 3 });
        assert_eq!(data, [1, 2, 3]);
        assert_eq!(
            err.to_string(),
            "input length 3 is not a multiple of the 2 byte block size"
        );
        assert!(cipher.decrypt_vec(&[0u8]).is_err());
    }

    #[test]
    fn empty_buffer_is_valid() {
        let cipher = SaesCipher::new(SaesKey(0));
        assert_eq!(cipher.encrypt_vec(&[]).expect("empty"), Vec::<u8>::new());
    }

    #[test]
    fn buffer_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        for _ in 0..64 {
            let cipher = SaesCipher::new(SaesKey(rng.next_u32() as u16));
            let mut data = vec![0u8; 256];
            rng.fill_bytes(&mut data);
            let ct = cipher.encrypt_vec(&data).expect("even length");
            assert_eq!(cipher.decrypt_vec(&ct).expect("even length"), data);
        }
    }

    #[test]
    fn equal_blocks_encrypt_equally() {
        let cipher = SaesCipher::from(SaesKey(0xB1D3));
        let ct = cipher.encrypt_vec(&[0x55, 0xAA, 0x55, 0xAA]).expect("even length");
        assert_eq!(ct[..2], ct[2..]);
    }

    #[test]
    fn exposes_round_keys() {
        let cipher = SaesCipher::new(SaesKey(0xABCD));
        assert_eq!(cipher.round_keys().0, [0xABCD, 0xC70A, 0xFEF4]);
    }
}
