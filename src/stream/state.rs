//! The 16-word Salsa20 state and its block counter.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{KEY_SIZE, KEY_SIZE_128, NONCE_SIZE, STATE_WORDS};
use crate::error::CipherError;
use crate::primitives::{add_one32, u32_from_le_bytes};

/// "expand 32-byte k" as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// "expand 16-byte k" as little-endian words.
const TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

/// Word positions of the four constants.
const CONSTANT_WORDS: [usize; 4] = [0, 5, 10, 15];

/// Salsa20 input block.
///
/// Layout: constants at 0, 5, 10 and 15; key at 1..=4 and 11..=14; nonce
/// at 6 and 7; block counter at 8 (low) and 9 (high).
///
/// The words hold key material in the clear and are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct CipherState {
    words: [u32; STATE_WORDS],
}

impl CipherState {
    /// Builds the state from a key of 16 or 32 bytes and the first 8 bytes
    /// of `nonce`, with the block counter at zero.
    ///
    /// Callers validate the key length against their own contract first;
    /// this only rejects lengths the layout cannot express.
    pub(crate) fn new(key: &[u8], nonce: &[u8]) -> Result<Self, CipherError> {
        let constants = match key.len() {
            KEY_SIZE => SIGMA,
            KEY_SIZE_128 => TAU,
            actual => {
                return Err(CipherError::InvalidKeyLength {
                    expected: KEY_SIZE,
                    actual,
                });
            }
        };

        if nonce.len() < NONCE_SIZE {
            return Err(CipherError::NonceTooShort {
                minimum: NONCE_SIZE,
                actual: nonce.len(),
            });
        }

        let mut words = [0u32; STATE_WORDS];

        for (&index, constant) in CONSTANT_WORDS.iter().zip(constants) {
            words[index] = constant;
        }

        // A 16-byte key fills both halves with the same bytes.
        let tail = key.len() - 16;
        for i in 0..4 {
            words[1 + i] = u32_from_le_bytes(key, 4 * i)?;
            words[11 + i] = u32_from_le_bytes(key, tail + 4 * i)?;
        }

        words[6] = u32_from_le_bytes(nonce, 0)?;
        words[7] = u32_from_le_bytes(nonce, 4)?;

        Ok(Self { words })
    }

    pub(crate) fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Index of the next keystream block.
    pub(crate) fn counter(&self) -> u64 {
        ((self.words[9] as u64) << 32) | self.words[8] as u64
    }

    pub(crate) fn set_counter(&mut self, block: u64) {
        self.words[8] = block as u32;
        self.words[9] = (block >> 32) as u32;
    }

    /// Moves to the next block, carrying from word 8 into word 9.
    ///
    /// Wraps to zero after 2⁶⁴ blocks; staying below that is up to the
    /// caller.
    pub(crate) fn advance(&mut self) {
        self.words[8] = add_one32(self.words[8]);
        if self.words[8] == 0 {
            self.words[9] = add_one32(self.words[9]);
        }
    }
}
