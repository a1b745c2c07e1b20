//! Keyed Salsa20 keystream over arbitrary-length data.

use std::fmt;

use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use super::core::permute;
use super::state::CipherState;
use super::{BLOCK_SIZE, KEY_SIZE, KEY_SIZE_128};
use crate::error::CipherError;

/// Salsa20/20 stream cipher bound to one (key, nonce) pair.
///
/// Encryption and decryption are the same operation: data is XORed with
/// the keystream. Successive calls continue the keystream where the last
/// one stopped, so splitting data across calls does not change the output.
///
/// The instance is sequential by construction (every transform takes
/// `&mut self`). To process one keystream in parallel, open several
/// instances with [`Salsa20Stream::with_counter`] on disjoint block ranges.
///
/// Key material is wiped by [`dispose`](Self::dispose) or on drop,
/// whichever comes first.
pub struct Salsa20Stream {
    /// `None` once disposed.
    state: Option<CipherState>,

    /// Last generated keystream block, kept when only partly consumed.
    leftover: Zeroizing<[u8; BLOCK_SIZE]>,

    /// First unused byte of `leftover`; `BLOCK_SIZE` when there is none.
    leftover_pos: usize,
}

impl Salsa20Stream {
    /// Creates a cipher from a 32-byte key and a nonce of at least 8 bytes.
    ///
    /// Only the first 8 nonce bytes are used. The block counter starts at 0.
    ///
    /// # Errors
    ///
    /// - [`CipherError::InvalidKeyLength`] if `key` is not 32 bytes
    /// - [`CipherError::NonceTooShort`] if `nonce` is shorter than 8 bytes
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, CipherError> {
        Self::with_counter(key, nonce, 0)
    }

    /// Creates a cipher whose first keystream block is `block`.
    ///
    /// Same validation as [`new`](Self::new).
    pub fn with_counter(key: &[u8], nonce: &[u8], block: u64) -> Result<Self, CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: key.len(),
            });
        }

        let mut state = CipherState::new(key, nonce)?;
        state.set_counter(block);

        debug!(key_bits = 256, start_block = block, "salsa20 stream initialized");

        Ok(Self::from_state(state))
    }

    /// Creates a cipher from a 16-byte key.
    ///
    /// Uses the "expand 16-byte k" constants with the key placed in both
    /// key halves of the state. Prefer 32-byte keys; this exists for
    /// interoperability with data produced under 128-bit keys.
    ///
    /// # Errors
    ///
    /// - [`CipherError::InvalidKeyLength`] if `key` is not 16 bytes
    /// - [`CipherError::NonceTooShort`] if `nonce` is shorter than 8 bytes
    pub fn new_128(key: &[u8], nonce: &[u8]) -> Result<Self, CipherError> {
        if key.len() != KEY_SIZE_128 {
            return Err(CipherError::InvalidKeyLength {
                expected: KEY_SIZE_128,
                actual: key.len(),
            });
        }

        let state = CipherState::new(key, nonce)?;

        debug!(key_bits = 128, "salsa20 stream initialized");

        Ok(Self::from_state(state))
    }

    fn from_state(state: CipherState) -> Self {
        Self {
            state: Some(state),
            leftover: Zeroizing::new([0u8; BLOCK_SIZE]),
            leftover_pos: BLOCK_SIZE,
        }
    }

    /// Index of the next keystream block to be generated.
    pub fn block_counter(&self) -> Result<u64, CipherError> {
        self.state
            .as_ref()
            .map(CipherState::counter)
            .ok_or(CipherError::Disposed)
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.state.is_none()
    }

    /// XORs `input` with the keystream into the front of `output`.
    ///
    /// Returns the number of bytes written, always `input.len()`.
    ///
    /// # Errors
    ///
    /// - [`CipherError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`CipherError::OutOfBounds`] if `output` is shorter than `input`
    pub fn transform(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError> {
        self.ensure_ready()?;
        CipherError::check_region(0, input.len(), output.len())?;

        self.apply_keystream(input.len(), |offset, keystream| {
            let end = offset + keystream.len();
            output[offset..end]
                .iter_mut()
                .zip(&input[offset..end])
                .zip(keystream)
                .for_each(|((o, &i), &k)| *o = i ^ k);
        })
    }

    /// Transforms `count` bytes of `input` starting at `input_offset` into
    /// `output` starting at `output_offset`.
    ///
    /// # Errors
    ///
    /// - [`CipherError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`CipherError::OutOfBounds`] if either region exceeds its buffer
    pub fn transform_region(
        &mut self,
        input: &[u8],
        input_offset: usize,
        count: usize,
        output: &mut [u8],
        output_offset: usize,
    ) -> Result<usize, CipherError> {
        self.ensure_ready()?;
        CipherError::check_region(input_offset, count, input.len())?;
        CipherError::check_region(output_offset, count, output.len())?;

        self.transform(
            &input[input_offset..input_offset + count],
            &mut output[output_offset..output_offset + count],
        )
    }

    /// XORs the keystream into `buf` in place.
    pub fn transform_in_place(&mut self, buf: &mut [u8]) -> Result<usize, CipherError> {
        self.ensure_ready()?;

        self.apply_keystream(buf.len(), |offset, keystream| {
            buf[offset..offset + keystream.len()]
                .iter_mut()
                .zip(keystream)
                .for_each(|(b, &k)| *b ^= k);
        })
    }

    /// Transforms `input` into a freshly allocated buffer of the same length.
    pub fn transform_final(&mut self, input: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut output = vec![0u8; input.len()];
        self.transform(input, &mut output)?;

        Ok(output)
    }

    /// Wipes the state and retained keystream and retires the instance.
    ///
    /// Every later transform fails with [`CipherError::Disposed`]. Calling
    /// this more than once is harmless.
    pub fn dispose(&mut self) {
        if let Some(mut state) = self.state.take() {
            state.zeroize();
            debug!("salsa20 stream disposed");
        }

        self.leftover.zeroize();
        self.leftover_pos = BLOCK_SIZE;
    }

    fn ensure_ready(&self) -> Result<(), CipherError> {
        if self.state.is_none() {
            return Err(CipherError::Disposed);
        }

        Ok(())
    }

    /// Feeds `len` bytes of keystream to `xor` as `(data offset, keystream)`
    /// slices of at most one block each.
    ///
    /// Unused bytes of a previous block are handed out first. Each newly
    /// generated block advances the counter exactly once.
    fn apply_keystream<F>(&mut self, len: usize, mut xor: F) -> Result<usize, CipherError>
    where
        F: FnMut(usize, &[u8]),
    {
        let state = self.state.as_mut().ok_or(CipherError::Disposed)?;

        let mut done = 0;

        if self.leftover_pos < BLOCK_SIZE && len > 0 {
            let take = (BLOCK_SIZE - self.leftover_pos).min(len);
            xor(0, &self.leftover[self.leftover_pos..self.leftover_pos + take]);

            self.leftover_pos += take;
            done = take;
        }

        let mut blocks = 0u64;

        while done < len {
            let keystream = Zeroizing::new(permute(state.words()));
            state.advance();
            blocks += 1;

            let take = (len - done).min(BLOCK_SIZE);
            xor(done, &keystream[..take]);

            if take < BLOCK_SIZE {
                self.leftover.copy_from_slice(&keystream[..]);
                self.leftover_pos = take;
            }

            done += take;
        }

        trace!(bytes = len, blocks, "applied salsa20 keystream");

        Ok(len)
    }
}

impl fmt::Debug for Salsa20Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salsa20Stream")
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}
