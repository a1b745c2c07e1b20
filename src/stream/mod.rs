//! Salsa20 stream cipher
//!
//! This module implements the Salsa20/20 stream cipher as defined by
//! D. J. Bernstein (<https://cr.yp.to/snuffle/spec.pdf>), with a 64-bit
//! nonce and a 64-bit block counter.
//!
//! It is split in three layers:
//!
//! - `state`: the 16-word input block (constants, key, nonce, counter) and
//!   counter arithmetic. The words are wiped on drop.
//! - `core`: the Salsa20 core function, turning a 16-word block into 64
//!   bytes of keystream.
//! - `salsa20`: [`Salsa20Stream`], which drives the core over caller data.
//!
//! This module **does not** authenticate anything. Reusing a (key, nonce)
//! pair for two messages reveals their XOR; nonce uniqueness is the
//! caller's responsibility.

mod core;
mod salsa20;
mod state;

pub use self::core::permute;
pub use self::salsa20::Salsa20Stream;

/// Size of one keystream block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Key size accepted by [`Salsa20Stream::new`].
pub const KEY_SIZE: usize = 32;

/// Key size accepted by [`Salsa20Stream::new_128`].
pub const KEY_SIZE_128: usize = 16;

/// Number of nonce bytes consumed; longer nonces are truncated.
pub const NONCE_SIZE: usize = 8;

/// Number of 32-bit words in the cipher state.
pub const STATE_WORDS: usize = 16;

/// Salsa20/20 runs 10 double rounds.
const DOUBLE_ROUNDS: usize = 10;
