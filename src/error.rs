//! Error types shared by every layer of the crate.
//!
//! All failures are synchronous and caller-caused: wrong key or nonce
//! lengths, out-of-range buffer regions, or use of a disposed cipher. The
//! cipher never performs I/O itself, so nothing here is retryable.

use thiserror::Error;

/// Errors returned by the primitives, the stream cipher and the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key does not have the length required by the chosen constructor.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The nonce is shorter than the 8 bytes consumed by the state.
    #[error("nonce too short: expected at least {minimum} bytes, got {actual}")]
    NonceTooShort { minimum: usize, actual: usize },

    /// A byte region does not fit inside its buffer.
    #[error("region out of bounds: offset {offset} + length {len} exceeds buffer of {capacity} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    /// The cipher state has been disposed and can no longer be used.
    #[error("cipher state has been disposed")]
    Disposed,
}

/// Coarse classification of a [`CipherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument the operation cannot accept.
    InvalidArgument,
    /// The operation is not permitted in the object's current state.
    InvalidState,
}

impl CipherError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::InvalidKeyLength { .. }
            | CipherError::NonceTooShort { .. }
            | CipherError::OutOfBounds { .. } => ErrorKind::InvalidArgument,
            CipherError::Disposed => ErrorKind::InvalidState,
        }
    }

    /// Checks that `len` bytes starting at `offset` fit in `capacity` bytes.
    pub(crate) fn check_region(offset: usize, len: usize, capacity: usize) -> Result<(), Self> {
        match offset.checked_add(len) {
            Some(end) if end <= capacity => Ok(()),
            _ => Err(CipherError::OutOfBounds {
                offset,
                len,
                capacity,
            }),
        }
    }
}
