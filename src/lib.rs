//! Salsa20 stream cipher
//!
//! This crate provides a small, auditable implementation of the Salsa20/20
//! stream cipher with a 256-bit key, a 64-bit nonce and a 64-bit block
//! counter, bit-compatible with the reference algorithm.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! cipher is written directly in terms of 32-bit word operations, keeps all
//! key material in wiped-on-drop buffers, and reports every misuse as an
//! explicit error.
//!
//! # Module overview
//!
//! - `primitives`
//!   Stateless 32-bit helpers: wrapping addition, left rotation and
//!   little-endian byte ⇄ word conversion.
//!
//! - `stream`
//!   The cipher itself: state layout, the Salsa20 core function, and
//!   [`Salsa20Stream`], which XORs the keystream into caller buffers and
//!   keeps the block counter.
//!
//! - `engine`
//!   A narrow [`CipherEngine`] interface for hosts that pick ciphers by
//!   identifier, plus `std::io` reader/writer adapters.
//!
//! - `error`
//!   [`CipherError`], shared by all of the above.
//!
//! # Example
//!
//! ```
//! use salsa20_stream::Salsa20Stream;
//!
//! let key = [0x42u8; 32];
//! let nonce = *b"a nonce.";
//!
//! let mut enc = Salsa20Stream::new(&key, &nonce).unwrap();
//! let ciphertext = enc.transform_final(b"attack at dawn").unwrap();
//!
//! let mut dec = Salsa20Stream::new(&key, &nonce).unwrap();
//! assert_eq!(dec.transform_final(&ciphertext).unwrap(), b"attack at dawn");
//! ```
//!
//! # Security scope
//!
//! Salsa20 provides confidentiality only. It does not provide:
//! - authentication or integrity protection
//! - key derivation
//! - nonce generation (a nonce must never repeat under one key)
//! - hardening against timing side channels beyond what the plain
//!   add-rotate-xor structure gives
//!
//! Those concerns belong to the layers that use this crate.

pub mod engine;
pub mod error;
pub mod primitives;
pub mod stream;

pub use engine::{CipherEngine, CipherId, Salsa20Engine};
pub use error::{CipherError, ErrorKind};
pub use stream::Salsa20Stream;
