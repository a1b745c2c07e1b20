//! Primitive word operations
//!
//! This module holds the leaf layer of the crate: stateless 32-bit
//! helpers that the Salsa20 core is written in terms of.
//!
//! - `ops`: wrapping addition and left rotation
//! - `conv`: little-endian byte ⇄ word conversion at a buffer offset
//!
//! Every function is pure and may be called from any number of threads.

pub mod conv;
pub mod ops;

pub use conv::u32::{u32_from_le_bytes, u32_to_le_bytes};
pub use ops::{add_one32, add32, rotl32};
