//! Conversions between byte buffers and 32-bit words.
//!
//! Salsa20 reads its key and nonce, and emits its keystream, as
//! little-endian words. The helpers here operate at an explicit offset into
//! a caller buffer and report short buffers instead of panicking.

pub mod u32;
