//! Word arithmetic used by the Salsa20 core.
//!
//! All operations act on 32-bit words with the exact semantics required by
//! the cipher: additions wrap modulo 2³² and rotations never lose bits.
//! They are pure and branchless.

/// Adds two words modulo 2³².
///
/// Overflow is part of the cipher definition and never faults.
#[inline(always)]
pub fn add32(v: u32, w: u32) -> u32 {
    v.wrapping_add(w)
}

/// Adds one to a word modulo 2³².
#[inline(always)]
pub fn add_one32(v: u32) -> u32 {
    add32(v, 1)
}

/// Rotates a word left by `c` bits.
///
/// The cipher only rotates by 7, 9, 13 and 18; callers must keep
/// `0 < c < 32`.
#[inline(always)]
pub fn rotl32(v: u32, c: u32) -> u32 {
    debug_assert!(c > 0 && c < 32);

    (v << c) | (v >> (32 - c))
}
