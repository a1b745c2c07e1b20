//! Salsa20 core function
//!
//! Maps a 16-word input block to a 64-byte keystream block: twenty rounds
//! of add-rotate-xor mixing, a feed-forward of the input words, and
//! little-endian serialization.

use zeroize::Zeroize;

use super::{BLOCK_SIZE, DOUBLE_ROUNDS, STATE_WORDS};
use crate::primitives::{add32, rotl32};

#[cfg(not(feature = "speed"))]
/// Quarter-round index groups, column pass first, then row pass.
const DOUBLE_ROUND: [[usize; 4]; 8] = [
    // Columns
    [0, 4, 8, 12],
    [5, 9, 13, 1],
    [10, 14, 2, 6],
    [15, 3, 7, 11],
    // Rows
    [0, 1, 2, 3],
    [5, 6, 7, 4],
    [10, 11, 8, 9],
    [15, 12, 13, 14],
];

#[cfg(not(feature = "speed"))]
/// Performs one Salsa20 quarter round over words `a`, `b`, `c`, `d`.
///
/// Each step xors a rotated sum into the next word; the rotation amounts
/// are 7, 9, 13 and 18 in that order.
#[inline(always)]
pub(crate) fn quarter_round(x: &mut [u32; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= rotl32(add32(x[a], x[d]), 7);
    x[c] ^= rotl32(add32(x[b], x[a]), 9);
    x[d] ^= rotl32(add32(x[c], x[b]), 13);
    x[a] ^= rotl32(add32(x[d], x[c]), 18);
}

#[cfg(not(feature = "speed"))]
/// Applies the 10 double rounds in place.
fn rounds(x: &mut [u32; STATE_WORDS]) {
    for _ in 0..DOUBLE_ROUNDS {
        for &[a, b, c, d] in DOUBLE_ROUND.iter() {
            quarter_round(x, a, b, c, d);
        }
    }
}

#[cfg(feature = "speed")]
/// Applies the 10 double rounds in place (unrolled, register-local fast path).
fn rounds(x: &mut [u32; STATE_WORDS]) {
    let [
        mut x0, mut x1, mut x2, mut x3, mut x4, mut x5, mut x6, mut x7,
        mut x8, mut x9, mut x10, mut x11, mut x12, mut x13, mut x14, mut x15,
    ] = *x;

    for _ in 0..DOUBLE_ROUNDS {
        x4 ^= rotl32(add32(x0, x12), 7);
        x8 ^= rotl32(add32(x4, x0), 9);
        x12 ^= rotl32(add32(x8, x4), 13);
        x0 ^= rotl32(add32(x12, x8), 18);
        x9 ^= rotl32(add32(x5, x1), 7);
        x13 ^= rotl32(add32(x9, x5), 9);
        x1 ^= rotl32(add32(x13, x9), 13);
        x5 ^= rotl32(add32(x1, x13), 18);
        x14 ^= rotl32(add32(x10, x6), 7);
        x2 ^= rotl32(add32(x14, x10), 9);
        x6 ^= rotl32(add32(x2, x14), 13);
        x10 ^= rotl32(add32(x6, x2), 18);
        x3 ^= rotl32(add32(x15, x11), 7);
        x7 ^= rotl32(add32(x3, x15), 9);
        x11 ^= rotl32(add32(x7, x3), 13);
        x15 ^= rotl32(add32(x11, x7), 18);

        x1 ^= rotl32(add32(x0, x3), 7);
        x2 ^= rotl32(add32(x1, x0), 9);
        x3 ^= rotl32(add32(x2, x1), 13);
        x0 ^= rotl32(add32(x3, x2), 18);
        x6 ^= rotl32(add32(x5, x4), 7);
        x7 ^= rotl32(add32(x6, x5), 9);
        x4 ^= rotl32(add32(x7, x6), 13);
        x5 ^= rotl32(add32(x4, x7), 18);
        x11 ^= rotl32(add32(x10, x9), 7);
        x8 ^= rotl32(add32(x11, x10), 9);
        x9 ^= rotl32(add32(x8, x11), 13);
        x10 ^= rotl32(add32(x9, x8), 18);
        x12 ^= rotl32(add32(x15, x14), 7);
        x13 ^= rotl32(add32(x12, x15), 9);
        x14 ^= rotl32(add32(x13, x12), 13);
        x15 ^= rotl32(add32(x14, x13), 18);
    }

    *x = [
        x0, x1, x2, x3, x4, x5, x6, x7, x8, x9, x10, x11, x12, x13, x14, x15,
    ];
}

/// Computes the Salsa20 core function of `input`.
///
/// The input words are left untouched: the rounds run on a copy, each
/// mixed word is added back to its input word, and the sums are written out
/// as little-endian bytes.
///
/// This is a pure function of the 16 words. In a keystream context the
/// words include the block counter, so the output for block `n` depends
/// only on the key, the nonce and `n`.
pub fn permute(input: &[u32; STATE_WORDS]) -> [u8; BLOCK_SIZE] {
    let mut x = *input;

    rounds(&mut x);

    let mut out = [0u8; BLOCK_SIZE];
    out.chunks_exact_mut(4)
        .zip(x.iter().zip(input))
        .for_each(|(chunk, (&mixed, &original))| {
            chunk.copy_from_slice(&add32(mixed, original).to_le_bytes());
        });

    // The working copy is derived from key material.
    x.zeroize();

    out
}
