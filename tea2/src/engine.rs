//! TEA2 block transform
//!
//! A TEA-style Feistel network widened to 64-bit halves. Each cycle updates
//! both halves once, so 64 cycles give 128 Feistel rounds. All arithmetic
//! wraps modulo 2^64 and the loop is branch-free, so the running time does not
//! depend on the key or the data.

use crate::block::{Block, Key};

/// Round constant, `floor(2^64 / phi)`.
pub const DELTA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Number of cycles (pairs of Feistel rounds) per block.
pub const CYCLES: u64 = 64;

/// Accumulator value after the last encryption cycle; decryption starts here.
pub const DECRYPT_SUM: u64 = DELTA.wrapping_mul(CYCLES);

/// Round function shared by both halves.
///
/// `ka` and `kb` are the key words paired with the half being read
/// (`k0`/`k1` when updating `v0`, `k2`/`k3` when updating `v1`).
#[inline(always)]
fn mix(half: u64, sum: u64, ka: u64, kb: u64) -> u64 {
    (half << 14).wrapping_add(ka) ^ half.wrapping_add(sum) ^ (half >> 15).wrapping_add(kb)
}

/// Encrypts one block.
pub fn encrypt(block: Block, key: &Key) -> Block {
    let (mut v0, mut v1) = block.words();
    let [k0, k1, k2, k3] = key.words();
    let mut sum: u64 = 0;

    for _ in 0..CYCLES {
        sum = sum.wrapping_add(DELTA);
        v0 = v0.wrapping_add(mix(v1, sum, k0, k1));
        // reads the v0 just written
        v1 = v1.wrapping_add(mix(v0, sum, k2, k3));
    }

    Block::new(v0, v1)
}

/// Decrypts one block. Undoes the sub-steps of [`encrypt`] in reverse order.
pub fn decrypt(block: Block, key: &Key) -> Block {
    let (mut v0, mut v1) = block.words();
    let [k0, k1, k2, k3] = key.words();
    let mut sum = DECRYPT_SUM;

    for _ in 0..CYCLES {
        v1 = v1.wrapping_sub(mix(v0, sum, k2, k3));
        v0 = v0.wrapping_sub(mix(v1, sum, k0, k1));
        sum = sum.wrapping_sub(DELTA);
    }

    Block::new(v0, v1)
}
