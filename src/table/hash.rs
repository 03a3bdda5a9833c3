//! djb2 bucket hash
//!
//! h₀ = 5381, hᵢ₊₁ = hᵢ · 33 + byte (as (h << 5) + h + byte), u64 wrapping.
//! Bucket = h mod TABLE_SIZE. Must match bit-for-bit: colliding keys are
//! expected to share one tree.

use super::TABLE_SIZE;

/// djb2 seed.
const DJB2_SEED: u64 = 5381;

/// Raw 64-bit djb2 accumulator over the key's bytes.
#[inline]
pub fn djb2(key: &str) -> u64 {
    key.bytes().fold(DJB2_SEED, |acc, byte| {
        (acc << 5).wrapping_add(acc).wrapping_add(u64::from(byte))
    })
}

/// Bucket index in `[0, TABLE_SIZE)` for a destination.
#[inline]
pub fn bucket_index(key: &str) -> usize {
    (djb2(key) % TABLE_SIZE as u64) as usize
}
