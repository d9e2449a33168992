//! Keyed pixel-pair swap transform.
//!
//! The one transform here with real design content: a deterministic,
//! key-seeded permutation of sample indices, walked in pairs, with each
//! pair's two samples exchanged. Swapping a pair twice is the identity,
//! so the transform is its own inverse.
//!
//! # Pinned Algorithm
//!
//! The encrypt/decrypt round trip depends on reproducing the exact same
//! permutation on both sides, so the generator and shuffle are part of
//! the output-file contract and must never change between releases:
//!
//! - Generator: ChaCha20 (`rand_chacha::ChaCha20Rng`), seeded with
//!   `seed_from_u64(key as u64)`. Negative keys map through their
//!   two's-complement bit pattern.
//! - Shuffle: `rand`'s `SliceRandom::shuffle` over the identity index
//!   sequence `[0, N)` (Fisher-Yates, walking from the back, one bounded
//!   draw per step).
//!
//! # Pairing Protocol
//!
//! The shuffled indices are consumed in consecutive non-overlapping pairs
//! `(indices[2j], indices[2j+1])`. Both reads of a pair hit the input
//! buffer, never the partially written output, so pairs cannot interfere.
//! When N is odd the final unpaired index copies its sample through
//! unchanged.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::decode::PixelGrid;

/// Swap samples in key-determined pairs.
///
/// Self-inverse: `swap_pairs(&swap_pairs(&grid, key), key) == grid` for
/// every grid and key, because the same key replays the same permutation
/// and each pair swap undoes itself.
pub fn swap_pairs(grid: &PixelGrid, key: i64) -> PixelGrid {
    let src = &grid.samples;

    let mut indices: Vec<usize> = (0..src.len()).collect();
    let mut rng = ChaCha20Rng::seed_from_u64(key as u64);
    indices.shuffle(&mut rng);

    let mut out = vec![0u8; src.len()];
    let mut pairs = indices.chunks_exact(2);
    for pair in &mut pairs {
        out[pair[0]] = src[pair[1]];
        out[pair[1]] = src[pair[0]];
    }
    if let [last] = pairs.remainder() {
        out[*last] = src[*last];
    }

    grid.with_samples(out)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
