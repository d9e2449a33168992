//! Elementwise arithmetic and XOR transforms.
//!
//! All three operate sample-by-sample, independent of position, with the
//! key reduced to a single byte. Reduction uses true mathematical modulo
//! (`rem_euclid`), so negative keys land in [0, 255] like everything else.

use crate::decode::PixelGrid;

/// Reduce a signed key to its 8-bit offset.
#[inline]
fn key_byte(key: i64) -> u8 {
    key.rem_euclid(256) as u8
}

/// Add the key to every sample, wrapping mod 256.
///
/// Inverse of [`subtract`] with the same key.
pub fn add(grid: &PixelGrid, key: i64) -> PixelGrid {
    let k = key_byte(key);
    let samples = grid.samples.iter().map(|s| s.wrapping_add(k)).collect();
    grid.with_samples(samples)
}

/// Subtract the key from every sample, wrapping mod 256.
///
/// Inverse of [`add`] with the same key.
pub fn subtract(grid: &PixelGrid, key: i64) -> PixelGrid {
    let k = key_byte(key);
    let samples = grid.samples.iter().map(|s| s.wrapping_sub(k)).collect();
    grid.with_samples(samples)
}

/// XOR every sample with the key byte.
///
/// XOR is an involution: applying it twice with the same key restores the
/// input, so encrypt and decrypt share this single formula.
pub fn xor(grid: &PixelGrid, key: i64) -> PixelGrid {
    let k = key_byte(key);
    let samples = grid.samples.iter().map(|s| s ^ k).collect();
    grid.with_samples(samples)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
