//! PNG encoding for transformed grids.
//!
//! This module writes a [`PixelGrid`] out as a PNG using the `image`
//! crate's PNG encoder. PNG is lossless, so an encoded grid decodes back
//! to the exact same samples, which is what keeps the decrypt direction
//! byte-faithful.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::decode::PixelGrid;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Sample buffer length doesn't match the grid's shape
    #[error("Invalid pixel data: expected {expected} bytes (width * height * channels), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Channel count has no PNG color type
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u8),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// I/O error while writing the output file
    #[error("I/O error: {0}")]
    Io(String),
}

/// Encode a pixel grid to PNG bytes.
///
/// # Arguments
///
/// * `grid` - The grid to encode; 2, 3, or 4 channels are supported
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if the grid's shape is
/// invalid or encoding fails.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if grid.width == 0 || grid.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: grid.width,
            height: grid.height,
        });
    }

    // Validate sample buffer length
    let expected = grid.sample_count();
    if grid.samples.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: grid.samples.len(),
        });
    }

    let color = match grid.channels {
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        4 => ExtendedColorType::Rgba8,
        other => return Err(EncodeError::UnsupportedChannels(other)),
    };

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&grid.samples, grid.width, grid.height, color)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a pixel grid and write it to `path`.
///
/// The grid is encoded fully in memory first, so a failed encode never
/// leaves a partial file behind.
pub fn save_png(grid: &PixelGrid, path: &Path) -> Result<(), EncodeError> {
    let bytes = encode_png(grid)?;
    fs::write(path, bytes).map_err(|e| EncodeError::Io(e.to_string()))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_image;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=24, 1u32..=24)
    }

    /// Strategy for generating a supported channel count.
    fn channels_strategy() -> impl Strategy<Value = u8> {
        prop_oneof![Just(2u8), Just(3u8), Just(4u8)]
    }

    proptest! {
        /// Property: Any valid grid encodes to bytes with the PNG signature.
        #[test]
        fn prop_valid_grid_encodes(
            (width, height) in dimensions_strategy(),
            channels in channels_strategy(),
        ) {
            let len = width as usize * height as usize * channels as usize;
            let samples: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
            let grid = PixelGrid::new(width, height, channels, samples);

            let bytes = encode_png(&grid);
            prop_assert!(bytes.is_ok());
            prop_assert_eq!(&bytes.unwrap()[0..4], &[0x89u8, 0x50, 0x4E, 0x47]);
        }

        /// Property: encode followed by decode returns the identical grid.
        #[test]
        fn prop_encode_decode_round_trip(
            (width, height) in dimensions_strategy(),
            channels in channels_strategy(),
            seed in any::<u8>(),
        ) {
            let len = width as usize * height as usize * channels as usize;
            let samples: Vec<u8> = (0..len)
                .map(|i| ((i * 31 + seed as usize) % 256) as u8)
                .collect();
            let grid = PixelGrid::new(width, height, channels, samples);

            let bytes = encode_png(&grid).unwrap();
            let decoded = decode_image(&bytes).unwrap();
            prop_assert_eq!(decoded, grid);
        }
    }
}
