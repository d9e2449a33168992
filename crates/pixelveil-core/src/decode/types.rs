//! Core types for image decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input path does not point to an existing file.
    #[error("The file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// The bytes are not a decodable raster image.
    #[error("Invalid or unsupported image format: {0}")]
    InvalidFormat(String),

    /// The image decoded without a channel axis (pure grayscale).
    #[error("Only color images are supported")]
    MissingChannelAxis,

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    Io(String),
}

/// A decoded image as a rectangular grid of 8-bit samples.
///
/// Samples are stored in row-major, channel-minor order: the sample for
/// channel `c` of the pixel at `(x, y)` lives at index
/// `(y * width + x) * channels + c`. Length is always
/// `width * height * channels`.
///
/// The grid's shape never changes once constructed; transforms read it
/// and produce a fresh grid of the same shape via [`PixelGrid::with_samples`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Samples per pixel (3 for RGB, 4 for RGBA, 2 for gray+alpha).
    pub channels: u8,
    /// Flattened sample data.
    pub samples: Vec<u8>,
}

impl PixelGrid {
    /// Create a new PixelGrid with the given shape and sample data.
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Self {
        debug_assert_eq!(
            samples.len(),
            width as usize * height as usize * channels as usize,
            "Sample buffer size mismatch"
        );
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    /// Build a grid with this grid's shape but a different sample buffer.
    ///
    /// This is how transforms return their output: the input grid stays
    /// untouched and the freshly allocated buffer takes its shape.
    pub fn with_samples(&self, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len(), "Sample buffer size mismatch");
        Self {
            width: self.width,
            height: self.height,
            channels: self.channels,
            samples,
        }
    }

    /// Total number of samples (`width * height * channels`).
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }

    /// The grid's shape as `(height, width, channels)`.
    pub fn shape(&self) -> (u32, u32, u8) {
        (self.height, self.width, self.channels)
    }

    /// Check if this is an empty/invalid grid.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.samples.is_empty()
    }
}
