//! Image decoding for Pixelveil.
//!
//! This module turns an image file (PNG, JPEG, or BMP) into a [`PixelGrid`]
//! of 8-bit samples that the transform engine operates on.
//!
//! # Shape Policy
//!
//! Transforms need an explicit channel axis, so pure grayscale images are
//! rejected at decode time with [`DecodeError::MissingChannelAxis`].
//! Gray+alpha, RGB, and RGBA images pass through with their native channel
//! counts (2, 3, and 4); deeper sample formats are narrowed to 8 bits.

mod raster;
mod types;

pub use raster::{decode_image, load_image};
pub use types::{DecodeError, PixelGrid};
