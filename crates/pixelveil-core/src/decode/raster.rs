//! Raster image decoding with channel-axis normalization.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageReader};

use super::{DecodeError, PixelGrid};

/// Load and decode an image file into a [`PixelGrid`].
///
/// The path is checked eagerly: a missing file surfaces as
/// [`DecodeError::FileNotFound`] before any bytes are read.
///
/// # Errors
///
/// Returns `DecodeError::FileNotFound` if the path does not exist,
/// `DecodeError::Io` if the file cannot be read, and any error
/// [`decode_image`] produces for the file's contents.
pub fn load_image(path: &Path) -> Result<PixelGrid, DecodeError> {
    if !path.exists() {
        return Err(DecodeError::FileNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
    decode_image(&bytes)
}

/// Decode image bytes (PNG, JPEG, or BMP) into a [`PixelGrid`].
///
/// The container format is guessed from the byte signature. Pixel data is
/// normalized to 8-bit samples; 16-bit and float inputs are narrowed.
///
/// # Channel-Axis Policy
///
/// Pure grayscale images carry no channel axis and are rejected with
/// [`DecodeError::MissingChannelAxis`] before any transform can run.
/// Everything else keeps its native channel count:
///
/// - gray+alpha -> 2 channels
/// - RGB -> 3 channels
/// - RGBA -> 4 channels
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::InvalidFormat(e.to_string()))?;

    grid_from_dynamic(img)
}

/// Flatten a decoded image into a grid, applying the channel-axis policy.
fn grid_from_dynamic(img: DynamicImage) -> Result<PixelGrid, DecodeError> {
    let (width, height) = (img.width(), img.height());
    match img.color() {
        ColorType::L8 | ColorType::L16 => Err(DecodeError::MissingChannelAxis),
        ColorType::La8 | ColorType::La16 => Ok(PixelGrid::new(
            width,
            height,
            2,
            img.into_luma_alpha8().into_raw(),
        )),
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => Ok(PixelGrid::new(
            width,
            height,
            4,
            img.into_rgba8().into_raw(),
        )),
        _ => Ok(PixelGrid::new(width, height, 3, img.into_rgb8().into_raw())),
    }
}
