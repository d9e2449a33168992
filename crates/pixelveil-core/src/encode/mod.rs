//! Image encoding for Pixelveil.
//!
//! This module provides functionality for:
//! - Encoding a transformed [`crate::PixelGrid`] to PNG bytes
//! - Writing the encoded image to disk in one shot
//!
//! Output is always PNG: it is lossless, so the decrypt direction sees
//! exactly the samples the encrypt direction wrote.

mod png;

pub use png::{encode_png, save_png, EncodeError};
