//! Pixelveil Core - keyed reversible pixel transforms
//!
//! This crate provides the core functionality for Pixelveil: decoding an
//! image into a grid of 8-bit samples, applying one of four reversible
//! integer-keyed transforms (add, subtract, xor, pixel-pair swap), and
//! encoding the result back to PNG.
//!
//! Not a cipher in any serious sense: the key space is tiny and every
//! transform is trivially invertible. It scrambles pixels, nothing more.

pub mod decode;
pub mod encode;
pub mod transform;

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use decode::{DecodeError, PixelGrid};
pub use encode::{encode_png, save_png, EncodeError};
pub use transform::apply_transform;

/// Errors constructing a [`CipherJob`] from raw user input.
///
/// All of these are detected before any pixel data is read.
#[derive(Debug, Error)]
pub enum JobError {
    /// The key string is not an integer.
    #[error("Invalid key '{0}': the key must be an integer")]
    InvalidKey(String),

    /// The operation string names no known transform.
    #[error("Unsupported operation '{0}'. Choose 'add', 'subtract', 'xor', or 'swap'")]
    UnsupportedOperation(String),

    /// The mode string is neither encrypt nor decrypt.
    #[error("Invalid mode '{0}'. Choose 'encrypt' or 'decrypt'")]
    InvalidMode(String),
}

/// The four reversible pixel transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformKind {
    /// Add the key to every sample, mod 256.
    Add,
    /// Subtract the key from every sample, mod 256.
    Subtract,
    /// XOR every sample with the key byte.
    Xor,
    /// Swap samples in key-determined pairs.
    Swap,
}

impl FromStr for TransformKind {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(TransformKind::Add),
            "subtract" => Ok(TransformKind::Subtract),
            "xor" => Ok(TransformKind::Xor),
            "swap" => Ok(TransformKind::Swap),
            _ => Err(JobError::UnsupportedOperation(s.trim().to_string())),
        }
    }
}

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Apply the forward formula.
    Encrypt,
    /// Apply the inverse formula.
    Decrypt,
}

impl Mode {
    /// Fixed name of the output file written for this direction.
    pub fn output_filename(self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypted_image.png",
            Mode::Decrypt => "decrypted_image.png",
        }
    }
}

impl FromStr for Mode {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            _ => Err(JobError::InvalidMode(s.trim().to_string())),
        }
    }
}

/// One full unit of work: which file, which key, which transform, which
/// direction.
///
/// This is the parameter-struct form of the tool's four interactive
/// inputs; the front-end collects strings and [`CipherJob::from_raw`]
/// turns them into a typed job or a descriptive error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherJob {
    /// Path of the input image.
    pub path: PathBuf,
    /// Integer key; offset for arithmetic transforms, seed for swap.
    pub key: i64,
    /// Which transform to run.
    pub kind: TransformKind,
    /// Forward or inverse direction.
    pub mode: Mode,
}

impl CipherJob {
    /// Build a job from the four raw input strings.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::InvalidKey`] if the key doesn't parse as an
    /// integer, [`JobError::UnsupportedOperation`] for an unknown
    /// operation name, and [`JobError::InvalidMode`] for an unknown mode.
    pub fn from_raw(path: &str, key: &str, operation: &str, mode: &str) -> Result<Self, JobError> {
        let key = key
            .trim()
            .parse::<i64>()
            .map_err(|_| JobError::InvalidKey(key.trim().to_string()))?;

        Ok(Self {
            path: PathBuf::from(path.trim()),
            key,
            kind: operation.parse()?,
            mode: mode.parse()?,
        })
    }
}
