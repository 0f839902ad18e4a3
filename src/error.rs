use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(&'static str),

    #[error("Carrier image not found: {0}")]
    MissingCarrier(PathBuf),

    #[error("Payload needs {required} samples but the carrier image only holds {available}")]
    CapacityExceeded { required: usize, available: usize },

    #[error("Decode mismatch: {0}")]
    DecodeMismatch(String),

    #[error("Bits per sample must be between 1 and 8, got {0}")]
    InvalidBitDepth(usize),

    #[error("Chunk {0:?} is not a valid bit group")]
    MalformedChunk(String),

    #[error("Sample buffer holds {actual} bytes but the declared shape needs {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    #[error("Key file does not contain a valid {expected}-byte hex key")]
    InvalidKey { expected: usize },

    #[error("Encryption failed")]
    Encrypt,

    #[error("Decryption failed: wrong key or corrupted payload")]
    Decrypt,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StegoError>;
