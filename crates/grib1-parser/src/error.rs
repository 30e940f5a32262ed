//! Error types for GRIB1 decoding.

use thiserror::Error;

/// Result type alias using Grib1Error.
pub type Grib1Result<T> = Result<T, Grib1Error>;

/// Errors that can occur while decoding a GRIB1 message.
#[derive(Debug, Error)]
pub enum Grib1Error {
    #[error("Buffer does not start with 'GRIB' magic bytes")]
    InvalidMagic,

    #[error("Not enough data for {0} section")]
    TruncatedData(&'static str),

    #[error("Unsupported GRIB edition {0}, only edition 1 is supported")]
    UnsupportedEdition(u8),

    #[error("Grid representation type {0} cannot be used by this decoder")]
    UnsupportedGridType(u8),

    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    #[error("Invalid reference timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Failed to unpack data values: {0}")]
    UnpackingError(String),

    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
}
