//! Common error types used throughout imgvault.
//!
//! Covers the failure cases of the storage-and-conversion pipeline:
//! unsupported formats, missing images, failed writes, and codec faults.

/// Common error type for imgvault.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A format token outside the supported set was supplied.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The requested image does not exist. A normal negative lookup,
    /// not a fault.
    #[error("Image not found: {0}")]
    NotFound(String),

    /// The backing store failed to durably write a blob or its metadata.
    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    /// The stored blob could not be decoded, or the encoder rejected
    /// the pixel data. Fatal for the request, never retried.
    #[error("Codec error: {0}")]
    Codec(String),

    /// An I/O operation failed outside the save path.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new UnsupportedFormat error.
    pub fn unsupported_format<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new StorageWrite error.
    pub fn storage_write<S: Into<String>>(msg: S) -> Self {
        Self::StorageWrite(msg.into())
    }

    /// Create a new Codec error.
    pub fn codec<S: Into<String>>(msg: S) -> Self {
        Self::Codec(msg.into())
    }

    /// Create a new Io error from a message (for faults that are not
    /// a plain `std::io::Error`, e.g. corrupt metadata documents).
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Self::Io(std::io::Error::other(msg.into()))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
