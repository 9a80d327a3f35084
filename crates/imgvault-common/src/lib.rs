//! Shared types for imgvault.
//!
//! Provides the typed image identifier, the closed set of supported
//! image formats, and the common error type used across the workspace.

pub mod error;
pub mod format;
pub mod ids;

pub use error::{Error, Result};
pub use format::ImageFormat;
pub use ids::ImageId;
