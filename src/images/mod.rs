//! Image upload and retrieval orchestration.
//!
//! This module provides the service layer that validates format tokens,
//! coordinates the blob/metadata store from `imgvault_store`, and
//! performs on-demand format conversion through `imgvault_codec`.

mod service;

pub use service::{ImageService, RetrievedImage, UploadedImage};
