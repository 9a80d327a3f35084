//! Image service coordinating the store and the codec.
//!
//! Provides the two high-level operations of the pipeline: upload
//! (validate extension, persist blob + metadata, hand back the fresh ID)
//! and retrieve (load blob, optionally re-encode to a requested format).

use imgvault_codec as codec;
use imgvault_common::{Error, ImageFormat, ImageId, Result};
use imgvault_store::ImageStore;

/// Result of a successful upload.
#[derive(Debug, Clone, Copy)]
pub struct UploadedImage {
    pub id: ImageId,
    pub extension: ImageFormat,
}

/// Result of a successful retrieval: freshly encoded bytes and the
/// format they are encoded in.
#[derive(Debug, Clone)]
pub struct RetrievedImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

/// High-level image service enforcing format-validity rules and
/// performing format translation.
///
/// Each call is an independent request/response unit: records are
/// immutable after creation and every save targets a fresh ID, so calls
/// never interfere with each other.
pub struct ImageService {
    store: ImageStore,
}

impl ImageService {
    /// Create a new `ImageService` over the given store.
    pub fn new(store: ImageStore) -> Self {
        Self { store }
    }

    /// Validate the filename's extension and persist the image.
    ///
    /// The extension is the substring after the last `.` in `filename`,
    /// lowercased. Uploads outside the supported set fail with
    /// [`Error::UnsupportedFormat`]; store failures propagate unchanged.
    pub fn upload(&self, data: &[u8], filename: &str) -> Result<UploadedImage> {
        let ext = filename.rsplit('.').next().unwrap_or(filename);
        let format = ImageFormat::from_extension(ext)
            .ok_or_else(|| Error::unsupported_format(ext.to_lowercase()))?;

        let saved = self.store.save(data, format)?;

        Ok(UploadedImage {
            id: saved.id,
            extension: format,
        })
    }

    /// Load an image and encode it in the requested format.
    ///
    /// When `desired_format` is absent or equals the original format the
    /// stored bytes are still decoded and freshly re-encoded in the
    /// original format (a normalization pass, not a raw passthrough).
    /// The informal `jpg` token is accepted as an alias for `jpeg`.
    pub fn retrieve(&self, id: &str, desired_format: Option<&str>) -> Result<RetrievedImage> {
        let image_id = ImageId::parse(id).ok_or_else(|| Error::not_found(id))?;
        let (data, original) = self
            .store
            .load(image_id)?
            .ok_or_else(|| Error::not_found(id))?;

        let desired = desired_format.map(normalize_format_token);
        let target = match desired.as_deref() {
            None => original,
            Some(token) if token == original.as_str() => original,
            Some(token) => {
                ImageFormat::from_extension(token).ok_or_else(|| Error::unsupported_format(token))?
            }
        };

        let decoded = codec::decode(&data)?;
        let bytes = codec::encode(&decoded, target)?;

        Ok(RetrievedImage {
            bytes,
            format: target,
        })
    }
}

/// Lowercase a requested format token and resolve the `jpg` alias to the
/// canonical codec name `jpeg`.
fn normalize_format_token(token: &str) -> String {
    let token = token.to_lowercase();
    if token == "jpg" {
        "jpeg".to_string()
    } else {
        token
    }
}
