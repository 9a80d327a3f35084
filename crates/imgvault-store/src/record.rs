//! The persisted metadata record for a stored image.

use imgvault_common::{ImageFormat, ImageId};
use serde::{Deserialize, Serialize};

/// Metadata persisted alongside each blob, one JSON document per image.
///
/// Both fields are immutable once written: the record is created at
/// upload time and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// The image's unique identifier.
    #[serde(rename = "image_id")]
    pub id: ImageId,
    /// The format the image was encoded in at upload time.
    pub original_extension: ImageFormat,
}
