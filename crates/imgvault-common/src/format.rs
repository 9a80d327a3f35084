//! The closed set of supported image formats.
//!
//! Format strings are validated and converted to [`ImageFormat`] at the
//! boundary; everything past the boundary works with the enum. This set
//! is the single source of truth consulted both at upload validation and
//! at conversion-target validation.

use serde::{Deserialize, Serialize};

/// A supported image container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// All supported formats.
    pub fn supported() -> &'static [ImageFormat] {
        &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif]
    }

    /// Parse a file extension into a format, case-insensitively.
    ///
    /// This is strict: only the canonical tokens `png`, `jpeg`, and
    /// `gif` are accepted. The informal `jpg` spelling is a retrieval
    /// alias handled at the service layer, not a member of the set.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Canonical lowercase token for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// MIME type used when serving this format over HTTP.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_canonical() {
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("gif"), Some(ImageFormat::Gif));
    }

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("Jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("GIF"), Some(ImageFormat::Gif));
    }

    #[test]
    fn test_from_extension_rejects_unsupported() {
        assert_eq!(ImageFormat::from_extension("bmp"), None);
        assert_eq!(ImageFormat::from_extension("tiff"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
        // "jpg" is an alias resolved at the service layer, not a member
        assert_eq!(ImageFormat::from_extension("jpg"), None);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for format in ImageFormat::supported() {
            assert_eq!(ImageFormat::from_extension(format.as_str()), Some(*format));
        }
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Gif.mime_type(), "image/gif");
    }

    #[test]
    fn test_serde_lowercase_tokens() {
        let json = serde_json::to_string(&ImageFormat::Png).unwrap();
        assert_eq!(json, "\"png\"");
        let back: ImageFormat = serde_json::from_str("\"jpeg\"").unwrap();
        assert_eq!(back, ImageFormat::Jpeg);
    }
}
