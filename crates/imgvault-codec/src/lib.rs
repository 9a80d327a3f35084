//! Decoding and encoding of image blobs.
//!
//! Thin seam over the `image` crate: stored bytes decode into a
//! [`DecodedImage`] carrying an explicit [`ColorMode`], and encoding
//! applies the alpha-flatten rule for targets without alpha support
//! (JPEG). Codec failures surface as [`Error::Codec`] and are never
//! retried.

use std::io::Cursor;

use image::DynamicImage;
use imgvault_common::{Error, ImageFormat, Result};

/// Color mode of a decoded image.
///
/// RGB and RGBA are the modes the conversion rules branch on; grayscale
/// modes are carried through so their alpha variants flatten too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    /// Whether this mode carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::LumaAlpha | Self::Rgba)
    }

    fn from_color_type(color: image::ColorType) -> Self {
        use image::ColorType;
        match color {
            ColorType::L8 | ColorType::L16 => Self::Luma,
            ColorType::La8 | ColorType::La16 => Self::LumaAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => Self::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => Self::Rgba,
            other if other.has_alpha() => Self::Rgba,
            _ => Self::Rgb,
        }
    }
}

/// An in-memory pixel representation with its color mode.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: DynamicImage,
    mode: ColorMode,
}

impl DecodedImage {
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The underlying pixel data.
    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    /// Drop the alpha channel, producing an opaque RGB image.
    pub fn flatten_alpha(&self) -> DecodedImage {
        DecodedImage {
            pixels: DynamicImage::ImageRgb8(self.pixels.to_rgb8()),
            mode: ColorMode::Rgb,
        }
    }
}

/// Decode raw encoded bytes into pixel data.
///
/// The container format is sniffed from the bytes themselves. Malformed
/// or truncated input yields [`Error::Codec`].
pub fn decode(data: &[u8]) -> Result<DecodedImage> {
    let pixels = image::load_from_memory(data)
        .map_err(|e| Error::codec(format!("decoding image: {}", e)))?;
    let mode = ColorMode::from_color_type(pixels.color());
    Ok(DecodedImage { pixels, mode })
}

/// Encode pixel data into the target format.
///
/// JPEG has no alpha channel, so when the target is jpeg and the source
/// mode carries alpha the image is flattened to opaque RGB first. This
/// happens unconditionally whenever both conditions hold.
pub fn encode(image: &DecodedImage, target: ImageFormat) -> Result<Vec<u8>> {
    let flattened;
    let image = if target == ImageFormat::Jpeg && image.mode().has_alpha() {
        flattened = image.flatten_alpha();
        &flattened
    } else {
        image
    };

    let mut buf = Cursor::new(Vec::new());
    image
        .pixels
        .write_to(&mut buf, codec_format(target))
        .map_err(|e| Error::codec(format!("encoding image as {}: {}", target, e)))?;
    Ok(buf.into_inner())
}

fn codec_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Gif => image::ImageFormat::Gif,
    }
}
