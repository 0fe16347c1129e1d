//! Image decoding and PNG normalization
//!
//! Every downloaded image is decoded, converted to a canonical pixel
//! format (RGBA8 when the source carries alpha, RGB8 otherwise), and
//! re-encoded as lossless PNG with best compression.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageError};
use std::io::Cursor;

/// Decodes arbitrary image bytes and re-encodes them as normalized PNG
///
/// Animated formats contribute only their first frame. Unrecognized or
/// corrupt input surfaces as an error for the caller to skip.
pub fn to_png_bytes(data: &[u8]) -> Result<Vec<u8>, ImageError> {
    let decoded = image::load_from_memory(data)?;
    encode_png(&normalize_pixels(decoded))
}

/// Converts to RGBA8 when the source has an alpha channel, RGB8 otherwise
///
/// Indexed-color inputs arrive here already expanded by the decoder, so a
/// palette carrying transparency keeps its alpha.
pub fn normalize_pixels(image: DynamicImage) -> DynamicImage {
    if image.color().has_alpha() {
        DynamicImage::ImageRgba8(image.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    }
}

/// Encodes as PNG with best compression and adaptive filtering
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        Cursor::new(&mut buf),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    image.write_with_encoder(encoder)?;
    Ok(buf)
}
