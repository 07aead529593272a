//! `image`-crate integration.

use crate::{Decoded, DecoderParams, RgbaImageView, TelepenDecoder};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Convert an `image::RgbaImage` into the lightweight core view type.
pub fn rgba_view(img: &::image::RgbaImage) -> RgbaImageView<'_> {
    RgbaImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Decode a Telepen Numeric symbol from an RGBA image.
///
/// Returns the digit payload, or `None` when no symbol with a valid
/// checksum and stop glyph was found on any probed scan row.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img), fields(width = img.width(), height = img.height()))
)]
pub fn decode_telepen(img: &::image::RgbaImage) -> Option<String> {
    decode_telepen_with(img, &DecoderParams::default()).map(|d| d.text)
}

/// Decode with explicit parameters, keeping the full result record.
pub fn decode_telepen_with(img: &::image::RgbaImage, params: &DecoderParams) -> Option<Decoded> {
    let decoder = TelepenDecoder::new(params.clone());
    decoder.decode(&rgba_view(img))
}

/// Convenience overload for dynamic images of any color type.
pub fn decode_telepen_dynamic(img: &::image::DynamicImage) -> Option<String> {
    decode_telepen(&img.to_rgba8())
}
