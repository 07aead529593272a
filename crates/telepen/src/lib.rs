//! High-level facade for the `telepen-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the pixel core, symbology tables and decoder
//! - raw-buffer entry points for callers that own their rasters
//! - (feature-gated) integration with the `image` crate

pub use telepen_core as core;
pub use telepen_decoder as decoder;
pub use telepen_glyphs as glyphs;

pub use telepen_core::{logger, RgbaImageView};
pub use telepen_decoder::{Decoded, DecoderParams, TelepenDecoder};

#[cfg(feature = "image")]
pub mod detect;

/// Errors produced by the buffer-validating entry points.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid RGBA buffer length (expected {expected} bytes, got {got})")]
    InvalidRgbaBuffer { expected: usize, got: usize },

    #[error("invalid image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Decode a Telepen Numeric symbol from a raw interleaved RGBA buffer.
///
/// `pixels` must hold `4 * width * height` bytes in R,G,B,A order. The
/// result is the digit payload, or `None` when no symbol with a valid
/// checksum and stop glyph was found.
pub fn decode_telepen_from_rgba_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<Option<String>, DetectError> {
    let view = rgba_view_from_slice(width, height, pixels)?;
    let decoder = TelepenDecoder::new(DecoderParams::default());
    Ok(decoder.decode(&view).map(|d| d.text))
}

/// Build an [`RgbaImageView`] over a raw buffer, validating dimensions.
pub fn rgba_view_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<RgbaImageView<'_>, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidDimensions { width, height });
    };
    let Some(expected) = 4usize
        .checked_mul(w)
        .and_then(|n| n.checked_mul(h))
        .filter(|_| w > 0 && h > 0)
    else {
        return Err(DetectError::InvalidDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidRgbaBuffer {
            expected,
            got: pixels.len(),
        });
    }
    RgbaImageView::new(w, h, pixels).ok_or(DetectError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_validation() {
        let buf = vec![0u8; 4 * 8 * 2];
        assert!(rgba_view_from_slice(8, 2, &buf).is_ok());
        assert!(matches!(
            rgba_view_from_slice(8, 3, &buf),
            Err(DetectError::InvalidRgbaBuffer { .. })
        ));
        assert!(matches!(
            rgba_view_from_slice(0, 2, &buf[..0]),
            Err(DetectError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn blank_buffer_decodes_to_nothing() {
        let buf = vec![255u8; 4 * 64 * 4];
        assert_eq!(decode_telepen_from_rgba_u8(64, 4, &buf).expect("ok"), None);
    }
}
