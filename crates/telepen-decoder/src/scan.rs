//! Row orchestration: rows × directions × tolerances, first win returns.

use log::debug;
use telepen_core::{extract_runs, luminance_row, otsu_threshold, scan_rows, RgbaImageView, Run};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::classify::classify_elements;
use crate::digits::{glyphs_to_digits, verify_checksum};
use crate::frame::match_glyph_sequence;
use crate::width::estimate_narrow;
use crate::{Decoded, DecoderParams, ScanError};

/// Decode a Telepen Numeric element stream into digits.
///
/// This is the symbol-level half of the pipeline: framing, checksum and
/// digit expansion, independent of any pixel source.
pub fn decode_element_stream(
    elements: &[u8],
    params: &DecoderParams,
) -> Result<Decoded, ScanError> {
    let glyphs = match_glyph_sequence(elements, params)?;
    let data = verify_checksum(&glyphs)?;
    let text = glyphs_to_digits(data)?;
    Ok(Decoded {
        text,
        checksum_valid: true,
        has_stop_char: true,
    })
}

/// Telepen Numeric decoder over raw RGBA rasters.
///
/// A single instance is cheap and reusable; decoding holds no state
/// between invocations and the pattern tables are process-wide constants.
#[derive(Clone, Debug, Default)]
pub struct TelepenDecoder {
    params: DecoderParams,
}

impl TelepenDecoder {
    /// Create a decoder with the given parameters.
    pub fn new(params: DecoderParams) -> Self {
        Self { params }
    }

    /// Parameters used by this decoder.
    #[inline]
    pub fn params(&self) -> &DecoderParams {
        &self.params
    }

    /// Scan the image for a Telepen Numeric symbol.
    ///
    /// Probes horizontal rows center-out, each in both directions (a
    /// symbol photographed upside-down reads right-to-left), re-attempting
    /// across the tolerance schedule. The first attempt with a valid
    /// checksum and stop glyph wins; every failure is swallowed, so the
    /// result is either a fully valid decode or `None`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, image), fields(w = image.width, h = image.height))
    )]
    pub fn decode(&self, image: &RgbaImageView<'_>) -> Option<Decoded> {
        for y in scan_rows(image.height) {
            let row = image.row(y)?;
            match self.decode_row(row) {
                Ok(decoded) => {
                    debug!("decoded \"{}\" on row {y}", decoded.text);
                    return Some(decoded);
                }
                Err(err) => debug!("row {y}: {err}"),
            }
        }
        None
    }

    /// Attempt one scan row; the error carries the last failure kind.
    fn decode_row(&self, rgba_row: &[u8]) -> Result<Decoded, ScanError> {
        let gray = luminance_row(rgba_row);
        let threshold = otsu_threshold(&gray).ok_or(ScanError::EmptyInput)?;

        let runs = extract_runs(&gray, threshold);
        if runs.len() < self.params.min_runs {
            return Err(ScanError::TooFewRuns { got: runs.len() });
        }

        let mut last_err = ScanError::StartNotFound;
        for direction in [Direction::Forward, Direction::Reversed] {
            let oriented: Vec<Run> = match direction {
                Direction::Forward => runs.clone(),
                Direction::Reversed => runs.iter().rev().copied().collect(),
            };

            // Skip the left quiet zone; a row without bars has nothing to scan.
            let Some(start_idx) = oriented.iter().position(|r| r.is_bar) else {
                continue;
            };

            let narrow = match estimate_narrow(&oriented, start_idx, &self.params) {
                Ok(narrow) => narrow,
                Err(err) => {
                    last_err = err;
                    continue;
                }
            };

            for &tolerance in &self.params.tolerances {
                let elements = classify_elements(&oriented, start_idx, narrow, tolerance);
                match decode_element_stream(&elements, &self.params) {
                    Ok(decoded) if decoded.is_valid() => return Ok(decoded),
                    Ok(_) => {}
                    Err(err) => last_err = err,
                }
            }
        }

        Err(last_err)
    }
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Forward,
    Reversed,
}
