//! Symbol framing: start search and sequential glyph matching.

use telepen_glyphs::{match_glyph_at, pattern_matches_at, START_CODE, STOP_CODE, TELE_LENS};

use crate::{DecoderParams, ScanError};

/// Locate the start glyph and match glyphs until the stop glyph.
///
/// Returns the matched codes between start and stop: the data glyphs plus
/// the trailing check glyph. The start search is bounded to the first
/// `max_start_shift` element positions; an honest scan never carries more
/// than a handful of spurious elements ahead of the start, and the bound
/// keeps deep stream positions from producing false starts.
pub fn match_glyph_sequence(elements: &[u8], params: &DecoderParams) -> Result<Vec<u8>, ScanError> {
    let start_len = usize::from(TELE_LENS[usize::from(START_CODE)]);
    if elements.len() < start_len {
        return Err(ScanError::StartNotFound);
    }

    let window = (elements.len() - start_len).min(params.max_start_shift);
    let start = (0..=window)
        .find(|&i| pattern_matches_at(elements, i, START_CODE))
        .ok_or(ScanError::StartNotFound)?;

    let mut idx = start + start_len;
    let mut glyphs: Vec<u8> = Vec::new();
    let mut misses = 0u32;

    while idx < elements.len() {
        let Some(code) = match_glyph_at(elements, idx) else {
            misses += 1;
            if misses >= params.miss_budget {
                return Err(ScanError::MissBudgetExhausted);
            }
            idx += 1;
            continue;
        };

        misses = 0;
        if code == STOP_CODE {
            if glyphs.len() < params.min_glyphs {
                return Err(ScanError::TooFewGlyphs { got: glyphs.len() });
            }
            return Ok(glyphs);
        }
        idx += usize::from(TELE_LENS[usize::from(code)]);
        glyphs.push(code);
    }

    Err(ScanError::StopNotFound)
}
