//! Checksum verification and digit reconstruction.

use telepen_glyphs::CHECKSUM_MODULUS;

use crate::ScanError;

/// Check digit expected for the given sum of data glyph codes.
#[inline]
pub fn expected_checksum(sum: u32) -> u8 {
    ((CHECKSUM_MODULUS - (sum % CHECKSUM_MODULUS)) % CHECKSUM_MODULUS) as u8
}

/// Split the matched glyphs into data and check glyph, verifying the
/// modulo-127 checksum.
pub fn verify_checksum(glyphs: &[u8]) -> Result<&[u8], ScanError> {
    let (&received, data) = glyphs
        .split_last()
        .ok_or(ScanError::TooFewGlyphs { got: 0 })?;
    let sum: u32 = data.iter().map(|&g| u32::from(g)).sum();
    let expected = expected_checksum(sum);
    if received != expected {
        return Err(ScanError::ChecksumMismatch {
            expected,
            got: received,
        });
    }
    Ok(data)
}

/// Expand Numeric-mode data glyphs into their decimal digits.
///
/// Codes `27..=126` carry a digit pair, codes `17..=26` a single digit.
/// Anything else cannot occur in a well-formed Numeric symbol and is
/// skipped silently; skipping guards against a spurious match that made
/// it past the earlier gates.
pub fn glyphs_to_digits(data: &[u8]) -> Result<String, ScanError> {
    let mut text = String::with_capacity(data.len() * 2);
    for &g in data {
        match g {
            27..=126 => {
                let pair = u32::from(g) - 27;
                if pair <= 99 {
                    text.push(char::from(b'0' + (pair / 10) as u8));
                    text.push(char::from(b'0' + (pair % 10) as u8));
                }
            }
            17..=26 => text.push(char::from(b'0' + (g - 17))),
            _ => {}
        }
    }
    if text.is_empty() {
        return Err(ScanError::EmptyDigitString);
    }
    Ok(text)
}
