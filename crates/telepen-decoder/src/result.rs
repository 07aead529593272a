use serde::Serialize;

/// Output of a successful decode attempt.
#[derive(Clone, Debug, Serialize)]
pub struct Decoded {
    /// Decimal digit payload, framing and checksum stripped.
    pub text: String,
    /// Whether the modulo-127 check digit matched.
    pub checksum_valid: bool,
    /// Whether the stop glyph terminated the symbol.
    pub has_stop_char: bool,
}

impl Decoded {
    /// A result is surfaced to callers only when fully valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.checksum_valid && self.has_stop_char && !self.text.is_empty()
    }
}
