/// Internal failure kinds of a single decode attempt.
///
/// Every variant is recoverable by moving on to the next row, direction or
/// tolerance; nothing here ever reaches the caller of the public entry
/// points, which report plain absence instead.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanError {
    #[error("empty scan row")]
    EmptyInput,
    #[error("too few runs for a Telepen symbol ({got})")]
    TooFewRuns { got: usize },
    #[error("narrow-width estimate failed")]
    InvalidWidthEstimate,
    #[error("start glyph not found")]
    StartNotFound,
    #[error("element stream ended before the stop glyph")]
    StopNotFound,
    #[error("consecutive match misses exhausted the budget")]
    MissBudgetExhausted,
    #[error("checksum mismatch (expected {expected}, got {got})")]
    ChecksumMismatch { expected: u8, got: u8 },
    #[error("too few glyphs between start and stop ({got})")]
    TooFewGlyphs { got: usize },
    #[error("no digits decoded from the data glyphs")]
    EmptyDigitString,
}
