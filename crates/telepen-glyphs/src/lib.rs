//! Telepen symbology tables and glyph matching.
//!
//! This crate carries the static per-code element patterns of the Telepen
//! symbology and the exact-match routines used when walking an element
//! stream. It knows nothing about pixels; `telepen-core` produces element
//! streams and `telepen-decoder` drives the matching.
//!
//! ## Quickstart
//!
//! ```
//! use telepen_glyphs::{pattern_matches_at, START_CODE, TELE_TABLE};
//!
//! let stream = TELE_TABLE[usize::from(START_CODE)].to_vec();
//! assert!(pattern_matches_at(&stream, 0, START_CODE));
//! ```

mod matcher;
mod table;

pub use matcher::{match_glyph_at, pattern_matches_at, SEARCH_ORDER};
pub use table::{CHECKSUM_MODULUS, NARROW, START_CODE, STOP_CODE, TELE_LENS, TELE_TABLE, WIDE};
