//! Telepen Numeric scan-line decoder.
//!
//! The pipeline is strictly forward and stateless between rows:
//! grayscale reduction → Otsu thresholding → run extraction → narrow-width
//! estimation → element classification → framing and glyph matching →
//! checksum verification → digit reconstruction. Every stage failure is
//! internal control flow; callers see a valid decode or nothing.
//!
//! ## Quickstart
//!
//! ```
//! use telepen_core::RgbaImageView;
//! use telepen_decoder::{DecoderParams, TelepenDecoder};
//!
//! let pixels = vec![255u8; 4 * 64 * 8];
//! let view = RgbaImageView::new(64, 8, &pixels).expect("view");
//!
//! let decoder = TelepenDecoder::new(DecoderParams::default());
//! assert!(decoder.decode(&view).is_none());
//! ```

mod classify;
mod digits;
mod error;
mod frame;
mod params;
mod result;
mod scan;
mod width;

pub use classify::classify_elements;
pub use digits::{expected_checksum, glyphs_to_digits, verify_checksum};
pub use error::ScanError;
pub use frame::match_glyph_sequence;
pub use params::DecoderParams;
pub use result::Decoded;
pub use scan::{decode_element_stream, TelepenDecoder};
pub use width::estimate_narrow;
