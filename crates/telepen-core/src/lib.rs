//! Pixel-level utilities shared by the Telepen decoding pipeline.
//!
//! This crate is intentionally small and purely per-row. It does *not*
//! know anything about the symbology; it turns raster rows into runs and
//! leaves every interpretation step to `telepen-decoder`.

mod binarize;
mod image;
mod rows;
mod runs;

pub mod logger;

pub use binarize::{luminance_row, otsu_threshold, OTSU_FALLBACK_THRESHOLD};
pub use image::RgbaImageView;
pub use rows::{scan_rows, SCAN_ROW_FRACTIONS};
pub use runs::{extract_runs, Run};
