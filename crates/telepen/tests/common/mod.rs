//! Synthetic Telepen Numeric rasters for the end-to-end tests.
//!
//! Everything here is generated; no image fixtures are checked in.

use telepen::decoder::expected_checksum;
use telepen::glyphs::{START_CODE, STOP_CODE, TELE_TABLE};

/// Full glyph sequence for a digit payload: start, data, check, stop.
///
/// Digit pairs map to codes `27 + pair`; a trailing odd digit uses the
/// single-digit codes `17 + d`.
pub fn symbol_glyphs(digits: &str) -> Vec<u8> {
    let d: Vec<u32> = digits
        .chars()
        .map(|c| c.to_digit(10).expect("decimal digit"))
        .collect();

    let mut data = Vec::with_capacity(d.len() / 2 + 1);
    let mut i = 0;
    while i < d.len() {
        if i + 1 < d.len() {
            data.push((27 + d[i] * 10 + d[i + 1]) as u8);
            i += 2;
        } else {
            data.push((17 + d[i]) as u8);
            i += 1;
        }
    }

    let sum: u32 = data.iter().map(|&g| u32::from(g)).sum();
    let mut glyphs = vec![START_CODE];
    glyphs.extend_from_slice(&data);
    glyphs.push(expected_checksum(sum));
    glyphs.push(STOP_CODE);
    glyphs
}

/// Rasterize a glyph sequence into one grayscale row.
///
/// Bars are 0, spaces 255, `narrow_px` pixels per unit, quiet zones on
/// both sides.
pub fn rasterize_gray_row(glyphs: &[u8], narrow_px: usize, quiet_px: usize) -> Vec<u8> {
    let mut row = vec![255u8; quiet_px];
    for &g in glyphs {
        let mut bar = true;
        for &e in TELE_TABLE[usize::from(g)] {
            let value = if bar { 0 } else { 255 };
            row.extend(std::iter::repeat(value).take(usize::from(e) * narrow_px));
            bar = !bar;
        }
    }
    row.extend(std::iter::repeat(255u8).take(quiet_px));
    row
}

/// Stack a grayscale row into an RGBA image of the given height.
pub fn rgba_image_from_gray_row(row: &[u8], height: usize) -> (u32, u32, Vec<u8>) {
    let mut data = Vec::with_capacity(4 * row.len() * height);
    for _ in 0..height {
        for &g in row {
            data.extend_from_slice(&[g, g, g, 255]);
        }
    }
    (row.len() as u32, height as u32, data)
}

/// Synthetic raster for a digit payload, the E1 shape.
pub fn symbol_image(
    digits: &str,
    narrow_px: usize,
    quiet_px: usize,
    height: usize,
) -> (u32, u32, Vec<u8>) {
    let row = rasterize_gray_row(&symbol_glyphs(digits), narrow_px, quiet_px);
    rgba_image_from_gray_row(&row, height)
}

/// Horizontal mirror of an RGBA image.
pub fn mirror_rgba(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    let w = width as usize;
    let mut out = Vec::with_capacity(data.len());
    for y in 0..height as usize {
        let row = &data[y * 4 * w..(y + 1) * 4 * w];
        for x in (0..w).rev() {
            out.extend_from_slice(&row[4 * x..4 * x + 4]);
        }
    }
    out
}

/// Three-tap box blur, a crude stand-in for camera antialiasing.
pub fn blur_gray_row(row: &[u8]) -> Vec<u8> {
    (0..row.len())
        .map(|i| {
            let a = u32::from(row[i.saturating_sub(1)]);
            let b = u32::from(row[i]);
            let c = u32::from(row[(i + 1).min(row.len() - 1)]);
            ((a + b + c) / 3) as u8
        })
        .collect()
}

/// Deterministic xorshift32 for reproducible noise.
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform byte in `0..=255`.
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u32() % 256) as u8
    }
}
