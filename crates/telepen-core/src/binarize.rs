//! Grayscale reduction and per-row Otsu thresholding.

/// Threshold substituted when Otsu degenerates on (near-)binary input.
pub const OTSU_FALLBACK_THRESHOLD: u8 = 128;

/// Reduce one interleaved RGBA row to luminance values.
///
/// Uses the Rec. 601 weights `0.299 R + 0.587 G + 0.114 B`; the alpha
/// channel is ignored. The result keeps full `f64` precision so the
/// histogram binning below is the only quantization step.
pub fn luminance_row(rgba: &[u8]) -> Vec<f64> {
    rgba.chunks_exact(4)
        .map(|px| 0.299 * f64::from(px[0]) + 0.587 * f64::from(px[1]) + 0.114 * f64::from(px[2]))
        .collect()
}

/// Compute the Otsu threshold of a grayscale row.
///
/// Builds a 256-bin histogram of `⌊gray⌋` clamped to `[0, 255]` and picks
/// the earliest threshold maximizing the between-class variance
/// `wB * wF * (mB - mF)^2`. A result of `0` or `255` means the row is
/// essentially binary already and the fixed fallback is returned instead.
///
/// Returns `None` for an empty row.
pub fn otsu_threshold(gray: &[f64]) -> Option<u8> {
    if gray.is_empty() {
        return None;
    }

    let mut hist = [0u32; 256];
    for &g in gray {
        let bin = (g.floor()).clamp(0.0, 255.0) as usize;
        hist[bin] += 1;
    }

    let total = gray.len() as f64;
    let mut sum_total = 0f64;
    for (i, &h) in hist.iter().enumerate() {
        sum_total += (i as f64) * f64::from(h);
    }

    let mut sum_b = 0f64;
    let mut w_b = 0f64;
    let mut best_var = -1f64;
    let mut best_t = 0u8;

    for (t, &h) in hist.iter().enumerate() {
        w_b += f64::from(h);
        if w_b == 0.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0.0 {
            break;
        }

        sum_b += (t as f64) * f64::from(h);
        let m_b = sum_b / w_b;
        let m_f = (sum_total - sum_b) / w_f;

        let var_between = w_b * w_f * (m_b - m_f) * (m_b - m_f);
        if var_between > best_var {
            best_var = var_between;
            best_t = t as u8;
        }
    }

    if best_t == 0 || best_t == 255 {
        return Some(OTSU_FALLBACK_THRESHOLD);
    }
    Some(best_t)
}
