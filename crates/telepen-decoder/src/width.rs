//! Narrow unit-width estimation from run lengths.

use log::debug;
use telepen_core::Run;

use crate::{DecoderParams, ScanError};

/// Estimate the narrow element width in pixels.
///
/// Samples at most `max_width_samples` run lengths from `start_idx`
/// onwards, excluding the trailing run (the right quiet zone). A
/// two-center clustering splits narrow from wide lengths; the narrow
/// center is accepted when the centers sit in the expected ≈1:3 ratio
/// band, otherwise a low-percentile median of the sorted lengths is used.
///
/// The returned width is not rounded.
pub fn estimate_narrow(
    runs: &[Run],
    start_idx: usize,
    params: &DecoderParams,
) -> Result<f64, ScanError> {
    let end = runs.len().saturating_sub(1);
    if start_idx >= end {
        return Err(ScanError::InvalidWidthEstimate);
    }
    let take = (end - start_idx).min(params.max_width_samples);
    let samples: Vec<f64> = runs[start_idx..start_idx + take]
        .iter()
        .map(|r| f64::from(r.len))
        .collect();

    if samples.len() < params.min_width_samples {
        return Err(ScanError::InvalidWidthEstimate);
    }

    let mut narrow = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let mut wide = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    for _ in 0..params.kmeans_iterations {
        let mut sum_n = 0.0;
        let mut cnt_n = 0usize;
        let mut sum_w = 0.0;
        let mut cnt_w = 0usize;

        for &s in &samples {
            if (s - narrow).abs() <= (s - wide).abs() {
                sum_n += s;
                cnt_n += 1;
            } else {
                sum_w += s;
                cnt_w += 1;
            }
        }

        // An emptied cluster keeps its previous center.
        if cnt_n > 0 {
            narrow = sum_n / cnt_n as f64;
        }
        if cnt_w > 0 {
            wide = sum_w / cnt_w as f64;
        }
    }

    if narrow > 0.0 {
        let ratio = wide / narrow;
        if ratio >= params.min_wide_ratio && ratio <= params.max_wide_ratio {
            return Ok(narrow);
        }
        debug!("width clustering off-ratio ({ratio:.2}), using percentile fallback");
    }

    Ok(percentile_fallback(samples, params.fallback_percentile))
}

/// Median of the lower `fraction` of the sorted lengths.
fn percentile_fallback(mut samples: Vec<f64>, fraction: f64) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let k = ((samples.len() as f64 * fraction) as usize).max(1);
    samples[k / 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs_of(lengths: &[u32]) -> Vec<Run> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| Run {
                len,
                is_bar: i % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn clean_one_to_three_mix() {
        // 4px narrow, 12px wide, plus the trailing quiet zone to ignore.
        let mut lengths = vec![4u32; 14];
        lengths.extend([12, 4, 12, 4, 12, 4]);
        lengths.push(40);
        let runs = runs_of(&lengths);
        let narrow = estimate_narrow(&runs, 0, &DecoderParams::default()).expect("estimate");
        assert!((narrow - 4.0).abs() < 0.5, "narrow = {narrow}");
    }

    #[test]
    fn too_few_samples() {
        let runs = runs_of(&[4, 12, 4, 12, 4]);
        assert_eq!(
            estimate_narrow(&runs, 0, &DecoderParams::default()),
            Err(ScanError::InvalidWidthEstimate)
        );
    }

    #[test]
    fn off_ratio_uses_percentile_fallback() {
        // All runs the same width: ratio 1.0, well outside [2.5, 3.5].
        let runs = runs_of(&[5; 30]);
        let narrow = estimate_narrow(&runs, 0, &DecoderParams::default()).expect("estimate");
        assert!((narrow - 5.0).abs() < 1e-9);
    }

    #[test]
    fn start_index_skips_leading_quiet_zone() {
        let mut lengths = vec![300u32];
        lengths.extend([4, 12].repeat(10));
        lengths.push(40);
        let runs = runs_of(&lengths);
        let narrow = estimate_narrow(&runs, 1, &DecoderParams::default()).expect("estimate");
        assert!((narrow - 4.0).abs() < 0.5, "narrow = {narrow}");
    }

    #[test]
    fn noisy_widths_still_cluster() {
        let mut lengths = Vec::new();
        for i in 0..20u32 {
            lengths.push(4 + (i % 2));
            lengths.push(12 + (i % 3));
        }
        lengths.push(50);
        let runs = runs_of(&lengths);
        let narrow = estimate_narrow(&runs, 0, &DecoderParams::default()).expect("estimate");
        assert!(narrow > 3.5 && narrow < 5.5, "narrow = {narrow}");
    }
}
