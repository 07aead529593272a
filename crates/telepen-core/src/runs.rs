//! Run-length segmentation of a thresholded row.

/// One maximal stretch of same-colored pixels in a scan row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Length in pixels, always positive.
    pub len: u32,
    /// Bars are pixels strictly darker than the threshold.
    pub is_bar: bool,
}

/// Segment a grayscale row into alternating bar/space runs.
///
/// Invariants: consecutive runs alternate in `is_bar` and the lengths sum
/// to the row width. An empty row yields an empty sequence.
pub fn extract_runs(gray: &[f64], threshold: u8) -> Vec<Run> {
    let thr = f64::from(threshold);
    let mut runs: Vec<Run> = Vec::new();

    for &g in gray {
        let is_bar = g < thr;
        match runs.last_mut() {
            Some(last) if last.is_bar == is_bar => last.len += 1,
            _ => runs.push(Run { len: 1, is_bar }),
        }
    }

    runs
}
