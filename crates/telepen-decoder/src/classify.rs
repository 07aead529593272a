//! Mapping runs onto narrow/wide elements.

use telepen_core::Run;
use telepen_glyphs::{NARROW, WIDE};

/// Classify the runs of one scan direction into elements over `{1, 3}`.
///
/// The trailing run is dropped when it is a space longer than twice the
/// narrow width (the right quiet zone). Dropping it can expose a bar as
/// the new last run; that means the symbol's final narrow space was
/// absorbed into the quiet zone, so a synthetic narrow element is appended
/// after classification.
///
/// `tolerance` does not alter the nearest-center decision; it is accepted
/// so the orchestrator's retry loop matches the reference scanner.
pub fn classify_elements(runs: &[Run], start_idx: usize, narrow: f64, _tolerance: f64) -> Vec<u8> {
    let wide = 3.0 * narrow;

    if start_idx >= runs.len() {
        return Vec::new();
    }

    let mut end_idx = runs.len() - 1;
    let mut repair_absorbed_space = false;
    let last = runs[end_idx];
    if !last.is_bar && f64::from(last.len) > 2.0 * narrow {
        if end_idx == start_idx {
            return Vec::new();
        }
        end_idx -= 1;
        repair_absorbed_space = runs[end_idx].is_bar;
    }

    let mut elements = Vec::with_capacity(end_idx - start_idx + 2);
    for run in &runs[start_idx..=end_idx] {
        let len = f64::from(run.len);
        let element = if (len - narrow).abs() < (len - wide).abs() {
            NARROW
        } else {
            WIDE
        };
        elements.push(element);
    }

    if repair_absorbed_space {
        elements.push(NARROW);
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternating(lengths: &[u32], first_is_bar: bool) -> Vec<Run> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| Run {
                len,
                is_bar: (i % 2 == 0) == first_is_bar,
            })
            .collect()
    }

    #[test]
    fn nearest_center_decision() {
        // 4px narrow vs 12px wide; 7px is closer to narrow, 9px to wide.
        let runs = alternating(&[4, 12, 7, 9, 4], true);
        let elements = classify_elements(&runs, 0, 4.0, 0.30);
        assert_eq!(elements, vec![1, 3, 1, 3, 1]);
    }

    #[test]
    fn absorbed_final_space_is_repaired() {
        // The symbol's final narrow space merged into the quiet zone, so
        // the run before it is a bar; the quiet zone is dropped and a
        // synthetic narrow is appended.
        let runs = alternating(&[4, 4, 4, 44], true);
        let elements = classify_elements(&runs, 0, 4.0, 0.30);
        assert_eq!(elements, vec![1, 1, 1, 1]);
    }

    #[test]
    fn trailing_bar_is_never_dropped() {
        // A wide bar at the end of the window is data, not quiet zone.
        let runs = alternating(&[4, 4, 12], true);
        let elements = classify_elements(&runs, 0, 4.0, 0.30);
        assert_eq!(elements, vec![1, 1, 3]);
    }

    #[test]
    fn short_trailing_space_is_kept() {
        // A space at twice the narrow width is not a quiet zone.
        let runs = alternating(&[4, 8], true);
        let elements = classify_elements(&runs, 0, 4.0, 0.30);
        assert_eq!(elements, vec![1, 3]);
    }

    #[test]
    fn tolerance_does_not_change_the_decision() {
        let runs = alternating(&[4, 12, 5, 11, 40], true);
        let a = classify_elements(&runs, 0, 4.0, 0.25);
        let b = classify_elements(&runs, 0, 4.0, 0.50);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_window() {
        let runs = alternating(&[40], false);
        assert!(classify_elements(&runs, 0, 4.0, 0.30).is_empty());
        assert!(classify_elements(&runs, 5, 4.0, 0.30).is_empty());
    }
}
