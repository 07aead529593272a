//! Scan-row selection.

/// Vertical fractions probed by the decoder, center rows first.
///
/// The order matters: a clean center scan lets the orchestrator
/// short-circuit without touching the outer rows.
pub const SCAN_ROW_FRACTIONS: [f64; 9] = [0.50, 0.45, 0.55, 0.40, 0.60, 0.35, 0.65, 0.30, 0.70];

/// Rows to probe for an image of the given height, in probe order.
///
/// Small heights collapse several fractions onto the same index; repeats
/// are dropped since re-scanning an identical row cannot change the
/// outcome.
pub fn scan_rows(height: usize) -> Vec<usize> {
    let mut rows = Vec::with_capacity(SCAN_ROW_FRACTIONS.len());
    for f in SCAN_ROW_FRACTIONS {
        let y = ((height as f64) * f).floor() as usize;
        let y = y.min(height.saturating_sub(1));
        if !rows.contains(&y) {
            rows.push(y);
        }
    }
    rows
}
