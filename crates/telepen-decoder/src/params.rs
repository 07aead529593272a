use serde::{Deserialize, Serialize};

/// Tuning knobs of the Telepen decoder.
///
/// The defaults reproduce the reference scanning behavior; tests should
/// not depend on the exact values of `max_start_shift` and `miss_budget`
/// beyond the behavior they gate.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DecoderParams {
    /// Rows with fewer runs than this cannot hold a Numeric symbol.
    pub min_runs: usize,

    /// Cap on the number of run lengths fed to the width estimator.
    pub max_width_samples: usize,

    /// Minimal number of run lengths the width estimator accepts.
    pub min_width_samples: usize,

    /// Iteration budget of the two-center clustering.
    pub kmeans_iterations: usize,

    /// Accepted wide/narrow ratio band around the nominal 1:3.
    pub min_wide_ratio: f64,
    pub max_wide_ratio: f64,

    /// Lower fraction of sorted run lengths used by the fallback estimate.
    pub fallback_percentile: f64,

    /// How far into the element stream the start glyph may sit.
    pub max_start_shift: usize,

    /// Consecutive unmatched positions tolerated before giving up.
    pub miss_budget: u32,

    /// Minimal matched glyph count (one data glyph plus the checksum).
    pub min_glyphs: usize,

    /// Classification tolerances cycled by the orchestrator.
    ///
    /// The nearest-center element decision ignores the value; the list
    /// only drives re-attempts, kept for parity with the reference
    /// scanner's retry envelope.
    pub tolerances: Vec<f64>,
}

impl Default for DecoderParams {
    fn default() -> Self {
        Self {
            min_runs: 20,
            max_width_samples: 100,
            min_width_samples: 10,
            kmeans_iterations: 10,
            min_wide_ratio: 2.5,
            max_wide_ratio: 3.5,
            fallback_percentile: 0.30,
            max_start_shift: 20,
            miss_budget: 2,
            min_glyphs: 2,
            tolerances: vec![0.30, 0.35, 0.40, 0.45, 0.50, 0.25],
        }
    }
}
