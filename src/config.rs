//! Configuration for reliability analysis.

/// Configuration options for [`ReliabilityAnalyzer`](crate::ReliabilityAnalyzer).
#[derive(Debug, Clone)]
pub struct Config {
    /// Bootstrap replicates for confidence intervals (default: 1,000).
    ///
    /// Each replicate performs one full censored MLE refit, so wall-clock
    /// cost scales linearly. Interactive fleet-wide views should lower this;
    /// single-asset deep analysis can raise it.
    pub n_bootstrap: usize,

    /// Significance level for percentile confidence intervals (default: 0.05).
    pub alpha: f64,

    /// Fall back to an uncensored fit when a bootstrap replicate's censored
    /// fit fails to converge (default: true).
    ///
    /// When disabled, a single failing replicate aborts the whole bootstrap —
    /// a contaminated confidence interval is never returned either way.
    pub uncensored_fallback: bool,

    /// Optional deterministic seed for bootstrap resampling.
    ///
    /// `None` draws a fresh seed from thread-local entropy. Replicate seeds
    /// are derived from this base via a counter hash, so results are
    /// reproducible and independent of the parallel schedule.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_bootstrap: 1_000,
            alpha: 0.05,
            uncensored_fallback: true,
            seed: None,
        }
    }
}
