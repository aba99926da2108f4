//! Main `ReliabilityAnalyzer` entry point and builder.

use crate::analysis::aggregate_kpis;
use crate::config::Config;
use crate::error::AnalyticsError;
use crate::result::{FleetKpi, WeibullCi, WeibullFit};
use crate::statistics::bootstrap_weibull_ci;
use crate::types::{Event, ExposureLog};
use crate::weibull::{fit_weibull, fit_weibull_censored};

/// Configured entry point for reliability analysis.
///
/// Use the builder pattern to tune the bootstrap, then run analyses over
/// exposure/event history or derived durations:
///
/// ```
/// use reliacore::ReliabilityAnalyzer;
///
/// let analyzer = ReliabilityAnalyzer::quick().seed(7);
/// let durations = [120.0, 95.0, 160.0, 140.0, 80.0, 155.0];
/// let fit = analyzer.fit(&durations).unwrap();
/// let ci = analyzer.confidence_intervals(&durations, None).unwrap();
/// assert!(fit.shape > 0.0 && fit.scale > 0.0);
/// assert!(ci.shape_ci.0 < ci.shape_ci.1);
/// ```
///
/// The analyzer is stateless between calls — it holds configuration only,
/// so one instance can serve concurrent per-asset analyses.
#[derive(Debug, Clone, Default)]
pub struct ReliabilityAnalyzer {
    config: Config,
}

impl ReliabilityAnalyzer {
    /// Create with default configuration (1,000 bootstrap replicates).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with a reduced bootstrap for interactive fleet-wide views.
    ///
    /// 200 replicates keeps per-asset latency low at the cost of coarser
    /// confidence intervals.
    pub fn quick() -> Self {
        Self {
            config: Config {
                n_bootstrap: 200,
                ..Config::default()
            },
        }
    }

    /// Create with an enlarged bootstrap for single-asset deep analysis.
    pub fn deep() -> Self {
        Self {
            config: Config {
                n_bootstrap: 5_000,
                ..Config::default()
            },
        }
    }

    /// Set bootstrap replicate count.
    pub fn n_bootstrap(mut self, n: usize) -> Self {
        self.config.n_bootstrap = n;
        self
    }

    /// Set the confidence-interval significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Enable or disable the per-replicate uncensored-fit fallback.
    pub fn uncensored_fallback(mut self, enabled: bool) -> Self {
        self.config.uncensored_fallback = enabled;
        self
    }

    /// Set a deterministic seed for bootstrap resampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Access the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Aggregate reliability KPIs over raw exposure/event history.
    pub fn kpis(&self, exposures: &[ExposureLog], events: &[Event]) -> FleetKpi {
        aggregate_kpis(exposures, events)
    }

    /// Uncensored Weibull MLE over observed durations.
    pub fn fit(&self, durations: &[f64]) -> Result<WeibullFit, AnalyticsError> {
        fit_weibull(durations)
    }

    /// Censored Weibull MLE over durations with right-censoring flags.
    pub fn fit_censored(
        &self,
        durations: &[f64],
        censored_flags: Option<&[bool]>,
    ) -> Result<WeibullFit, AnalyticsError> {
        fit_weibull_censored(durations, censored_flags)
    }

    /// Bootstrap confidence intervals on shape and scale, using this
    /// analyzer's replicate count, alpha, fallback policy, and seed.
    pub fn confidence_intervals(
        &self,
        durations: &[f64],
        censored_flags: Option<&[bool]>,
    ) -> Result<WeibullCi, AnalyticsError> {
        bootstrap_weibull_ci(durations, censored_flags, &self.config)
    }
}
