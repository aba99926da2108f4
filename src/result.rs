//! Core result types returned by the analytics engine.
//!
//! All results are value objects owned by the caller; the engine holds no
//! state between calls and never persists anything. Metric-specific records
//! (B-life, RPN, OEE, ...) live next to their computations in [`crate::analysis`].

use serde::{Deserialize, Serialize};

/// Derived time-between-failure intervals with right-censoring flags.
///
/// Invariants: both vectors have the same length, at most the last entry is
/// censored, and all interval values are ≥ 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TbfResult {
    /// Operating hours between consecutive failures, in chronological order.
    pub intervals_hours: Vec<f64>,
    /// `true` marks an interval ending at the end of observation rather than
    /// at an actual failure.
    pub censored_flags: Vec<bool>,
}

impl TbfResult {
    /// Number of derived intervals.
    pub fn len(&self) -> usize {
        self.intervals_hours.len()
    }

    /// True when no intervals could be derived.
    pub fn is_empty(&self) -> bool {
        self.intervals_hours.is_empty()
    }
}

/// A fitted 2-parameter Weibull distribution (location fixed at 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeibullFit {
    /// Shape parameter β (> 0). β < 1 infant mortality, β ≈ 1 random
    /// failures, β > 1 wear-out.
    pub shape: f64,
    /// Scale parameter η (> 0), in the same units as the fitted durations.
    pub scale: f64,
    /// Log-likelihood recomputed at the optimum, for diagnostics.
    pub log_likelihood: f64,
}

/// Percentile-bootstrap confidence intervals on Weibull parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeibullCi {
    /// `(lower, upper)` bounds on the shape parameter.
    pub shape_ci: (f64, f64),
    /// `(lower, upper)` bounds on the scale parameter.
    pub scale_ci: (f64, f64),
}

/// Reliability and hazard curves evaluated over a time grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityCurves {
    /// Evaluation times (hours).
    pub times: Vec<f64>,
    /// `R(t) = 1 - CDF(t)` at each time.
    pub reliability: Vec<f64>,
    /// `h(t) = pdf(t) / max(R(t), 1e-12)` at each time.
    pub hazard: Vec<f64>,
}

/// Aggregate reliability KPIs for one asset (or a small fleet slice).
///
/// Computed fresh per call; persistence, if any, is the caller's
/// responsibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetKpi {
    /// Mean time between failures, hours.
    pub mtbf_hours: f64,
    /// Mean time to repair, hours.
    pub mttr_hours: f64,
    /// `MTBF / (MTBF + MTTR)`, 0 when the denominator is ≤ 0.
    pub availability: f64,
    /// The TBF intervals behind `mtbf_hours` (includes the censored tail).
    pub intervals_hours: Vec<f64>,
    /// Censoring flags parallel to `intervals_hours`.
    pub censored_flags: Vec<bool>,
    /// Average failure rate: failures per operating hour.
    pub failure_rate: f64,
    /// Total logged operating hours.
    pub total_exposure_hours: f64,
    /// Number of failure events.
    pub failure_count: usize,
    /// Number of events of any type.
    pub total_events: usize,
}
