//! Extended reliability metrics beyond core MTBF/MTTR/availability.
//!
//! B-life, failure rate with instantaneous hazard, conditional reliability,
//! MTTF, repair-effectiveness trend, bad-actor ranking, and FMEA-style RPN.

use serde::{Deserialize, Serialize};

use crate::constants::{BAD_ACTOR_WEIGHTS, DEFAULT_DETECTION, SURVIVAL_EPS};
use crate::error::AnalyticsError;
use crate::statistics::{compute_median, round_to};
use crate::weibull::{hazard_rate, survival};

/// Bx life — the time at which x% of the population is expected to fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BLifeResult {
    /// Requested percentile, e.g. 10 for B10.
    pub percentile: f64,
    /// Hours at which `percentile`% have failed.
    pub life_hours: f64,
    /// Shape parameter the life was computed from.
    pub shape: f64,
    /// Scale parameter the life was computed from.
    pub scale: f64,
}

/// Compute Bx life from Weibull shape/scale via the quantile function
/// `t = scale * (-ln(1 - x/100))^(1/shape)`.
///
/// # Errors
///
/// [`AnalyticsError::InvalidPercentile`] unless `0 < percentile < 100`.
pub fn compute_b_life(
    shape: f64,
    scale: f64,
    percentile: f64,
) -> Result<BLifeResult, AnalyticsError> {
    if percentile <= 0.0 || percentile >= 100.0 {
        return Err(AnalyticsError::InvalidPercentile(percentile));
    }
    let p = percentile / 100.0;
    let life = scale * (-(1.0 - p).ln()).powf(1.0 / shape);
    Ok(BLifeResult {
        percentile,
        life_hours: round_to(life, 2),
        shape,
        scale,
    })
}

/// Average and instantaneous failure rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailureRateResult {
    /// Failures per operating hour over the observation window.
    pub average_rate: f64,
    /// Weibull hazard at the latest operating age, 0 when no fit/age given.
    pub instantaneous_rate: f64,
    /// Failure count behind the average.
    pub total_failures: usize,
    /// Operating hours behind the average.
    pub total_hours: f64,
}

/// Average failure rate plus the Weibull instantaneous hazard at the
/// current operating age.
///
/// The hazard term is computed only when shape, scale, and a positive age
/// are all supplied; otherwise it stays 0.
pub fn compute_failure_rate(
    total_failures: usize,
    total_operating_hours: f64,
    shape: Option<f64>,
    scale: Option<f64>,
    current_age_hours: Option<f64>,
) -> FailureRateResult {
    let avg_rate = if total_operating_hours > 0.0 {
        total_failures as f64 / total_operating_hours
    } else {
        0.0
    };
    let instant_rate = match (shape, scale, current_age_hours) {
        (Some(shape), Some(scale), Some(age)) if shape > 0.0 && scale > 0.0 && age > 0.0 => {
            hazard_rate(shape, scale, age)
        }
        _ => 0.0,
    };
    FailureRateResult {
        average_rate: round_to(avg_rate, 6),
        instantaneous_rate: round_to(instant_rate, 6),
        total_failures,
        total_hours: round_to(total_operating_hours, 2),
    }
}

/// Probability of surviving an additional mission given survival to age t.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionalReliabilityResult {
    /// Age already survived, hours.
    pub current_age: f64,
    /// Additional mission duration, hours.
    pub mission_time: f64,
    /// `R(t + Δt | T > t) = S(t + Δt) / S(t)`.
    pub conditional_reliability: f64,
}

/// Conditional reliability for mission planning: "this asset has already run
/// 500 h — what is the probability it survives another 100 h?"
///
/// Defined as 0 when `S(t)` is numerically zero (below 1e-12), avoiding
/// division blow-up deep in the tail.
pub fn compute_conditional_reliability(
    shape: f64,
    scale: f64,
    current_age: f64,
    mission_time: f64,
) -> ConditionalReliabilityResult {
    let r_t = survival(shape, scale, current_age);
    let r_total = survival(shape, scale, current_age + mission_time);
    let cond_r = if r_t > SURVIVAL_EPS { r_total / r_t } else { 0.0 };
    ConditionalReliabilityResult {
        current_age,
        mission_time,
        conditional_reliability: round_to(cond_r, 6),
    }
}

/// MTTF for non-repairable items: `scale * Γ(1 + 1/shape)`.
pub fn compute_mttf(shape: f64, scale: f64) -> f64 {
    round_to(scale * libm::tgamma(1.0 + 1.0 / shape), 2)
}

/// Whether repairs restore the asset to good-as-new.
///
/// A trend ratio > 1 means later TBF intervals are longer (improving);
/// < 1 means repairs are not restoring like-new condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepairEffectivenessResult {
    /// Median of the later half of intervals over the median of the earlier half.
    pub trend_ratio: f64,
    /// Positive intervals that entered the comparison.
    pub intervals_count: usize,
    /// `trend_ratio >= 1.0`. With fewer than 4 positive intervals the result
    /// defaults to a neutral ratio of 1.0 and `improving = true` by
    /// convention; check `intervals_count` to distinguish "insufficient
    /// data" from a genuine neutral trend.
    pub improving: bool,
}

/// Split-half repair-effectiveness trend over chronologically ordered TBF
/// intervals. Non-positive intervals are dropped before splitting.
pub fn compute_repair_effectiveness(intervals: &[f64]) -> RepairEffectivenessResult {
    let positive: Vec<f64> = intervals.iter().copied().filter(|&v| v > 0.0).collect();
    if positive.len() < 4 {
        return RepairEffectivenessResult {
            trend_ratio: 1.0,
            intervals_count: positive.len(),
            improving: true,
        };
    }
    let mid = positive.len() / 2;
    let first_half = compute_median(&positive[..mid]);
    let second_half = compute_median(&positive[mid..]);
    let ratio = if first_half > 1e-12 {
        second_half / first_half
    } else {
        1.0
    };
    RepairEffectivenessResult {
        trend_ratio: round_to(ratio, 4),
        intervals_count: positive.len(),
        improving: ratio >= 1.0,
    }
}

/// Per-asset inputs for the bad-actor ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadActorInput {
    /// Asset identifier.
    pub asset_id: i64,
    /// Display name.
    pub asset_name: String,
    /// Failure events over the comparison window.
    pub failure_count: usize,
    /// Total downtime over the window, hours.
    pub total_downtime_hours: f64,
    /// Availability in [0, 1].
    pub availability: f64,
}

/// One row of the bad-actor ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadActorEntry {
    /// Asset identifier.
    pub asset_id: i64,
    /// Display name.
    pub asset_name: String,
    /// Failure events over the comparison window.
    pub failure_count: usize,
    /// Total downtime over the window, hours.
    pub total_downtime_hours: f64,
    /// Availability in [0, 1].
    pub availability: f64,
    /// Composite score; higher = worse performer.
    pub composite_score: f64,
}

/// Fleet-level ranking of worst-performing assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadActorAnalysis {
    /// Entries sorted worst-first, truncated to the requested top N.
    pub entries: Vec<BadActorEntry>,
}

/// Rank assets by a composite bad-actor score.
///
/// Each dimension is normalized to [0, 1] against the fleet maximum
/// (guarding against a zero maximum), then combined as
/// `0.4·failures + 0.35·downtime + 0.25·(1 - availability)`.
/// Empty input yields an empty ranking, not an error.
pub fn rank_bad_actors(asset_data: &[BadActorInput], top_n: usize) -> BadActorAnalysis {
    if asset_data.is_empty() {
        return BadActorAnalysis::default();
    }
    let (w_f, w_d, w_a) = BAD_ACTOR_WEIGHTS;

    let max_failures = asset_data
        .iter()
        .map(|d| d.failure_count)
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let max_downtime = asset_data
        .iter()
        .map(|d| d.total_downtime_hours)
        .fold(0.0, f64::max)
        .max(1.0);

    let mut entries: Vec<BadActorEntry> = asset_data
        .iter()
        .map(|d| {
            let norm_f = d.failure_count as f64 / max_failures;
            let norm_d = d.total_downtime_hours / max_downtime;
            let norm_a = 1.0 - d.availability;
            let score = w_f * norm_f + w_d * norm_d + w_a * norm_a;
            BadActorEntry {
                asset_id: d.asset_id,
                asset_name: d.asset_name.clone(),
                failure_count: d.failure_count,
                total_downtime_hours: d.total_downtime_hours,
                availability: d.availability,
                composite_score: round_to(score, 4),
            }
        })
        .collect();
    entries.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
    entries.truncate(top_n);
    BadActorAnalysis { entries }
}

/// Observed statistics for one failure mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureModeRecord {
    /// Failure mode name.
    pub name: String,
    /// Occurrences of this mode.
    pub count: usize,
    /// Mean downtime per occurrence, minutes.
    pub avg_downtime_minutes: f64,
    /// Detection rating 1-10; defaults to 5 (moderate) when absent.
    pub detection: Option<u32>,
}

/// RPN for a single failure mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpnEntry {
    /// Failure mode name.
    pub failure_mode: String,
    /// Severity rating 1-10, scaled from average downtime.
    pub severity: u32,
    /// Occurrence rating 1-10, scaled from relative frequency.
    pub occurrence: u32,
    /// Detection rating 1-10.
    pub detection: u32,
    /// `severity * occurrence * detection`.
    pub rpn: u32,
}

/// FMEA-style RPN ranking across failure modes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpnAnalysis {
    /// Entries sorted by RPN, descending.
    pub entries: Vec<RpnEntry>,
    /// Highest RPN across modes.
    pub max_rpn: u32,
}

/// Compute Risk Priority Numbers for each failure mode.
///
/// Occurrence scales the mode's share of `total_events` to 1-10; severity
/// scales its average downtime against the worst mode to 1-10; detection
/// defaults to 5 when no inspection-coverage data exists. An empty mode
/// list or a non-positive `total_events` yields an empty analysis.
pub fn compute_rpn(failure_mode_data: &[FailureModeRecord], total_events: usize) -> RpnAnalysis {
    if failure_mode_data.is_empty() || total_events == 0 {
        return RpnAnalysis::default();
    }

    let max_dt = failure_mode_data
        .iter()
        .map(|d| d.avg_downtime_minutes)
        .fold(0.0, f64::max)
        .max(1.0);

    let mut entries: Vec<RpnEntry> = failure_mode_data
        .iter()
        .map(|d| {
            let occ_frac = d.count as f64 / total_events as f64;
            let occurrence = ((occ_frac * 10.0).ceil() as u32).clamp(1, 10);

            let sev_frac = d.avg_downtime_minutes / max_dt;
            let severity = ((sev_frac * 10.0).ceil() as u32).clamp(1, 10);

            let detection = d.detection.unwrap_or(DEFAULT_DETECTION);
            RpnEntry {
                failure_mode: d.name.clone(),
                severity,
                occurrence,
                detection,
                rpn: severity * occurrence * detection,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.rpn.cmp(&a.rpn));
    let max_rpn = entries.first().map(|e| e.rpn).unwrap_or(0);
    RpnAnalysis { entries, max_rpn }
}
