//! Business impact and decision-support metrics.
//!
//! Connects reliability and manufacturing data to financial and operational
//! decisions: cost of unreliability, PM schedule assessment, spare-parts
//! demand forecasting, and a composite asset health index.

use serde::{Deserialize, Serialize};

use crate::statistics::{poisson_quantile, round_to};

/// Estimated financial impact of unplanned downtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourResult {
    /// Lost production plus repair cost, in the caller's currency.
    pub total_cost: f64,
    /// Downtime × hourly production value.
    pub lost_production_cost: f64,
    /// Failure count × average repair cost.
    pub repair_cost: f64,
    /// Unplanned downtime behind the estimate, hours.
    pub unplanned_downtime_hours: f64,
    /// Failures behind the estimate.
    pub failure_count: usize,
    /// Total cost per failure, 0 when there were none.
    pub cost_per_failure: f64,
}

/// Default hourly production value for mid-range industrial equipment.
pub const DEFAULT_HOURLY_PRODUCTION_VALUE: f64 = 500.0;
/// Default average repair cost for mid-range industrial equipment.
pub const DEFAULT_AVG_REPAIR_COST: f64 = 1_500.0;

/// Cost Of Unreliability:
/// `(unplanned downtime × hourly production loss) + (failures × repair cost)`.
///
/// The defaults represent typical mid-range industrial equipment; configure
/// them per-asset or per-plant.
pub fn compute_cour(
    unplanned_downtime_hours: f64,
    failure_count: usize,
    hourly_production_value: f64,
    avg_repair_cost: f64,
) -> CourResult {
    let lost_production = unplanned_downtime_hours * hourly_production_value;
    let repair = failure_count as f64 * avg_repair_cost;
    let total = lost_production + repair;
    let cost_per_failure = if failure_count > 0 {
        total / failure_count as f64
    } else {
        0.0
    };
    CourResult {
        total_cost: round_to(total, 2),
        lost_production_cost: round_to(lost_production, 2),
        repair_cost: round_to(repair, 2),
        unplanned_downtime_hours: round_to(unplanned_downtime_hours, 2),
        failure_count,
        cost_per_failure: round_to(cost_per_failure, 2),
    }
}

/// Failure pattern classified from the Weibull shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePattern {
    /// β < 0.95 — early-life failures dominate.
    InfantMortality,
    /// β ≈ 1 — failures arrive at a constant rate.
    Random,
    /// β > 1.05 — age-driven wear-out.
    Wearout,
}

/// Assessment of the current PM schedule against the recommended interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PmAssessment {
    /// PM interval is much shorter than the recommended B-life.
    OverMaintaining,
    /// PM interval is within ±20% of the recommendation.
    Appropriate,
    /// PM interval is much longer than the recommended B-life.
    UnderMaintaining,
    /// Time-based PM adds little value for this failure pattern.
    PmNotRecommended,
    /// No current PM interval supplied.
    NoPmData,
}

/// Whether the current PM frequency is appropriate given failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmOptimizationResult {
    /// Fitted Weibull shape behind the assessment.
    pub weibull_shape: f64,
    /// Pattern classification of the shape.
    pub failure_pattern: FailurePattern,
    /// Recommended PM interval (Bx life at the target percentile), hours.
    pub recommended_pm_hours: f64,
    /// Current PM interval, hours, when known.
    pub current_pm_hours: Option<f64>,
    /// `current / recommended`, when both are known.
    pub pm_ratio: Option<f64>,
    /// Schedule assessment.
    pub assessment: PmAssessment,
}

/// Evaluate PM scheduling effectiveness from Weibull parameters.
///
/// Interpretation of the shape: β < 1 infant mortality (PM may be
/// counter-productive), β ≈ 1 random failures (condition monitoring
/// preferred), β > 1 wear-out (PM is beneficial; schedule from B-life).
/// The ratio bands are `< 0.8` over-maintaining, `0.8..=1.2` appropriate,
/// `> 1.2` under-maintaining.
pub fn compute_pm_optimization(
    shape: f64,
    scale: f64,
    current_pm_interval_hours: Option<f64>,
    target_percentile: f64,
) -> PmOptimizationResult {
    let pattern = if shape < 0.95 {
        FailurePattern::InfantMortality
    } else if shape <= 1.05 {
        FailurePattern::Random
    } else {
        FailurePattern::Wearout
    };

    let p = target_percentile / 100.0;
    let recommended = scale * (-(1.0 - p).ln()).powf(1.0 / shape);

    let pm_ratio = match current_pm_interval_hours {
        Some(current) if current > 0.0 && recommended > 0.0 => Some(current / recommended),
        _ => None,
    };

    let assessment = match pattern {
        FailurePattern::InfantMortality | FailurePattern::Random => PmAssessment::PmNotRecommended,
        FailurePattern::Wearout => match pm_ratio {
            None => PmAssessment::NoPmData,
            Some(ratio) if ratio < 0.8 => PmAssessment::OverMaintaining,
            Some(ratio) if ratio <= 1.2 => PmAssessment::Appropriate,
            Some(_) => PmAssessment::UnderMaintaining,
        },
    };

    PmOptimizationResult {
        weibull_shape: round_to(shape, 4),
        failure_pattern: pattern,
        recommended_pm_hours: round_to(recommended, 2),
        current_pm_hours: current_pm_interval_hours,
        pm_ratio: pm_ratio.map(|r| round_to(r, 4)),
        assessment,
    }
}

/// Historical failure rate for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartFailureRate {
    /// Part name.
    pub part_name: String,
    /// Failures per operating hour (λ).
    pub failure_rate_per_hour: f64,
}

/// Predicted part consumption over the planning horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparePartForecast {
    /// Part name.
    pub part_name: String,
    /// Poisson mean `λ × horizon`.
    pub expected_failures: f64,
    /// 5th percentile of demand.
    pub lower_bound: f64,
    /// 95th percentile of demand.
    pub upper_bound: f64,
}

/// Fleet-level spare parts demand forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpareDemandResult {
    /// Planning window, hours.
    pub horizon_hours: f64,
    /// Per-part forecasts.
    pub forecasts: Vec<SparePartForecast>,
    /// Sum of expected failures across parts.
    pub total_expected_failures: f64,
}

/// Forecast spare part demand from historical failure rates under a Poisson
/// arrival assumption. Default horizon for callers is one year (8,760 h).
pub fn forecast_spare_demand(
    part_failure_data: &[PartFailureRate],
    horizon_hours: f64,
) -> SpareDemandResult {
    let mut forecasts = Vec::with_capacity(part_failure_data.len());
    let mut total_expected = 0.0;

    for part in part_failure_data {
        let lambda = part.failure_rate_per_hour * horizon_hours;
        let (lower, upper) = if lambda > 0.0 {
            (
                poisson_quantile(0.05, lambda),
                poisson_quantile(0.95, lambda),
            )
        } else {
            (0.0, 0.0)
        };
        forecasts.push(SparePartForecast {
            part_name: part.part_name.clone(),
            expected_failures: round_to(lambda, 2),
            lower_bound: lower,
            upper_bound: upper,
        });
        total_expected += lambda;
    }

    SpareDemandResult {
        horizon_hours,
        forecasts,
        total_expected_failures: round_to(total_expected, 2),
    }
}

/// Letter grade for an asset health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthGrade {
    /// Score ≥ 85.
    A,
    /// Score ≥ 70.
    B,
    /// Score ≥ 55.
    C,
    /// Score ≥ 40.
    D,
    /// Score < 40.
    F,
}

impl HealthGrade {
    /// Grade band for a 0-100 score.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            HealthGrade::A
        } else if score >= 70.0 {
            HealthGrade::B
        } else if score >= 55.0 {
            HealthGrade::C
        } else if score >= 40.0 {
            HealthGrade::D
        } else {
            HealthGrade::F
        }
    }
}

/// Individual sub-scores feeding the health index, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthComponents {
    /// Availability × 100.
    pub availability: f64,
    /// MTBF against its target, capped at 100.
    pub mtbf_performance: f64,
    /// `(1 - unplanned_ratio) × 100`.
    pub downtime_quality: f64,
    /// Penalty for aggressive wear-out shapes.
    pub wearout_margin: f64,
    /// OEE × 100, neutral 75 when unknown.
    pub oee: f64,
    /// Repair-trend sub-score.
    pub repair_trend: f64,
}

/// Composite 0-100 health score for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetHealthIndex {
    /// 0 (worst) to 100 (best).
    pub score: f64,
    /// Letter grade band.
    pub grade: HealthGrade,
    /// Sub-scores behind the composite.
    pub components: HealthComponents,
}

/// Compute a composite Asset Health Index (0-100).
///
/// Weighted sub-scores: availability 0.30, MTBF performance 0.25, downtime
/// quality 0.15, wear-out margin 0.15, OEE 0.10, repair trend 0.05.
/// `mtbf_target_hours = None` uses `mtbf × 1.2` as the target.
#[allow(clippy::too_many_arguments)]
pub fn compute_health_index(
    availability: f64,
    mtbf_hours: f64,
    mtbf_target_hours: Option<f64>,
    unplanned_ratio: f64,
    weibull_shape: Option<f64>,
    oee: Option<f64>,
    repair_trend_ratio: f64,
) -> AssetHealthIndex {
    let target = match mtbf_target_hours {
        Some(t) => t,
        None if mtbf_hours > 0.0 => mtbf_hours * 1.2,
        None => 1.0,
    };

    let avail_score = availability.min(1.0) * 100.0;

    let mtbf_ratio = if target > 0.0 { mtbf_hours / target } else { 0.0 };
    let mtbf_score = mtbf_ratio.min(1.0) * 100.0;

    let dt_quality_score = (1.0 - unplanned_ratio.min(1.0)) * 100.0;

    // β near 1 is neutral; β >> 1 means aggressive wear
    let wearout_score = match weibull_shape {
        Some(shape) if shape > 0.0 => {
            if shape < 1.0 {
                70.0 // infant mortality: concerning, but a different problem
            } else if shape <= 1.5 {
                90.0
            } else if shape <= 2.5 {
                70.0
            } else {
                50.0
            }
        }
        _ => 75.0, // unknown: neutral
    };

    let oee_score = match oee {
        Some(value) => value.min(1.0) * 100.0,
        None => 75.0,
    };

    let repair_score = if repair_trend_ratio >= 1.0 {
        (100.0 - (repair_trend_ratio - 1.0) * 50.0).max(0.0)
    } else {
        100.0
    };

    let components = HealthComponents {
        availability: round_to(avail_score, 1),
        mtbf_performance: round_to(mtbf_score, 1),
        downtime_quality: round_to(dt_quality_score, 1),
        wearout_margin: round_to(wearout_score, 1),
        oee: round_to(oee_score, 1),
        repair_trend: round_to(repair_score, 1),
    };

    let score = components.availability * 0.30
        + components.mtbf_performance * 0.25
        + components.downtime_quality * 0.15
        + components.wearout_margin * 0.15
        + components.oee * 0.10
        + components.repair_trend * 0.05;
    let score = round_to(score.clamp(0.0, 100.0), 1);

    AssetHealthIndex {
        score,
        grade: HealthGrade::from_score(score),
        components,
    }
}
