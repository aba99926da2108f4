//! Manufacturing performance metrics — OEE and related KPIs.
//!
//! Bridges reliability data to manufacturing performance: OEE, performance
//! rate, planned/unplanned downtime split, and MTBM.

use serde::{Deserialize, Serialize};

use crate::statistics::round_to;
use crate::types::{Event, ExposureLog};

/// OEE = Availability × Performance × Quality, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeResult {
    /// Availability factor.
    pub availability: f64,
    /// Performance factor.
    pub performance: f64,
    /// Quality factor.
    pub quality: f64,
    /// Overall equipment effectiveness.
    pub oee: f64,
}

/// Overall Equipment Effectiveness.
///
/// Availability comes from the reliability KPIs (`MTBF / (MTBF + MTTR)`);
/// performance and quality default to 1.0 when no throughput or rejection
/// data exists yet.
pub fn compute_oee(availability: f64, performance: f64, quality: f64) -> OeeResult {
    let oee = availability * performance * quality;
    OeeResult {
        availability: round_to(availability, 4),
        performance: round_to(performance, 4),
        quality: round_to(quality, 4),
        oee: round_to(oee, 4),
    }
}

/// Actual vs. design capacity utilisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRateResult {
    /// Cycles per operating hour actually achieved.
    pub actual_throughput: f64,
    /// Expected cycles per hour at full rate.
    pub design_throughput: f64,
    /// `actual / design`, capped at 1.0.
    pub performance_rate: f64,
    /// Total production cycles across the exposures.
    pub total_cycles: f64,
    /// Total operating hours across the exposures.
    pub total_operating_hours: f64,
}

/// Derive the performance rate from exposure logs.
///
/// When `design_cycles_per_hour` is not provided it is estimated from the
/// single best-performing exposure record (max observed cycles/hour).
pub fn compute_performance_rate(
    exposures: &[ExposureLog],
    design_cycles_per_hour: Option<f64>,
) -> PerformanceRateResult {
    let total_cycles: f64 = exposures.iter().filter(|e| e.cycles > 0.0).map(|e| e.cycles).sum();
    let total_hours: f64 = exposures.iter().map(|e| e.effective_hours()).sum();

    let actual_throughput = if total_hours > 0.0 {
        total_cycles / total_hours
    } else {
        0.0
    };

    let design = design_cycles_per_hour.unwrap_or_else(|| {
        let best = exposures
            .iter()
            .filter(|e| e.cycles > 0.0 && e.effective_hours() > 0.0)
            .map(|e| e.cycles / e.effective_hours())
            .fold(0.0, f64::max);
        if best > 0.0 {
            best
        } else if actual_throughput > 0.0 {
            actual_throughput
        } else {
            1.0
        }
    });

    let perf_rate = if design > 0.0 {
        actual_throughput / design
    } else {
        0.0
    };

    PerformanceRateResult {
        actual_throughput: round_to(actual_throughput, 4),
        design_throughput: round_to(design, 4),
        performance_rate: round_to(perf_rate.min(1.0), 4),
        total_cycles,
        total_operating_hours: round_to(total_hours, 2),
    }
}

/// Breakdown of downtime into planned and unplanned categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DowntimeSplitResult {
    /// Maintenance/inspection downtime, hours.
    pub planned_downtime_hours: f64,
    /// Failure downtime, hours.
    pub unplanned_downtime_hours: f64,
    /// Sum of both, hours.
    pub total_downtime_hours: f64,
    /// Fraction of downtime that was unplanned.
    pub unplanned_ratio: f64,
    /// Planned event count.
    pub planned_count: usize,
    /// Unplanned event count.
    pub unplanned_count: usize,
}

/// Split total downtime into planned (maintenance/inspection) vs unplanned
/// (failure).
pub fn compute_downtime_split(events: &[Event]) -> DowntimeSplitResult {
    let mut planned_mins = 0.0;
    let mut unplanned_mins = 0.0;
    let mut planned_count = 0;
    let mut unplanned_count = 0;

    for event in events {
        if event.is_failure() {
            unplanned_mins += event.downtime_minutes;
            unplanned_count += 1;
        } else {
            planned_mins += event.downtime_minutes;
            planned_count += 1;
        }
    }

    let planned_hrs = planned_mins / 60.0;
    let unplanned_hrs = unplanned_mins / 60.0;
    let total = planned_hrs + unplanned_hrs;
    let ratio = if total > 0.0 { unplanned_hrs / total } else { 0.0 };

    DowntimeSplitResult {
        planned_downtime_hours: round_to(planned_hrs, 2),
        unplanned_downtime_hours: round_to(unplanned_hrs, 2),
        total_downtime_hours: round_to(total, 2),
        unplanned_ratio: round_to(ratio, 4),
        planned_count,
        unplanned_count,
    }
}

/// Mean time between maintenance — all downtime-bearing event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MtbmResult {
    /// Operating hours per maintenance-related event.
    pub mtbm_hours: f64,
    /// Events that took the equipment out of service.
    pub maintenance_events: usize,
    /// Operating hours behind the mean.
    pub total_operating_hours: f64,
}

/// MTBM = total operating hours / number of downtime-bearing events.
///
/// Counts failures, scheduled maintenance, and inspections alike — anything
/// that took the equipment out of service. With no such event, MTBM equals
/// the total operating hours.
pub fn compute_mtbm(exposures: &[ExposureLog], events: &[Event]) -> MtbmResult {
    let total_hours: f64 = exposures.iter().map(|e| e.effective_hours()).sum();
    let count = events.iter().filter(|e| e.downtime_minutes > 0.0).count();
    let mtbm = if count > 0 {
        total_hours / count as f64
    } else {
        total_hours
    };
    MtbmResult {
        mtbm_hours: round_to(mtbm, 2),
        maintenance_events: count,
        total_operating_hours: round_to(total_hours, 2),
    }
}

/// Consolidated manufacturing metrics for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingKpis {
    /// Overall equipment effectiveness.
    pub oee: OeeResult,
    /// Capacity utilisation.
    pub performance: PerformanceRateResult,
    /// Planned/unplanned downtime breakdown.
    pub downtime_split: DowntimeSplitResult,
    /// Mean time between maintenance.
    pub mtbm: MtbmResult,
}

/// One-call computation of all manufacturing metrics for an asset.
///
/// `availability` is the reliability-based value from
/// [`aggregate_kpis`](crate::analysis::aggregate_kpis);
/// `design_cycles_per_hour = None` auto-estimates nominal throughput;
/// `quality_rate` is the fraction of output meeting spec (1.0 when unknown).
pub fn aggregate_manufacturing_kpis(
    exposures: &[ExposureLog],
    events: &[Event],
    availability: f64,
    design_cycles_per_hour: Option<f64>,
    quality_rate: f64,
) -> ManufacturingKpis {
    let performance = compute_performance_rate(exposures, design_cycles_per_hour);
    let oee = compute_oee(availability, performance.performance_rate, quality_rate);
    let downtime_split = compute_downtime_split(events);
    let mtbm = compute_mtbm(exposures, events);
    ManufacturingKpis {
        oee,
        performance,
        downtime_split,
        mtbm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;
    use chrono::{TimeZone, Utc};

    fn exposure(start_h: i64, hours: f64, cycles: f64) -> ExposureLog {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ExposureLog {
            asset_id: 1,
            start_time: base + chrono::Duration::hours(start_h),
            end_time: base + chrono::Duration::hours(start_h + hours as i64),
            hours,
            cycles,
        }
    }

    fn event(day: u32, event_type: EventType, downtime: f64) -> Event {
        Event {
            asset_id: 1,
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            event_type,
            downtime_minutes: downtime,
            description: None,
        }
    }

    #[test]
    fn perfect_and_partial_oee() {
        assert_eq!(compute_oee(1.0, 1.0, 1.0).oee, 1.0);
        let partial = compute_oee(0.9, 0.8, 0.95);
        assert!((partial.oee - 0.684).abs() < 1e-3);
    }

    #[test]
    fn performance_rate_from_cycles() {
        let exposures = vec![exposure(0, 10.0, 80.0), exposure(10, 10.0, 70.0)];
        let result = compute_performance_rate(&exposures, None);
        assert_eq!(result.total_cycles, 150.0);
        assert_eq!(result.total_operating_hours, 20.0);
        assert!((result.actual_throughput - 7.5).abs() < 1e-9);
        // Design estimated from the best shift (8 cycles/hour)
        assert!((result.design_throughput - 8.0).abs() < 1e-9);
    }

    #[test]
    fn performance_rate_with_explicit_design() {
        let exposures = vec![exposure(0, 10.0, 80.0)];
        let result = compute_performance_rate(&exposures, Some(10.0));
        assert!((result.performance_rate - 0.8).abs() < 1e-9);
    }

    #[test]
    fn performance_rate_empty_exposures() {
        let result = compute_performance_rate(&[], None);
        assert_eq!(result.actual_throughput, 0.0);
        assert_eq!(result.performance_rate, 0.0);
    }

    #[test]
    fn downtime_split_by_event_type() {
        let events = vec![
            event(1, EventType::Failure, 120.0),
            event(2, EventType::Maintenance, 60.0),
            event(3, EventType::Failure, 60.0),
            event(4, EventType::Inspection, 30.0),
        ];
        let result = compute_downtime_split(&events);
        assert_eq!(result.unplanned_count, 2);
        assert_eq!(result.planned_count, 2);
        assert!((result.unplanned_downtime_hours - 3.0).abs() < 1e-9);
        assert!((result.planned_downtime_hours - 1.5).abs() < 1e-9);
        assert!(result.unplanned_ratio > 0.0 && result.unplanned_ratio < 1.0);
    }

    #[test]
    fn mtbm_counts_downtime_bearing_events() {
        let exposures = vec![exposure(0, 100.0, 0.0)];
        let events = vec![
            event(2, EventType::Failure, 60.0),
            event(3, EventType::Maintenance, 30.0),
        ];
        let result = compute_mtbm(&exposures, &events);
        assert!((result.mtbm_hours - 50.0).abs() < 1e-9);
        assert_eq!(result.maintenance_events, 2);

        // No downtime-bearing events: MTBM equals total hours
        let quiet = compute_mtbm(&exposures, &[]);
        assert!((quiet.mtbm_hours - 100.0).abs() < 1e-9);
    }

    #[test]
    fn manufacturing_aggregate() {
        let exposures = vec![exposure(0, 100.0, 500.0)];
        let events = vec![event(3, EventType::Failure, 120.0)];
        let result = aggregate_manufacturing_kpis(&exposures, &events, 0.9, None, 1.0);
        assert!(result.oee.oee > 0.0);
        assert!(result.mtbm.mtbm_hours > 0.0);
        assert_eq!(result.downtime_split.unplanned_count, 1);
    }
}
