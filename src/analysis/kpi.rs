//! Core reliability KPIs: MTBF, MTTR, availability, failure rate.

use crate::intervals::derive_time_between_failures;
use crate::result::FleetKpi;
use crate::statistics::round_to;
use crate::types::{Event, ExposureLog};

/// Mean time between failures from already-derived TBF intervals.
///
/// Averages all intervals as-is, including the final censored one — this
/// simple estimator intentionally applies no censored-data correction (use
/// [`compute_mttf`](crate::analysis::compute_mttf) on a fitted Weibull for
/// the corrected mean life). Empty input yields 0.
pub fn compute_mtbf(time_between_failures: &[f64]) -> f64 {
    if time_between_failures.is_empty() {
        return 0.0;
    }
    time_between_failures.iter().sum::<f64>() / time_between_failures.len() as f64
}

/// Mean time to repair from downtime durations in minutes.
///
/// Returns the mean in the input unit (minutes); [`aggregate_kpis`] converts
/// to hours. Empty input yields 0.
pub fn compute_mttr(downtime_minutes: &[f64]) -> f64 {
    if downtime_minutes.is_empty() {
        return 0.0;
    }
    downtime_minutes.iter().sum::<f64>() / downtime_minutes.len() as f64
}

/// Availability as `MTBF / (MTBF + MTTR)`, with both in the same unit.
///
/// Defined as 0 when the denominator is ≤ 0 — no division by zero for an
/// asset with no history.
pub fn compute_availability(mtbf_hours: f64, mttr_hours: f64) -> f64 {
    let denominator = mtbf_hours + mttr_hours;
    if denominator <= 0.0 {
        return 0.0;
    }
    mtbf_hours / denominator
}

/// Average failure rate λ = failures / total operating hours, 0 when no
/// hours are logged.
pub fn compute_failure_rate_simple(failures: usize, total_hours: f64) -> f64 {
    if total_hours > 0.0 {
        failures as f64 / total_hours
    } else {
        0.0
    }
}

/// Compute aggregate reliability KPIs from raw exposure and event history.
///
/// - MTBF uses TBF intervals derived from the exposure logs.
/// - MTTR uses `downtime_minutes` on failure events, converted to hours.
/// - Failure rate, total exposure hours, and event counts are included for
///   downstream composites.
///
/// The result is computed fresh on every call; the engine caches nothing.
pub fn aggregate_kpis(exposures: &[ExposureLog], events: &[Event]) -> FleetKpi {
    let failure_events: Vec<Event> = events.iter().filter(|e| e.is_failure()).cloned().collect();
    let tbf = derive_time_between_failures(exposures, &failure_events);

    let mtbf_hours = compute_mtbf(&tbf.intervals_hours);
    let mttr_hours = if failure_events.is_empty() {
        0.0
    } else {
        let downtimes: Vec<f64> = failure_events.iter().map(|e| e.downtime_minutes).collect();
        compute_mttr(&downtimes) / 60.0
    };
    let availability = compute_availability(mtbf_hours, mttr_hours);

    let total_hours: f64 = exposures.iter().map(|e| e.effective_hours()).sum();
    let failure_rate = compute_failure_rate_simple(failure_events.len(), total_hours);

    FleetKpi {
        mtbf_hours: round_to(mtbf_hours, 2),
        mttr_hours: round_to(mttr_hours, 2),
        availability: round_to(availability, 4),
        intervals_hours: tbf.intervals_hours,
        censored_flags: tbf.censored_flags,
        failure_rate: round_to(failure_rate, 6),
        total_exposure_hours: round_to(total_hours, 2),
        failure_count: failure_events.len(),
        total_events: events.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;
    use chrono::{TimeZone, Utc};

    #[test]
    fn mtbf_and_mttr_average_their_inputs() {
        assert!((compute_mtbf(&[10.0, 20.0, 30.0]) - 20.0).abs() < 1e-12);
        assert_eq!(compute_mtbf(&[]), 0.0);
        assert!((compute_mttr(&[30.0, 90.0]) - 60.0).abs() < 1e-12);
        assert_eq!(compute_mttr(&[]), 0.0);
    }

    #[test]
    fn availability_boundary() {
        assert_eq!(compute_availability(0.0, 0.0), 0.0);
        assert!((compute_availability(99.0, 1.0) - 0.99).abs() < 1e-12);
    }

    #[test]
    fn failure_rate_guards_zero_hours() {
        assert_eq!(compute_failure_rate_simple(3, 0.0), 0.0);
        assert!((compute_failure_rate_simple(5, 1000.0) - 0.005).abs() < 1e-12);
    }

    #[test]
    fn aggregate_kpis_end_to_end() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let exposures = vec![
            ExposureLog {
                asset_id: 1,
                start_time: start,
                end_time: start + chrono::Duration::hours(50),
                hours: 50.0,
                cycles: 0.0,
            },
            ExposureLog {
                asset_id: 1,
                start_time: start + chrono::Duration::hours(50),
                end_time: start + chrono::Duration::hours(100),
                hours: 50.0,
                cycles: 0.0,
            },
        ];
        let events = vec![Event {
            asset_id: 1,
            timestamp: start + chrono::Duration::hours(50),
            event_type: EventType::Failure,
            downtime_minutes: 120.0,
            description: None,
        }];

        let kpis = aggregate_kpis(&exposures, &events);
        assert_eq!(kpis.failure_count, 1);
        assert_eq!(kpis.total_events, 1);
        assert!((kpis.total_exposure_hours - 100.0).abs() < 1e-9);
        assert!((kpis.failure_rate - 0.01).abs() < 1e-9);
        assert!((kpis.mttr_hours - 2.0).abs() < 1e-9);
        // Intervals: 50h to the failure, then a censored 50h tail
        assert_eq!(kpis.intervals_hours.len(), 2);
        assert_eq!(kpis.censored_flags, vec![false, true]);
        assert!((kpis.mtbf_hours - 50.0).abs() < 1e-9);
        assert!(kpis.availability > 0.9);
    }

    #[test]
    fn aggregate_kpis_with_no_history_is_all_zero() {
        let kpis = aggregate_kpis(&[], &[]);
        assert_eq!(kpis.mtbf_hours, 0.0);
        assert_eq!(kpis.availability, 0.0);
        assert!(kpis.intervals_hours.is_empty());
    }
}
