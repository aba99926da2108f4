//! Censored time-between-failure interval derivation.
//!
//! Converts exposure logs and failure timestamps into TBF durations. The
//! intervals quantify *operating-time* between failures, not wall-clock
//! time: each interval is the sum of exposure hours prorated by how much of
//! each log's window overlaps the failure-to-failure span. A failure falling
//! inside an exposure gap therefore yields a short or zero interval — that
//! is deliberate, gap time is not uptime.
//!
//! When the last exposure outlives the last failure, the trailing span is
//! appended as one right-censored interval: the asset had not failed again
//! by the end of observation, so the value is a lower bound.

use chrono::{DateTime, Utc};

use crate::result::TbfResult;
use crate::types::{Event, ExposureLog};

/// Uptime hours contributed by one log to the window `[start, end]`.
///
/// Prorates the log's `hours` by the overlap fraction; falls back to
/// wall-clock proration when `hours` is unset.
fn overlap_hours(log: &ExposureLog, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let window_start = log.start_time.max(start);
    let window_end = log.end_time.min(end);
    if window_end <= window_start {
        return 0.0;
    }
    let total_seconds = log.wall_seconds();
    if total_seconds <= 0.0 {
        return 0.0;
    }
    let overlap_seconds = (window_end - window_start).num_milliseconds() as f64 / 1_000.0;
    let proportion = overlap_seconds / total_seconds;
    let base_hours = if log.hours > 0.0 {
        log.hours
    } else {
        total_seconds / 3_600.0
    };
    base_hours * proportion
}

/// Total uptime hours across all logs overlapping `[start, end]`.
fn uptime_between(exposures: &[&ExposureLog], start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    exposures
        .iter()
        .map(|log| overlap_hours(log, start, end))
        .sum()
}

/// Derive time-between-failure intervals from exposure logs and failure events.
///
/// Both inputs are sorted defensively. Non-failure events should be filtered
/// out by the caller — [`aggregate_kpis`](crate::analysis::aggregate_kpis)
/// does this. Either collection being empty yields an empty result, not an
/// error: a brand-new asset with no history is an expected steady state.
pub fn derive_time_between_failures(
    exposures: &[ExposureLog],
    failure_events: &[Event],
) -> TbfResult {
    let mut exposures_sorted: Vec<&ExposureLog> = exposures.iter().collect();
    exposures_sorted.sort_by_key(|log| log.start_time);
    let mut failures_sorted: Vec<&Event> = failure_events.iter().collect();
    failures_sorted.sort_by_key(|event| event.timestamp);

    if exposures_sorted.is_empty() || failures_sorted.is_empty() {
        return TbfResult::default();
    }

    let mut intervals = Vec::with_capacity(failures_sorted.len() + 1);
    let mut censored = Vec::with_capacity(failures_sorted.len() + 1);

    let mut previous_time = exposures_sorted[0].start_time;

    for failure in &failures_sorted {
        let interval_hours = uptime_between(&exposures_sorted, previous_time, failure.timestamp);
        intervals.push(interval_hours);
        censored.push(false);
        previous_time = failure.timestamp;
    }

    let last_exposure_end = exposures_sorted[exposures_sorted.len() - 1].end_time;
    if last_exposure_end > previous_time {
        let censored_interval = uptime_between(&exposures_sorted, previous_time, last_exposure_end);
        intervals.push(censored_interval);
        censored.push(true);
    }

    TbfResult {
        intervals_hours: intervals,
        censored_flags: censored,
    }
}
