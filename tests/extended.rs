//! Tests for the extended metric layers: reliability, manufacturing, business.

use chrono::{DateTime, TimeZone, Utc};

use reliacore::analysis::{
    aggregate_kpis, aggregate_manufacturing_kpis, compute_availability, compute_b_life,
    compute_conditional_reliability, compute_cour, compute_downtime_split, compute_failure_rate,
    compute_health_index, compute_mttf, compute_oee, compute_pm_optimization,
    compute_repair_effectiveness, compute_rpn, forecast_spare_demand, rank_bad_actors,
    BadActorInput, FailureModeRecord, FailurePattern, PartFailureRate, PmAssessment,
};
use reliacore::{AnalyticsError, Event, EventType, ExposureLog};

fn hour(h: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::hours(h)
}

fn exposure(start_h: i64, hours: f64, cycles: f64) -> ExposureLog {
    ExposureLog {
        asset_id: 1,
        start_time: hour(start_h),
        end_time: hour(start_h + hours as i64),
        hours,
        cycles,
    }
}

fn event(at_h: i64, event_type: EventType, downtime: f64) -> Event {
    Event {
        asset_id: 1,
        timestamp: hour(at_h),
        event_type,
        downtime_minutes: downtime,
        description: None,
    }
}

#[test]
fn b_life_matches_the_weibull_quantile() {
    let b10 = compute_b_life(2.0, 1000.0, 10.0).unwrap();
    assert!(b10.life_hours > 0.0 && b10.life_hours < 1000.0);

    // B50 equals the Weibull median scale * (ln 2)^(1/shape)
    let b50 = compute_b_life(2.0, 1000.0, 50.0).unwrap();
    let median = 1000.0 * (2.0_f64.ln()).powf(1.0 / 2.0);
    assert!((b50.life_hours - median).abs() < 1e-2);

    assert!(matches!(
        compute_b_life(2.0, 1000.0, 150.0),
        Err(AnalyticsError::InvalidPercentile(_))
    ));
}

#[test]
fn mttf_uses_the_gamma_function() {
    // MTTF(2, 1000) = 1000 * Γ(1.5) ≈ 886.23
    assert!((compute_mttf(2.0, 1000.0) - 886.23).abs() < 1.0);
    // Exponential case: Γ(2) = 1, MTTF = scale
    assert!((compute_mttf(1.0, 500.0) - 500.0).abs() < 1e-6);
}

#[test]
fn availability_no_division_by_zero() {
    assert_eq!(compute_availability(0.0, 0.0), 0.0);
}

#[test]
fn failure_rate_with_weibull_hazard() {
    let result = compute_failure_rate(5, 1000.0, Some(2.0), Some(500.0), Some(400.0));
    assert!((result.average_rate - 0.005).abs() < 1e-9);
    // h(400) = (2/500) * (400/500)^1 = 0.0032
    assert!((result.instantaneous_rate - 0.0032).abs() < 1e-6);
}

#[test]
fn conditional_reliability_young_vs_old() {
    let young = compute_conditional_reliability(2.0, 1000.0, 100.0, 50.0);
    assert!(young.conditional_reliability > 0.9);
    let old = compute_conditional_reliability(2.0, 1000.0, 900.0, 200.0);
    assert!(old.conditional_reliability < 0.9);
}

#[test]
fn repair_effectiveness_trend() {
    let improving = compute_repair_effectiveness(&[50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
    assert!(improving.improving);
    assert!(improving.trend_ratio >= 1.0);

    let degrading = compute_repair_effectiveness(&[100.0, 90.0, 80.0, 70.0, 60.0, 50.0]);
    assert!(!degrading.improving);

    // Below four positive intervals the trend is a neutral default
    let sparse = compute_repair_effectiveness(&[100.0, 200.0]);
    assert_eq!(sparse.trend_ratio, 1.0);
    assert_eq!(sparse.intervals_count, 2);
}

#[test]
fn bad_actor_ranking_determinism() {
    let data = vec![
        BadActorInput {
            asset_id: 1,
            asset_name: "Pump A".into(),
            failure_count: 10,
            total_downtime_hours: 50.0,
            availability: 0.8,
        },
        BadActorInput {
            asset_id: 2,
            asset_name: "Pump B".into(),
            failure_count: 2,
            total_downtime_hours: 5.0,
            availability: 0.98,
        },
        BadActorInput {
            asset_id: 3,
            asset_name: "Compressor C".into(),
            failure_count: 7,
            total_downtime_hours: 30.0,
            availability: 0.85,
        },
    ];
    let ranking = rank_bad_actors(&data, 2);
    assert_eq!(ranking.entries.len(), 2);
    assert_eq!(ranking.entries[0].asset_id, 1);
    assert!(ranking.entries[0].composite_score >= ranking.entries[1].composite_score);

    assert!(rank_bad_actors(&[], 10).entries.is_empty());
}

#[test]
fn rpn_ordering_and_max() {
    let modes = vec![
        FailureModeRecord {
            name: "Bearing Wear".into(),
            count: 5,
            avg_downtime_minutes: 120.0,
            detection: None,
        },
        FailureModeRecord {
            name: "Seal Leak".into(),
            count: 2,
            avg_downtime_minutes: 30.0,
            detection: None,
        },
    ];
    let rpn = compute_rpn(&modes, 10);
    assert_eq!(rpn.entries.len(), 2);
    assert!(rpn.entries[0].rpn >= rpn.entries[1].rpn);
    assert_eq!(rpn.entries[0].failure_mode, "Bearing Wear");
    assert_eq!(rpn.max_rpn, rpn.entries[0].rpn);

    assert!(compute_rpn(&[], 0).entries.is_empty());
}

#[test]
fn oee_and_performance() {
    assert_eq!(compute_oee(1.0, 1.0, 1.0).oee, 1.0);
    let partial = compute_oee(0.9, 0.8, 0.95);
    assert!((partial.oee - 0.684).abs() < 1e-3);
}

#[test]
fn downtime_split_by_event_category() {
    let events = vec![
        event(10, EventType::Failure, 120.0),
        event(20, EventType::Maintenance, 60.0),
        event(30, EventType::Failure, 60.0),
        event(40, EventType::Inspection, 30.0),
    ];
    let split = compute_downtime_split(&events);
    assert_eq!(split.unplanned_count, 2);
    assert_eq!(split.planned_count, 2);
    assert!((split.unplanned_downtime_hours - 3.0).abs() < 1e-9);
    assert!((split.planned_downtime_hours - 1.5).abs() < 1e-9);
}

#[test]
fn manufacturing_aggregate_bundle() {
    let exposures = vec![exposure(0, 100.0, 500.0)];
    let events = vec![event(50, EventType::Failure, 120.0)];
    let bundle = aggregate_manufacturing_kpis(&exposures, &events, 0.9, None, 1.0);
    assert!(bundle.oee.oee > 0.0);
    assert!(bundle.mtbm.mtbm_hours > 0.0);
    assert_eq!(bundle.downtime_split.unplanned_count, 1);
}

#[test]
fn cour_costs() {
    let result = compute_cour(10.0, 5, 1000.0, 2000.0);
    assert_eq!(result.lost_production_cost, 10_000.0);
    assert_eq!(result.repair_cost, 10_000.0);
    assert_eq!(result.total_cost, 20_000.0);
}

#[test]
fn pm_optimization_patterns() {
    let wearout = compute_pm_optimization(2.5, 1000.0, None, 10.0);
    assert_eq!(wearout.failure_pattern, FailurePattern::Wearout);
    assert!(wearout.recommended_pm_hours > 0.0);

    let random = compute_pm_optimization(1.0, 1000.0, None, 10.0);
    assert_eq!(random.assessment, PmAssessment::PmNotRecommended);
}

#[test]
fn spare_demand_forecast() {
    let parts = vec![
        PartFailureRate {
            part_name: "Bearing".into(),
            failure_rate_per_hour: 0.001,
        },
        PartFailureRate {
            part_name: "Seal".into(),
            failure_rate_per_hour: 0.0005,
        },
    ];
    let result = forecast_spare_demand(&parts, 8_760.0);
    assert_eq!(result.forecasts.len(), 2);
    let bearing = result
        .forecasts
        .iter()
        .find(|f| f.part_name == "Bearing")
        .unwrap();
    assert!((bearing.expected_failures - 8.76).abs() < 0.01);
    assert!(result.total_expected_failures > 0.0);
}

#[test]
fn health_index_bands() {
    let healthy = compute_health_index(0.97, 500.0, None, 0.1, Some(1.3), Some(0.85), 1.0);
    assert!(healthy.score >= 70.0);

    let unhealthy = compute_health_index(0.5, 50.0, None, 0.9, Some(3.5), Some(0.3), 2.0);
    assert!(unhealthy.score < 55.0);
    assert!(unhealthy.score < healthy.score);
}

/// The aggregate KPI record carries the extended fields downstream layers need.
#[test]
fn aggregate_kpis_extended_fields() {
    let exposures = vec![exposure(0, 50.0, 0.0), exposure(50, 50.0, 0.0)];
    let events = vec![event(50, EventType::Failure, 120.0)];

    let kpis = aggregate_kpis(&exposures, &events);
    assert!((kpis.failure_rate - 0.01).abs() < 1e-9);
    assert!((kpis.total_exposure_hours - 100.0).abs() < 1e-9);
    assert_eq!(kpis.failure_count, 1);
    assert_eq!(kpis.total_events, 1);

    // Downstream composition: KPIs -> downtime split -> health index
    let split = compute_downtime_split(&events);
    let health = compute_health_index(
        kpis.availability,
        kpis.mtbf_hours,
        None,
        split.unplanned_ratio,
        None,
        None,
        1.0,
    );
    assert!(health.score > 0.0);
}
