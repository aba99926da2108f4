//! Reliability, maintenance, and business metric layers.
//!
//! Everything here is a pure function over aggregates and fitted Weibull
//! parameters, composed bottom-up:
//!
//! 1. **Core KPIs** ([`kpi`]): MTBF, MTTR, availability, failure rate, and
//!    the one-call [`aggregate_kpis`] over raw exposure/event history
//! 2. **Extended reliability** ([`reliability`]): B-life, MTTF, conditional
//!    reliability, repair-effectiveness trend, bad-actor ranking, RPN
//! 3. **Manufacturing** ([`manufacturing`]): OEE, performance rate,
//!    planned/unplanned downtime split, MTBM
//! 4. **Business impact** ([`business`]): cost of unreliability, PM
//!    optimization, spare-parts demand forecast, asset health index
//!
//! Failure semantics: these layers degrade gracefully to zero/neutral values
//! on insufficient data — a brand-new asset with one failure is an expected
//! steady state, not an error. Only B-life percentile validation errors
//! here; distribution fitting errors live in [`crate::weibull`].

pub mod business;
pub mod kpi;
pub mod manufacturing;
pub mod reliability;

pub use business::{
    compute_cour, compute_health_index, compute_pm_optimization, forecast_spare_demand,
    AssetHealthIndex, CourResult, FailurePattern, HealthComponents, HealthGrade,
    PartFailureRate, PmAssessment, PmOptimizationResult, SpareDemandResult, SparePartForecast,
};
pub use kpi::{
    aggregate_kpis, compute_availability, compute_failure_rate_simple, compute_mtbf,
    compute_mttr,
};
pub use manufacturing::{
    aggregate_manufacturing_kpis, compute_downtime_split, compute_mtbm, compute_oee,
    compute_performance_rate, DowntimeSplitResult, ManufacturingKpis, MtbmResult, OeeResult,
    PerformanceRateResult,
};
pub use reliability::{
    compute_b_life, compute_conditional_reliability, compute_failure_rate, compute_mttf,
    compute_repair_effectiveness, compute_rpn, rank_bad_actors, BadActorAnalysis, BadActorEntry,
    BadActorInput, BLifeResult, ConditionalReliabilityResult, FailureModeRecord,
    FailureRateResult, RepairEffectivenessResult, RpnAnalysis, RpnEntry,
};
