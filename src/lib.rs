//! # reliacore
//!
//! Reliability analytics for physical assets.
//!
//! This crate is the numerical core behind an asset-reliability application:
//! given logged operating exposure and discrete event history it derives
//! censored time-between-failure intervals, fits 2-parameter Weibull life
//! distributions under right-censoring via maximum likelihood, computes
//! bootstrap confidence intervals, and rolls everything up into reliability,
//! maintenance, manufacturing, and business KPIs:
//!
//! - MTBF / MTTR / availability / failure rate ([`analysis::aggregate_kpis`])
//! - Weibull shape/scale with confidence intervals ([`weibull`],
//!   [`statistics::bootstrap_weibull_ci`])
//! - B-life, MTTF, conditional reliability, repair-effectiveness trend,
//!   bad-actor ranking, RPN ([`analysis::reliability`])
//! - OEE, downtime split, MTBM ([`analysis::manufacturing`])
//! - Cost of unreliability, PM assessment, spare-demand forecast, health
//!   index ([`analysis::business`])
//!
//! The engine is purely synchronous and stateless: every function is a pure
//! transformation over immutable inputs, no I/O occurs inside the core, and
//! concurrent invocations on independent inputs are trivially safe. The
//! bootstrap is the dominant cost center and parallelizes across replicates
//! under the default-on `parallel` feature.
//!
//! ## Quick start
//!
//! ```
//! use reliacore::{derive_time_between_failures, ReliabilityAnalyzer};
//! # use reliacore::{Event, EventType, ExposureLog};
//! # use chrono::{TimeZone, Utc};
//!
//! # let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! # let exposures = vec![ExposureLog {
//! #     asset_id: 1, start_time: t0, end_time: t0 + chrono::Duration::hours(100),
//! #     hours: 100.0, cycles: 0.0,
//! # }];
//! # let events = vec![Event {
//! #     asset_id: 1, timestamp: t0 + chrono::Duration::hours(60),
//! #     event_type: EventType::Failure, downtime_minutes: 90.0, description: None,
//! # }];
//! let analyzer = ReliabilityAnalyzer::quick().seed(1);
//! let kpis = analyzer.kpis(&exposures, &events);
//! assert!(kpis.mtbf_hours > 0.0);
//!
//! let failures: Vec<_> = events.iter().filter(|e| e.is_failure()).cloned().collect();
//! let tbf = derive_time_between_failures(&exposures, &failures);
//! assert_eq!(tbf.censored_flags.last(), Some(&true));
//! ```
//!
//! ## Failure semantics
//!
//! KPI functions degrade gracefully to zero/neutral values on insufficient
//! data — a new asset with one failure must not crash a dashboard. The
//! Weibull fit and bootstrap are the deliberate exception: they fail loudly
//! ([`AnalyticsError`]) on empty input, length mismatches, or optimizer
//! non-convergence, because a silently wrong distribution fit is far more
//! dangerous than a zero KPI. Callers should present "not enough data" and
//! "fit failed" as distinct states, never conflated.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod analyzer;
mod config;
mod constants;
mod error;
mod intervals;
mod result;
mod thread_pool;
mod types;

// Functional modules
pub mod analysis;
pub mod statistics;
pub mod weibull;

// Re-exports for the public API
pub use analysis::aggregate_kpis;
pub use analyzer::ReliabilityAnalyzer;
pub use config::Config;
pub use error::AnalyticsError;
pub use intervals::derive_time_between_failures;
pub use result::{FleetKpi, ReliabilityCurves, TbfResult, WeibullCi, WeibullFit};
pub use statistics::bootstrap_weibull_ci;
pub use types::{Event, EventType, ExposureLog};
pub use weibull::{fit_weibull, fit_weibull_censored, reliability_curves};
