//! Numerical constants shared across the analytics engine.

/// Floor applied to durations before taking logarithms.
///
/// TBF derivation can legitimately produce zero-length intervals (a failure
/// inside an exposure gap); flooring keeps the likelihood finite.
pub const DURATION_EPS: f64 = 1e-12;

/// Survival probabilities below this are treated as zero to avoid
/// division blow-up in conditional reliability and hazard curves.
pub const SURVIVAL_EPS: f64 = 1e-12;

/// Clip for exponent arguments before calling `exp()`.
///
/// `exp(709.8)` overflows f64; ±700 keeps degenerate inputs finite.
pub const EXP_CLIP: f64 = 700.0;

/// Box bounds for the shape parameter in log-space: shape ∈ [1e-6, 1e6].
pub const LOG_SHAPE_MIN: f64 = -13.815510557964274; // ln(1e-6)
/// Upper log-space bound for shape.
pub const LOG_SHAPE_MAX: f64 = 13.815510557964274; // ln(1e6)

/// Box bounds for the scale parameter in log-space: scale ∈ [1e-6, 1e9].
pub const LOG_SCALE_MIN: f64 = -13.815510557964274; // ln(1e-6)
/// Upper log-space bound for scale.
pub const LOG_SCALE_MAX: f64 = 20.72326583694641; // ln(1e9)

/// Bad-actor composite weights: failures, downtime, unavailability.
pub const BAD_ACTOR_WEIGHTS: (f64, f64, f64) = (0.4, 0.35, 0.25);

/// Default FMEA detection rating when no inspection-coverage data exists.
pub const DEFAULT_DETECTION: u32 = 5;
