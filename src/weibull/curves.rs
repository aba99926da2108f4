//! Weibull distribution primitives and curve evaluation.

use crate::constants::{EXP_CLIP, SURVIVAL_EPS};
use crate::result::ReliabilityCurves;

/// Weibull survival function `S(t) = exp(-(t/scale)^shape)`.
///
/// Returns 1.0 for `t <= 0`.
pub fn survival(shape: f64, scale: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 1.0;
    }
    let exp_arg = (shape * (t / scale).ln()).clamp(-EXP_CLIP, EXP_CLIP);
    (-exp_arg.exp()).exp()
}

/// Weibull probability density `f(t)`.
///
/// Follows the distribution's limits at `t = 0`: 0 for shape > 1,
/// `1/scale` for shape = 1, +∞ for shape < 1.
pub fn weibull_pdf(shape: f64, scale: f64, t: f64) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    let z = t / scale;
    (shape / scale) * z.powf(shape - 1.0) * (-z.powf(shape)).exp()
}

/// Weibull hazard `h(t) = (shape/scale) * (t/scale)^(shape-1)`.
pub fn hazard_rate(shape: f64, scale: f64, t: f64) -> f64 {
    (shape / scale) * (t / scale).powf(shape - 1.0)
}

/// Evaluate reliability and hazard curves over a time grid.
///
/// `reliability[i] = 1 - CDF(times[i])` and
/// `hazard[i] = pdf(times[i]) / max(reliability[i], 1e-12)`; the floor keeps
/// the deep-tail hazard finite.
pub fn reliability_curves(shape: f64, scale: f64, times: &[f64]) -> ReliabilityCurves {
    let reliability: Vec<f64> = times.iter().map(|&t| survival(shape, scale, t)).collect();
    let hazard: Vec<f64> = times
        .iter()
        .zip(&reliability)
        .map(|(&t, &r)| weibull_pdf(shape, scale, t) / r.max(SURVIVAL_EPS))
        .collect();
    ReliabilityCurves {
        times: times.to_vec(),
        reliability,
        hazard,
    }
}
