//! Censored Weibull maximum likelihood.
//!
//! Right-censored intervals contribute survival mass instead of density:
//!
//! ```text
//! LL = Σ_observed ln f(t_i) + Σ_censored ln S(t_i)
//! ```
//!
//! The negative log-likelihood is minimized in log-space over
//! `(ln shape, ln scale)` — positivity for free and far better conditioning
//! when durations span orders of magnitude. Exponent arguments are clipped to
//! ±700 before `exp()` so degenerate inputs stay finite. The optimizer is a
//! bounded Nelder–Mead simplex seeded from the uncensored fit of the observed
//! subset; box bounds clamp shape to [1e-6, 1e6] and scale to [1e-6, 1e9].

use nalgebra::Vector2;
use tracing::debug;

use crate::constants::{
    DURATION_EPS, EXP_CLIP, LOG_SCALE_MAX, LOG_SCALE_MIN, LOG_SHAPE_MAX, LOG_SHAPE_MIN,
};
use crate::error::AnalyticsError;
use crate::result::WeibullFit;
use crate::statistics::compute_median;
use crate::weibull::fit_weibull;

/// Maximum simplex iterations before declaring non-convergence.
const MAX_ITER: usize = 500;

/// Relative tolerance on the function-value spread across the simplex.
const FTOL: f64 = 1e-10;

/// Initial simplex edge length in log-space.
const INIT_STEP: f64 = 0.2;

/// Clamp a log-space point into the parameter box.
fn clamp_point(x: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(
        x[0].clamp(LOG_SHAPE_MIN, LOG_SHAPE_MAX),
        x[1].clamp(LOG_SCALE_MIN, LOG_SCALE_MAX),
    )
}

/// Negative log-likelihood at a (clamped) log-space point.
fn neg_log_likelihood(x: Vector2<f64>, durations: &[f64], censored: &[bool]) -> f64 {
    let x = clamp_point(x);
    let (log_shape, log_scale) = (x[0], x[1]);
    let shape = log_shape.exp();

    let mut ll = 0.0;
    for (&t, &is_censored) in durations.iter().zip(censored) {
        let t = t.max(DURATION_EPS);
        let log_ratio = t.ln() - log_scale;
        let exp_arg = (shape * log_ratio).clamp(-EXP_CLIP, EXP_CLIP);
        // ln S(t) = -(t/scale)^shape
        let log_sf = -exp_arg.exp();
        if is_censored {
            ll += log_sf;
        } else {
            // ln f(t) = ln shape - ln scale + (shape - 1) ln(t/scale) - (t/scale)^shape
            ll += log_shape - log_scale + (shape - 1.0) * log_ratio + log_sf;
        }
    }
    -ll
}

/// Fit a 2-parameter Weibull to durations with optional right-censoring.
///
/// `censored_flags` defaults to all-false (fully observed). Censored entries
/// contribute `ln S(t)` to the likelihood: the unit had not yet failed when
/// observation ended, so its duration is a lower bound.
///
/// The returned log-likelihood is recomputed at the optimum for diagnostics.
///
/// # Errors
///
/// - [`AnalyticsError::EmptyInput`] when `durations` is empty.
/// - [`AnalyticsError::LengthMismatch`] when the flags array has a different
///   length than the durations.
/// - [`AnalyticsError::NonConvergence`] when the simplex fails to settle;
///   this is surfaced, never swallowed — callers may retry, the engine does
///   not.
pub fn fit_weibull_censored(
    durations: &[f64],
    censored_flags: Option<&[bool]>,
) -> Result<WeibullFit, AnalyticsError> {
    if durations.is_empty() {
        return Err(AnalyticsError::EmptyInput("durations"));
    }
    let owned_flags;
    let censored: &[bool] = match censored_flags {
        Some(flags) => {
            if flags.len() != durations.len() {
                return Err(AnalyticsError::LengthMismatch {
                    durations: durations.len(),
                    flags: flags.len(),
                });
            }
            flags
        }
        None => {
            owned_flags = vec![false; durations.len()];
            &owned_flags
        }
    };

    // Seed from the uncensored MLE of the observed subset when it converges;
    // otherwise shape 1.5 and the median duration.
    let observed: Vec<f64> = durations
        .iter()
        .zip(censored)
        .filter(|(_, &c)| !c)
        .map(|(&t, _)| t)
        .collect();
    let (init_shape, init_scale) = match fit_weibull(&observed) {
        Ok(seed) => (seed.shape, seed.scale),
        Err(_) => (1.5, compute_median(durations).max(1e-6)),
    };
    let x0 = clamp_point(Vector2::new(init_shape.ln(), init_scale.ln()));

    let (x_opt, iterations) = nelder_mead(x0, |x| neg_log_likelihood(x, durations, censored))?;

    let x_opt = clamp_point(x_opt);
    let shape = x_opt[0].exp();
    let scale = x_opt[1].exp();
    let log_likelihood = -neg_log_likelihood(x_opt, durations, censored);

    debug!(
        shape,
        scale,
        iterations,
        censored = censored.iter().filter(|&&c| c).count(),
        "censored Weibull MLE converged"
    );

    Ok(WeibullFit {
        shape,
        scale,
        log_likelihood,
    })
}

/// Bounded 2-D Nelder–Mead simplex minimization.
///
/// Standard reflect/expand/contract/shrink moves; box constraints are applied
/// by clamping inside the objective, so the simplex may settle on a boundary
/// plateau. Returns the best vertex and the iteration count.
fn nelder_mead<F>(x0: Vector2<f64>, f: F) -> Result<(Vector2<f64>, usize), AnalyticsError>
where
    F: Fn(Vector2<f64>) -> f64,
{
    const ALPHA: f64 = 1.0; // reflection
    const GAMMA: f64 = 2.0; // expansion
    const RHO: f64 = 0.5; // contraction
    const SIGMA: f64 = 0.5; // shrink

    let mut simplex = vec![
        (x0, f(x0)),
        (x0 + Vector2::new(INIT_STEP, 0.0), 0.0),
        (x0 + Vector2::new(0.0, INIT_STEP), 0.0),
    ];
    simplex[1].1 = f(simplex[1].0);
    simplex[2].1 = f(simplex[2].0);

    for iteration in 0..MAX_ITER {
        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
        let (best, worst) = (simplex[0], simplex[2]);

        let f_spread = (worst.1 - best.1).abs();
        let x_spread = (simplex[1].0 - best.0)
            .amax()
            .max((worst.0 - best.0).amax());
        if f_spread <= FTOL * (1.0 + best.1.abs()) || x_spread <= 1e-9 {
            return Ok((best.0, iteration));
        }

        // Centroid of all but the worst vertex
        let centroid = (simplex[0].0 + simplex[1].0) / 2.0;

        let reflected = centroid + ALPHA * (centroid - worst.0);
        let f_reflected = f(reflected);

        if f_reflected < best.1 {
            let expanded = centroid + GAMMA * (reflected - centroid);
            let f_expanded = f(expanded);
            simplex[2] = if f_expanded < f_reflected {
                (expanded, f_expanded)
            } else {
                (reflected, f_reflected)
            };
            continue;
        }

        if f_reflected < simplex[1].1 {
            simplex[2] = (reflected, f_reflected);
            continue;
        }

        let contracted = centroid + RHO * (worst.0 - centroid);
        let f_contracted = f(contracted);
        if f_contracted < worst.1 {
            simplex[2] = (contracted, f_contracted);
            continue;
        }

        // Shrink toward the best vertex
        for vertex in simplex.iter_mut().skip(1) {
            vertex.0 = best.0 + SIGMA * (vertex.0 - best.0);
            vertex.1 = f(vertex.0);
        }
    }

    simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
    Err(AnalyticsError::NonConvergence(format!(
        "simplex did not settle after {} iterations (objective spread {:.3e})",
        MAX_ITER,
        (simplex[2].1 - simplex[0].1).abs()
    )))
}
