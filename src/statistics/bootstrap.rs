//! Bootstrap confidence intervals for Weibull parameters.
//!
//! Resampling preserves the `(duration, censored)` pairing per draw, so a
//! replicate sees the same censoring structure as the original data. Each
//! replicate performs one full censored MLE refit — this is the engine's
//! dominant cost center, O(n_bootstrap) refits — and replicates are
//! embarrassingly parallel, so they run on the shared thread pool under the
//! `parallel` feature.
//!
//! Replicate seeds are derived from one base seed with a SplitMix64 counter
//! hash, making results deterministic for a fixed [`Config::seed`] and
//! independent of the parallel schedule.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::warn;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::error::AnalyticsError;
use crate::result::WeibullCi;
use crate::statistics::quantile::compute_quantile;
#[cfg(feature = "parallel")]
use crate::thread_pool;
use crate::weibull::{fit_weibull, fit_weibull_censored};

/// Counter-based RNG seed generation using SplitMix64.
///
/// A stateless PRF from a base seed and counter: deterministic,
/// well-distributed replicate seeds without sequential correlation.
#[inline]
pub fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    // SplitMix64: high-quality 64-bit hash function
    // See: https://xoshiro.di.unimi.it/splitmix64.c
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Draw one same-size resample with replacement, keeping each duration
/// paired with its censoring flag.
fn resample_pairs_into<R: Rng>(
    durations: &[f64],
    censored: &[bool],
    rng: &mut R,
    out_durations: &mut [f64],
    out_censored: &mut [bool],
) {
    let n = durations.len();
    for i in 0..n {
        let j = rng.random_range(0..n);
        out_durations[i] = durations[j];
        out_censored[i] = censored[j];
    }
}

/// Refit one bootstrap replicate, returning `(shape, scale)`.
///
/// A censored refit that fails to converge falls back to an uncensored fit
/// of the same resample unless fallback is disabled, in which case the error
/// propagates and aborts the whole bootstrap — a contaminated interval is
/// never returned.
fn replicate_fit(
    durations: &[f64],
    censored: &[bool],
    config: &Config,
    seed: u64,
) -> Result<(f64, f64), AnalyticsError> {
    let n = durations.len();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut sample = vec![0.0; n];
    let mut flags = vec![false; n];
    resample_pairs_into(durations, censored, &mut rng, &mut sample, &mut flags);

    match fit_weibull_censored(&sample, Some(&flags)) {
        Ok(fit) => Ok((fit.shape, fit.scale)),
        Err(err) if config.uncensored_fallback => {
            warn!(error = %err, "censored refit failed, falling back to uncensored fit");
            let fit = fit_weibull(&sample)?;
            Ok((fit.shape, fit.scale))
        }
        Err(err) => Err(err),
    }
}

/// Percentile-bootstrap confidence intervals on Weibull shape and scale.
///
/// Draws `config.n_bootstrap` pair-preserving resamples, refits each, and
/// returns the empirical `(alpha/2, 1 - alpha/2)` quantiles of the replicate
/// parameter distributions. Partial results are never returned: any
/// unrecovered replicate failure aborts the call.
///
/// # Errors
///
/// - [`AnalyticsError::EmptyInput`] on empty durations or a zero replicate
///   count.
/// - [`AnalyticsError::LengthMismatch`] when the flags array has a different
///   length than the durations.
/// - [`AnalyticsError::NonConvergence`] when a replicate fit fails and
///   fallback is disabled (or the fallback itself fails).
pub fn bootstrap_weibull_ci(
    durations: &[f64],
    censored_flags: Option<&[bool]>,
    config: &Config,
) -> Result<WeibullCi, AnalyticsError> {
    if durations.is_empty() {
        return Err(AnalyticsError::EmptyInput("durations"));
    }
    if config.n_bootstrap == 0 {
        return Err(AnalyticsError::EmptyInput("bootstrap replicates"));
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

    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());

    #[cfg(feature = "parallel")]
    let replicates: Vec<(f64, f64)> = thread_pool::install(|| {
        (0..config.n_bootstrap)
            .into_par_iter()
            .map(|i| replicate_fit(durations, censored, config, counter_rng_seed(base_seed, i as u64)))
            .collect::<Result<Vec<_>, _>>()
    })?;

    #[cfg(not(feature = "parallel"))]
    let replicates: Vec<(f64, f64)> = (0..config.n_bootstrap)
        .map(|i| replicate_fit(durations, censored, config, counter_rng_seed(base_seed, i as u64)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut shapes: Vec<f64> = replicates.iter().map(|&(s, _)| s).collect();
    let mut scales: Vec<f64> = replicates.iter().map(|&(_, s)| s).collect();

    let lower = config.alpha / 2.0;
    let upper = 1.0 - config.alpha / 2.0;
    Ok(WeibullCi {
        shape_ci: (
            compute_quantile(&mut shapes, lower),
            compute_quantile(&mut shapes, upper),
        ),
        scale_ci: (
            compute_quantile(&mut scales, lower),
            compute_quantile(&mut scales, upper),
        ),
    })
}
