//! Statistical infrastructure for the reliability engine.
//!
//! - Percentile-bootstrap confidence intervals with deterministic
//!   counter-derived replicate seeds
//! - Quantile computation using efficient O(n) selection (R-7 definition)
//! - Small numeric utilities (probit, Poisson quantiles, rounding)

mod bootstrap;
mod numeric;
pub(crate) mod quantile;

pub use bootstrap::{bootstrap_weibull_ci, counter_rng_seed};
pub use numeric::{poisson_quantile, probit, round_to};
pub use quantile::{compute_median, compute_quantile};
