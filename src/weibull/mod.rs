//! 2-parameter Weibull estimation under right-censoring.
//!
//! Fitting is split by data shape:
//! - [`fit_weibull`] — uncensored maximum likelihood via Newton–Raphson on
//!   the profile likelihood (the scale has a closed form given the shape).
//! - [`fit_weibull_censored`] — full MLE with right-censored survival terms,
//!   optimized in log-space with a bounded Nelder–Mead simplex.
//!
//! Both fail loudly on empty/invalid input or non-convergence: a silently
//! wrong distribution fit is far more dangerous than a zero KPI, so this
//! module never degrades to a default.

mod censored;
mod curves;
mod mle;

pub use censored::fit_weibull_censored;
pub use curves::{hazard_rate, reliability_curves, survival, weibull_pdf};
pub use mle::fit_weibull;
