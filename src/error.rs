//! Error types for the analytics engine.
//!
//! Two failure classes exist (and only two — everything else degrades to a
//! neutral value instead of erroring):
//!
//! - **Data errors** signal a caller contract violation: empty input,
//!   mismatched array lengths, a percentile outside `(0, 100)`. These are
//!   raised immediately and never silently defaulted.
//! - **Non-convergence** signals that the censored MLE optimizer failed.
//!   Callers may retry with different data or seeds; the engine does not
//!   auto-retry, and it never returns a fit it could not converge to.

/// Error type for Weibull fitting, bootstrap, and metric validation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A required input collection was empty.
    EmptyInput(&'static str),
    /// `durations` and `censored_flags` have different lengths.
    LengthMismatch {
        /// Number of duration values supplied.
        durations: usize,
        /// Number of censoring flags supplied.
        flags: usize,
    },
    /// A B-life percentile outside the open interval (0, 100).
    InvalidPercentile(f64),
    /// The MLE optimizer did not converge; carries its diagnostic message.
    NonConvergence(String),
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyticsError::EmptyInput(what) => {
                write!(f, "cannot compute on empty input: {}", what)
            }
            AnalyticsError::LengthMismatch { durations, flags } => {
                write!(
                    f,
                    "durations and censored_flags must be the same length ({} vs {})",
                    durations, flags
                )
            }
            AnalyticsError::InvalidPercentile(p) => {
                write!(f, "percentile must be in (0, 100), got {}", p)
            }
            AnalyticsError::NonConvergence(msg) => {
                write!(f, "Weibull MLE failed to converge: {}", msg)
            }
        }
    }
}

impl std::error::Error for AnalyticsError {}
