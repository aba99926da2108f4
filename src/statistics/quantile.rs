//! Quantile computation using O(n) selection algorithms.
//!
//! Uses `slice.select_nth_unstable()` (introselect, O(n) average time) with
//! the R-7 definition (linear interpolation), which matches what the
//! percentile-bootstrap confidence intervals expect.

/// Compute a single quantile from a mutable slice.
///
/// The slice is partially reordered as a side effect.
///
/// # Arguments
///
/// * `data` - Mutable slice of values (will be partially reordered)
/// * `p` - Quantile probability in [0, 1]
///
/// # Panics
///
/// Panics if `data` is empty or if `p` is outside [0, 1]. Callers in this
/// crate validate inputs before reaching this point.
pub fn compute_quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    // R-7 quantile definition (linear interpolation)
    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        let (_, &mut max, _) = data.select_nth_unstable_by(n - 1, |a, b| a.total_cmp(b));
        return max;
    }

    let (_, &mut lower, upper) = data.select_nth_unstable_by(h_floor, |a, b| a.total_cmp(b));

    if h_frac == 0.0 {
        return lower;
    }

    // Minimum of the upper partition is the next order statistic
    let upper_min = upper
        .iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .unwrap_or(lower);

    lower + h_frac * (upper_min - lower)
}

/// Median of a slice, leaving the input untouched.
///
/// Returns 0.0 for an empty slice: every caller in this crate treats a
/// missing median as a neutral value rather than an error.
pub fn compute_median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut working = data.to_vec();
    compute_quantile(&mut working, 0.5)
}
