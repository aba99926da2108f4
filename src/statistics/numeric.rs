//! Small numeric utilities: inverse normal CDF, Poisson quantiles, and
//! presentation rounding.

/// Inverse normal CDF (probit function).
///
/// Computes Φ⁻¹(p) using the Abramowitz & Stegun approximation (26.2.23).
/// Accurate to ~4.5×10⁻⁴ for p ∈ (0, 1), which is plenty for demand-forecast
/// bounds.
pub fn probit(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    // Use symmetry: for p < 0.5, compute -probit(1-p)
    let (sign, q) = if p < 0.5 { (-1.0, 1.0 - p) } else { (1.0, p) };

    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let t = (-2.0 * (1.0 - q).ln()).sqrt();
    let z = t - (C0 + C1 * t + C2 * t * t) / (1.0 + D1 * t + D2 * t * t + D3 * t * t * t);

    sign * z
}

/// Poisson quantile: the smallest count `k` with `CDF(k) >= p`.
///
/// Sums the probability mass directly for moderate rates; switches to a
/// normal approximation when `exp(-lambda)` would underflow.
pub fn poisson_quantile(p: f64, lambda: f64) -> f64 {
    if lambda <= 0.0 || p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    if lambda > 700.0 {
        // exp(-lambda) underflows; λ is large enough for the normal limit
        let k = lambda + probit(p) * lambda.sqrt();
        return k.round().max(0.0);
    }

    let mut pmf = (-lambda).exp();
    let mut cdf = pmf;
    let mut k: u64 = 0;
    // CDF reaches p well before this bound for any λ ≤ 700
    let k_max = (lambda + 12.0 * lambda.sqrt() + 20.0) as u64;
    while cdf < p && k < k_max {
        k += 1;
        pmf *= lambda / k as f64;
        cdf += pmf;
    }
    k as f64
}

/// Round to a fixed number of decimal digits for presentation fields.
pub fn round_to(x: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (x * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probit_known_values() {
        // Φ⁻¹(0.975) ≈ 1.95996
        assert!((probit(0.975) - 1.95996).abs() < 1e-3);
        assert!((probit(0.5)).abs() < 1e-3);
        assert!((probit(0.025) + 1.95996).abs() < 1e-3);
    }

    #[test]
    fn poisson_quantile_small_lambda() {
        // λ = 2: CDF(0)=0.1353, CDF(1)=0.406, CDF(2)=0.6767, CDF(4)=0.9473
        assert_eq!(poisson_quantile(0.1, 2.0), 0.0);
        assert_eq!(poisson_quantile(0.5, 2.0), 2.0);
        assert_eq!(poisson_quantile(0.95, 2.0), 5.0);
    }

    #[test]
    fn poisson_quantile_guards() {
        assert_eq!(poisson_quantile(0.5, 0.0), 0.0);
        assert_eq!(poisson_quantile(0.0, 10.0), 0.0);
    }

    #[test]
    fn poisson_quantile_large_lambda_uses_normal_tail() {
        let q = poisson_quantile(0.95, 1000.0);
        // Normal approx: 1000 + 1.645*sqrt(1000) ≈ 1052
        assert!(q > 1040.0 && q < 1065.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(0.00123456, 6), 0.001235);
        assert_eq!(round_to(-1.005, 1), -1.0);
    }
}
