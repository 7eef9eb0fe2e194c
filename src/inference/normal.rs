//! inference::normal — standard normal tail probabilities and quantiles.
//!
//! Two-sided p-values are computed as `2·Φ(−|z|) = erfc(|z| / √2)` through
//! the complementary error function, which keeps full relative precision far
//! into the tail where `1 − Φ(|z|)` would cancel to zero.
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Standard normal CDF, `Φ(x) = ½·erfc(−x/√2)`.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Two-sided p-value `2·Φ(−|z|)` for a z-score. NaN in, NaN out.
pub fn two_sided_p_value(z: f64) -> f64 {
    erfc(z.abs() / SQRT_2)
}

/// Quantile `z` with `Φ(z) = prob`, for `prob ∈ (0, 1)`.
pub fn normal_quantile(prob: f64) -> f64 {
    Normal::new(0.0, 1.0).expect("standard normal").inverse_cdf(prob)
}
