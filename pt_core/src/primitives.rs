//! Reusable numeric building blocks: median, MAD, winsorization, Huber's ψ.
//!
//! All functions here are pure and total over finite inputs. Callers are
//! responsible for the non-empty/finite preconditions the algorithms that
//! consume these primitives already enforce.

/// Median of a slice via a sorted copy. Even-length inputs return the mean
/// of the two central order statistics.
pub fn median(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "median of an empty slice");
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Median absolute deviation from `center`.
pub fn mad(values: &[f64], center: f64) -> f64 {
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median(&deviations)
}

/// Elementwise clamp of `values` into `[lo, hi]`.
pub fn winsorize(values: &[f64], lo: f64, hi: f64) -> Vec<f64> {
    values.iter().map(|&v| v.clamp(lo, hi)).collect()
}

/// Huber's ψ: identity clamped to `[-c, c]`. Provided for extensibility;
/// Algorithm A applies the equivalent clamp directly to the observations
/// rather than to standardized residuals.
pub fn huber_psi(u: f64, c: f64) -> f64 {
    u.clamp(-c, c)
}
