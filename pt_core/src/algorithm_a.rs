//! Algorithm A: the ISO 13528 Annex C iterative robust mean/scale estimator.
//!
//! Location and scale are refined together under 1.5σ winsorization until
//! both stabilize within `tolerance`, or `max_iterations` is exhausted.
//! Non-convergence is a reported state (`converged: false`), never an error.

use crate::error::{CoreError, Result};
use crate::primitives::{mad, median};
use crate::types::AlgorithmAParams;

/// Result of running Algorithm A to convergence (or exhaustion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmAResult {
    pub mu_star: f64,
    pub sigma_star: f64,
    pub p_used: usize,
    pub iterations: u32,
    pub converged: bool,
}

/// Consistency factor restoring σ to the normal scale under 1.5σ winsorization.
const WINSOR_CONSISTENCY: f64 = 1.134;
/// MAD-to-sigma scale factor under normality.
const MAD_TO_SIGMA: f64 = 1.4826;
/// Winsorization cap, expressed as a multiple of the current scale estimate.
const WINSOR_DELTA_FACTOR: f64 = 1.5;

pub fn algorithm_a(x: &[f64], params: AlgorithmAParams) -> Result<AlgorithmAResult> {
    if x.is_empty() {
        return Err(CoreError::EmptyDataset);
    }
    if let Some(bad) = x.iter().position(|v| !v.is_finite()) {
        return Err(CoreError::NonFiniteResult(bad));
    }
    if !(params.tolerance > 0.0) {
        return Err(CoreError::InvalidParameter(
            "algorithm_a.tolerance must be > 0".into(),
        ));
    }
    if params.max_iterations == 0 {
        return Err(CoreError::InvalidParameter(
            "algorithm_a.max_iterations must be > 0".into(),
        ));
    }

    let n = x.len();
    if n == 1 {
        return Ok(AlgorithmAResult {
            mu_star: x[0],
            sigma_star: 0.0,
            p_used: 1,
            iterations: 0,
            converged: true,
        });
    }

    let mu0 = median(x);
    let sigma0 = MAD_TO_SIGMA * mad(x, mu0);

    if sigma0 == 0.0 {
        tracing::debug!(mu0, "algorithm A: degenerate spread, short-circuiting");
        return Ok(AlgorithmAResult {
            mu_star: mu0,
            sigma_star: 0.0,
            p_used: n,
            iterations: 0,
            converged: true,
        });
    }

    let mut mu_prev = mu0;
    let mut sigma_prev = sigma0;
    let mut winsorized = vec![0.0f64; n];

    for k in 1..=params.max_iterations {
        let delta = WINSOR_DELTA_FACTOR * sigma_prev;
        let lo = mu_prev - delta;
        let hi = mu_prev + delta;
        for (w, &xi) in winsorized.iter_mut().zip(x) {
            *w = xi.clamp(lo, hi);
        }

        let mu_k = winsorized.iter().sum::<f64>() / n as f64;
        let sum_sq: f64 = winsorized.iter().map(|w| (w - mu_k).powi(2)).sum();
        let sigma_k = WINSOR_CONSISTENCY * (sum_sq / (n - 1) as f64).sqrt();

        let mu_converged = (mu_k - mu_prev).abs() <= params.tolerance * mu_prev.abs().max(1.0);
        let sigma_converged = (sigma_k - sigma_prev).abs() <= params.tolerance * sigma_prev.max(1.0);

        tracing::trace!(k, mu_k, sigma_k, mu_converged, sigma_converged, "algorithm A iteration");

        if mu_converged && sigma_converged {
            return Ok(AlgorithmAResult {
                mu_star: mu_k,
                sigma_star: sigma_k,
                p_used: n,
                iterations: k,
                converged: true,
            });
        }

        mu_prev = mu_k;
        sigma_prev = sigma_k;

        if k == params.max_iterations {
            return Ok(AlgorithmAResult {
                mu_star: mu_k,
                sigma_star: sigma_k,
                p_used: n,
                iterations: k,
                converged: false,
            });
        }
    }

    unreachable!("loop always returns by the k == max_iterations branch")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AlgorithmAParams {
        AlgorithmAParams {
            tolerance: 1e-5,
            max_iterations: 50,
        }
    }

    #[test]
    fn n_equals_one_is_trivial() {
        let r = algorithm_a(&[7.0], params()).unwrap();
        assert_eq!(r.mu_star, 7.0);
        assert_eq!(r.sigma_star, 0.0);
        assert_eq!(r.p_used, 1);
        assert_eq!(r.iterations, 0);
        assert!(r.converged);
    }

    #[test]
    fn degenerate_equal_values_short_circuit() {
        let r = algorithm_a(&[5.0, 5.0, 5.0, 5.0], params()).unwrap();
        assert_eq!(r.mu_star, 5.0);
        assert_eq!(r.sigma_star, 0.0);
        assert_eq!(r.iterations, 0);
        assert!(r.converged);
    }

    #[test]
    fn symmetric_clean_sample() {
        // No observation exceeds the 1.5*sigma winsorization band here, so
        // mu* is the plain mean and sigma* is 1.134 times the (n-1)-normalized
        // RMS of the deviations from it.
        let x = [9.8, 9.9, 10.0, 10.1, 10.2];
        let r = algorithm_a(&x, params()).unwrap();
        let expected_sigma = 1.134 * (0.10_f64 / 4.0).sqrt();
        assert!((r.mu_star - 10.0).abs() < 1e-9);
        assert!((r.sigma_star - expected_sigma).abs() < 1e-6);
        assert!(r.converged);
        assert!(r.iterations <= 3);
    }

    #[test]
    fn one_gross_outlier_is_bounded() {
        let mut x = vec![10.0; 9];
        x.push(1000.0);
        let r = algorithm_a(&x, params()).unwrap();
        assert!(r.mu_star >= 10.0 && r.mu_star <= 10.5, "mu* = {}", r.mu_star);
        assert!(r.converged);
    }

    #[test]
    fn n_equals_two_does_not_panic() {
        let r = algorithm_a(&[1.0, 3.0], params()).unwrap();
        assert!(r.mu_star.is_finite());
        assert!(r.sigma_star.is_finite());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(algorithm_a(&[], params()), Err(CoreError::EmptyDataset));
    }

    #[test]
    fn non_finite_input_is_an_error() {
        assert_eq!(
            algorithm_a(&[1.0, f64::NAN, 3.0], params()),
            Err(CoreError::NonFiniteResult(1))
        );
    }

    #[test]
    fn zero_tolerance_is_rejected() {
        let bad = AlgorithmAParams {
            tolerance: 0.0,
            max_iterations: 50,
        };
        assert!(matches!(
            algorithm_a(&[1.0, 2.0, 3.0], bad),
            Err(CoreError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        let bad = AlgorithmAParams {
            tolerance: 1e-5,
            max_iterations: 0,
        };
        assert!(matches!(
            algorithm_a(&[1.0, 2.0, 3.0], bad),
            Err(CoreError::InvalidParameter(_))
        ));
    }

    #[test]
    fn idempotent_at_fixed_point() {
        let x = [9.8, 9.9, 10.0, 10.1, 10.2];
        let r1 = algorithm_a(&x, params()).unwrap();
        // Feed back a sample that is already at the fixed point: five copies of mu*.
        let fixed = vec![r1.mu_star; 5];
        let r2 = algorithm_a(&fixed, params()).unwrap();
        assert!(r2.converged);
        assert!(r2.iterations <= 1);
    }

    #[test]
    fn scale_shift_equivariance() {
        let x = [9.8, 9.9, 10.0, 10.1, 10.2, 10.6, 9.5];
        let a = 2.5;
        let b = -3.0;
        let y: Vec<f64> = x.iter().map(|v| a * v + b).collect();
        let rx = algorithm_a(&x, params()).unwrap();
        let ry = algorithm_a(&y, params()).unwrap();
        assert!((ry.mu_star - (a * rx.mu_star + b)).abs() < 1e-6);
        assert!((ry.sigma_star - a * rx.sigma_star).abs() < 1e-6);
    }
}
