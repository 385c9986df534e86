//! Method dispatcher: selects the assigned-value path and its uncertainty.

use crate::algorithm_a::algorithm_a;
use crate::error::{CoreError, Result};
use crate::types::{AlgorithmAParams, AssignedValue, Method};

/// Everything the dispatcher needs beyond the result vector itself.
#[derive(Debug, Clone)]
pub struct MethodInputs {
    pub method: Method,
    pub algorithm_a: AlgorithmAParams,
    pub supplied_value: Option<f64>,
    pub supplied_uncertainty: Option<f64>,
}

/// Uncertainty factor applied to Algorithm A's robust scale: `u(x_pt) = 1.25 * s* / sqrt(p_used)`.
const ALGORITHM_A_UNCERTAINTY_FACTOR: f64 = 1.25;

pub fn dispatch(x: &[f64], inputs: &MethodInputs) -> Result<AssignedValue> {
    match inputs.method {
        Method::A => {
            let r = algorithm_a(x, inputs.algorithm_a)?;
            let u_x_pt = if r.sigma_star == 0.0 {
                0.0
            } else {
                ALGORITHM_A_UNCERTAINTY_FACTOR * r.sigma_star / (r.p_used as f64).sqrt()
            };
            tracing::info!(method = "A", x_pt = r.mu_star, u_x_pt, converged = r.converged, "assigned value dispatched");
            Ok(AssignedValue {
                method: Method::A,
                x_pt: r.mu_star,
                u_x_pt,
                s_star: Some(r.sigma_star),
                p_used: Some(r.p_used),
                iterations: Some(r.iterations),
                converged: Some(r.converged),
            })
        }
        Method::Crm | Method::Formulation | Method::Expert => {
            let value = inputs
                .supplied_value
                .ok_or(CoreError::MissingMethodInput(inputs.method))?;
            let uncertainty = inputs
                .supplied_uncertainty
                .ok_or(CoreError::MissingMethodInput(inputs.method))?;
            if !value.is_finite() {
                return Err(CoreError::InvalidParameter(format!(
                    "supplied value for method {} must be finite",
                    inputs.method
                )));
            }
            if !uncertainty.is_finite() || uncertainty < 0.0 {
                return Err(CoreError::InvalidParameter(format!(
                    "supplied uncertainty for method {} must be finite and >= 0",
                    inputs.method
                )));
            }
            tracing::info!(method = %inputs.method, x_pt = value, u_x_pt = uncertainty, "assigned value dispatched");
            Ok(AssignedValue {
                method: inputs.method,
                x_pt: value,
                u_x_pt: uncertainty,
                s_star: None,
                p_used: None,
                iterations: None,
                converged: None,
            })
        }
    }
}
