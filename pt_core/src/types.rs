//! Wire-facing data model for a single proficiency-testing round.
//!
//! These types are the boundary the dispatcher, scoring engine, and callers
//! all share; none of them know about TOML or CSV — that lives in `pt_config`.

use serde::{Deserialize, Serialize};

/// The method used to establish the assigned value for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    A,
    #[serde(rename = "CRM")]
    Crm,
    Formulation,
    Expert,
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Method::A => write!(f, "A"),
            Method::Crm => write!(f, "CRM"),
            Method::Formulation => write!(f, "Formulation"),
            Method::Expert => write!(f, "Expert"),
        }
    }
}

/// A validated dataset: parallel per-participant vectors, order preserved.
///
/// Invariants (enforced by the validation kernel in `pt_config`, not here):
/// all `results` finite, all present `uncertainties` finite and `>= 0`,
/// all `ids` non-empty, `ids.len() == results.len() == uncertainties.len() >= 1`.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub ids: Vec<String>,
    pub results: Vec<f64>,
    pub uncertainties: Vec<Option<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One dropped input row, surfaced alongside a successful result rather than
/// failing the whole round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroppedRow {
    pub index: usize,
    pub reason: String,
}

/// Convergence parameters for Algorithm A. Defaults match spec: tolerance
/// 1e-5, max_iterations 50.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmAParams {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for AlgorithmAParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 50,
        }
    }
}

/// Output of the method dispatcher: `x_pt`, its uncertainty, and whatever
/// method-specific diagnostics apply.
#[derive(Debug, Clone, Serialize)]
pub struct AssignedValue {
    pub method: Method,
    pub x_pt: f64,
    pub u_x_pt: f64,
    pub s_star: Option<f64>,
    pub p_used: Option<usize>,
    pub iterations: Option<u32>,
    pub converged: Option<bool>,
}

/// Per-participant scores, parallel to the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreVector {
    pub z: Vec<Option<f64>>,
    pub zeta: Vec<Option<f64>>,
}

/// The serialization boundary consumed by the external report renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsRecord {
    pub method: Method,
    pub x_pt: f64,
    pub u_x_pt: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_star: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_used: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma_pt: Option<f64>,
    pub ids: Vec<String>,
    pub results: Vec<f64>,
    pub uncertainties: Vec<Option<f64>>,
    pub z_scores: Vec<Option<f64>>,
    pub zeta_scores: Vec<Option<f64>>,
    pub dropped_rows: Vec<DroppedRow>,
}
