#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Statistical computation core for interlaboratory proficiency-testing rounds.
//!
//! Pure and synchronous: one round is one top-to-bottom pass over borrowed
//! input, producing a freshly allocated [`ResultsRecord`]. No shared state,
//! no background lifetimes, no persistence.
//!
//! ## Architecture
//!
//! - **Primitives** (`primitives` module): median, MAD, winsorize, Huber ψ.
//! - **Algorithm A** (`algorithm_a` module): the robust location/scale
//!   estimator that underlies the consensus method.
//! - **Dispatch** (`dispatch` module): selects between Algorithm A, CRM,
//!   Formulation, and Expert assigned-value paths and computes `u(x_pt)`
//!   consistently with whichever path ran.
//! - **Scoring** (`scoring` module): z and ζ scores with guarded
//!   denominators.
//! - **Types** (`types` module): the wire-facing data model shared by all
//!   of the above.

pub mod algorithm_a;
pub mod dispatch;
pub mod error;
pub mod primitives;
pub mod scoring;
pub mod types;

pub use algorithm_a::{algorithm_a, AlgorithmAResult};
pub use dispatch::{dispatch, MethodInputs};
pub use error::{CoreError, Result};
pub use scoring::score;
pub use types::{
    AlgorithmAParams, AssignedValue, Dataset, DroppedRow, Method, ResultsRecord, ScoreVector,
};

/// Run a single PT round end to end: dispatch the assigned value, score
/// every participant against it, and assemble the results record.
///
/// `dropped_rows` is threaded through unchanged from the validation kernel
/// that produced `dataset`; it carries no bearing on the computation
/// itself.
pub fn run_round(
    dataset: &Dataset,
    method_inputs: &MethodInputs,
    sigma_pt: Option<f64>,
    dropped_rows: Vec<DroppedRow>,
) -> Result<ResultsRecord> {
    let assigned = dispatch::dispatch(&dataset.results, method_inputs)?;
    let scores = scoring::score(
        &dataset.results,
        &dataset.uncertainties,
        assigned.x_pt,
        assigned.u_x_pt,
        sigma_pt,
    );

    Ok(ResultsRecord {
        method: assigned.method,
        x_pt: assigned.x_pt,
        u_x_pt: assigned.u_x_pt,
        s_star: assigned.s_star,
        p_used: assigned.p_used,
        iterations: assigned.iterations,
        converged: assigned.converged,
        sigma_pt,
        ids: dataset.ids.clone(),
        results: dataset.results.clone(),
        uncertainties: dataset.uncertainties.clone(),
        z_scores: scores.z,
        zeta_scores: scores.zeta,
        dropped_rows,
    })
}
