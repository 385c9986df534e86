//! Scoring engine: per-participant z and zeta scores.
//!
//! Never fails on a per-row basis — missing scores are absence (`None`),
//! not zero, so a reader can tell "excellent agreement" from "not computable."

use crate::types::ScoreVector;

pub fn score(
    x: &[f64],
    u_x: &[Option<f64>],
    x_pt: f64,
    u_x_pt: f64,
    sigma_pt: Option<f64>,
) -> ScoreVector {
    debug_assert_eq!(x.len(), u_x.len());

    let z = x
        .iter()
        .map(|&xi| match sigma_pt {
            Some(s) if s > 0.0 => Some((xi - x_pt) / s),
            _ => None,
        })
        .collect();

    let zeta = x
        .iter()
        .zip(u_x)
        .map(|(&xi, ui)| {
            let ui = (*ui)?;
            let d2 = ui * ui + u_x_pt * u_x_pt;
            if d2 == 0.0 {
                None
            } else {
                Some((xi - x_pt) / d2.sqrt())
            }
        })
        .collect();

    ScoreVector { z, zeta }
}
