//! Input validation kernel: a caller-named column mapping plus a raw CSV
//! table becomes a validated `pt_core::Dataset`.
//!
//! The deterministic pipeline runs column presence, type coercion, a
//! per-row drop/fail policy, id normalization, and a minimum-size check,
//! over a strict-header CSV table.

use eyre::WrapErr;
use pt_core::{CoreError, Dataset, DroppedRow};
use std::path::Path;

/// Which CSV columns hold the participant id, result, and (optionally)
/// per-participant standard uncertainty.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub id_col: String,
    pub result_col: String,
    pub uncertainty_col: Option<String>,
}

/// Output of the validation kernel: the usable dataset, the rows dropped
/// along the way, and the original row index each surviving row came from.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub dataset: Dataset,
    pub dropped_rows: Vec<DroppedRow>,
    pub source_row_indices: Vec<usize>,
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, CoreError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CoreError::MissingColumn(name.to_string()))
}

/// Run the validation kernel over an in-memory table (headers + rows) —
/// the pure core of the pipeline, independent of how the table was read.
pub fn validate_table(
    headers: &csv::StringRecord,
    rows: impl Iterator<Item = csv::StringRecord>,
    mapping: &ColumnMapping,
) -> eyre::Result<ValidationReport> {
    let id_idx = column_index(headers, &mapping.id_col)?;
    let result_idx = column_index(headers, &mapping.result_col)?;
    let u_idx = mapping
        .uncertainty_col
        .as_deref()
        .map(|name| column_index(headers, name))
        .transpose()?;

    let mut ids = Vec::new();
    let mut results = Vec::new();
    let mut uncertainties = Vec::new();
    let mut dropped_rows = Vec::new();
    let mut source_row_indices = Vec::new();

    for (row_idx, record) in rows.enumerate() {
        let result_cell = record.get(result_idx).unwrap_or("").trim();
        let result: f64 = match result_cell.parse() {
            Ok(v) => v,
            Err(_) => {
                dropped_rows.push(DroppedRow {
                    index: row_idx,
                    reason: format!("unparsable result cell: {result_cell:?}"),
                });
                continue;
            }
        };
        if result.is_nan() {
            dropped_rows.push(DroppedRow {
                index: row_idx,
                reason: "result is NaN".to_string(),
            });
            continue;
        }
        if result.is_infinite() {
            return Err(CoreError::NonFiniteResult(row_idx).into());
        }

        let uncertainty: Option<f64> = match u_idx {
            Some(idx) => {
                let cell = record.get(idx).unwrap_or("").trim();
                match cell.parse::<f64>() {
                    Ok(v) if v.is_nan() => None,
                    Ok(v) if v.is_infinite() => return Err(CoreError::NonFiniteResult(row_idx).into()),
                    Ok(v) => Some(v),
                    Err(_) => None,
                }
            }
            None => None,
        };
        if let Some(u) = uncertainty {
            if u < 0.0 {
                return Err(CoreError::NegativeUncertainty(row_idx).into());
            }
        }

        let id = record.get(id_idx).unwrap_or("").trim().to_string();
        if id.is_empty() {
            return Err(CoreError::EmptyId(row_idx).into());
        }

        ids.push(id);
        results.push(result);
        uncertainties.push(uncertainty);
        source_row_indices.push(row_idx);
    }

    if ids.is_empty() {
        return Err(CoreError::EmptyDataset.into());
    }

    Ok(ValidationReport {
        dataset: Dataset {
            ids,
            results,
            uncertainties,
        },
        dropped_rows,
        source_row_indices,
    })
}

/// Read a CSV file from disk and run it through the validation kernel.
pub fn load_csv(path: &Path, mapping: &ColumnMapping) -> eyre::Result<ValidationReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .wrap_err_with(|| format!("open dataset {path:?}"))?;

    let headers = rdr
        .headers()
        .wrap_err_with(|| format!("read CSV headers {path:?}"))?
        .clone();

    let mut rows = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        rows.push(rec.wrap_err_with(|| format!("read row {idx} of {path:?}"))?);
    }

    validate_table(&headers, rows.into_iter(), mapping)
}
