//! `ptcalc calculate` — validate, dispatch the assigned value, and score.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::WrapErr;
use pt_config::{load_csv, ColumnMapping, Settings};
use pt_core::{run_round, MethodInputs, ResultsRecord};

pub fn run(config_path: &Path, data_path: &Path, out: Option<PathBuf>) -> eyre::Result<ResultsRecord> {
    let cfg_text = fs::read_to_string(config_path)
        .wrap_err_with(|| format!("read config {config_path:?}"))?;
    let settings: Settings =
        toml::from_str(&cfg_text).wrap_err_with(|| format!("parse config {config_path:?}"))?;
    settings.validate().wrap_err("invalid configuration")?;

    let mapping = ColumnMapping {
        id_col: settings.input_data.id_col.clone(),
        result_col: settings.input_data.result_col.clone(),
        uncertainty_col: settings.input_data.uncertainty_col.clone(),
    };

    let report = load_csv(data_path, &mapping)?;
    let method_inputs: MethodInputs = (&settings.calculation).into();

    // Not wrapped with `.wrap_err`: callers downcast the returned error back
    // to `pt_core::CoreError` to pick an exit code, which only works on an
    // unwrapped chain.
    let record = run_round(
        &report.dataset,
        &method_inputs,
        settings.calculation.sigma_pt,
        report.dropped_rows,
    )?;

    if let Some(out_path) = out {
        let json = serde_json::to_string_pretty(&record).wrap_err("serialize results record")?;
        fs::write(&out_path, json).wrap_err_with(|| format!("write {out_path:?}"))?;
        tracing::info!(path = %out_path.display(), "results record written");
    }

    Ok(record)
}
