//! `ptcalc validate` — runs only the input validation kernel.

use std::fs;
use std::path::Path;

use eyre::WrapErr;
use pt_config::{load_csv, ColumnMapping, Settings};

pub fn run(config_path: &Path, data_path: &Path) -> eyre::Result<()> {
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

    println!(
        "validated {} row(s), dropped {} row(s)",
        report.dataset.len(),
        report.dropped_rows.len()
    );
    for dropped in &report.dropped_rows {
        println!("  row {}: {}", dropped.index, dropped.reason);
    }

    Ok(())
}
