//! `ptcalc report-only` — render a previously-computed results record.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::WrapErr;
use pt_core::ResultsRecord;

use crate::cli::OutputFormat;
use crate::renderer;

pub fn run(
    record_path: &Path,
    template: &Path,
    format: OutputFormat,
    output: &Path,
    renderer_path: &Path,
) -> eyre::Result<()> {
    let record_text = fs::read_to_string(record_path)
        .wrap_err_with(|| format!("read results record {record_path:?}"))?;
    let record: ResultsRecord = serde_json::from_str(&record_text)
        .wrap_err_with(|| format!("parse results record {record_path:?}"))?;
    // Parsed only to confirm the record is well-formed before handing its
    // path on to the renderer subprocess, which reads the file itself.
    let _ = record;

    // Not wrapped: `error_fmt` downcasts the returned error back to
    // `CliError` to pick its exit code and message.
    let record_path: PathBuf = record_path.to_path_buf();
    renderer::render(renderer_path, template, &record_path, format, output)?;

    tracing::info!(output = %output.display(), "report rendered");
    Ok(())
}
