//! Human-readable error descriptions and structured JSON error formatting.

use serde_json::json;

use crate::error::CliError;

/// Map an eyre::Report to a human-readable explanation with likely causes
/// and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    use pt_core::CoreError;

    if let Some(ce) = err.downcast_ref::<CoreError>() {
        return match ce {
            CoreError::MissingColumn(name) => format!(
                "What happened: the dataset has no column named {name:?}.\nLikely causes: a typo in [input_data] column names, or a header row that doesn't match the CSV.\nHow to fix: check id_col/result_col/uncertainty_col in the config against the CSV header row."
            ),
            CoreError::NegativeUncertainty(row) => format!(
                "What happened: row {row} has a negative standard uncertainty.\nLikely causes: malformed or mis-signed data entry.\nHow to fix: correct or remove the offending row; negative uncertainties are never valid."
            ),
            CoreError::EmptyId(row) => format!(
                "What happened: row {row} has a blank participant id after trimming.\nLikely causes: a missing id cell.\nHow to fix: fill in the id column for that row, or remove the row."
            ),
            CoreError::EmptyDataset => "What happened: no usable rows remained after filtering.\nLikely causes: every result cell failed to parse, or the input file is empty.\nHow to fix: check the dataset CSV and the result_col mapping.".to_string(),
            CoreError::NonFiniteResult(row) => format!(
                "What happened: row {row} coerced to an infinite value.\nLikely causes: a malformed numeric cell (e.g. an overflowing literal).\nHow to fix: correct the offending cell."
            ),
            CoreError::MissingMethodInput(method) => format!(
                "What happened: method {method} requires a supplied value and uncertainty, but at least one is missing.\nLikely causes: the [calculation.{method}] table in the config is incomplete.\nHow to fix: set both value and uncertainty under [calculation.{method_lower}].",
                method_lower = method.to_string().to_lowercase()
            ),
            CoreError::InvalidParameter(msg) => format!(
                "What happened: invalid parameter ({msg}).\nLikely causes: an out-of-range value in [calculation].\nHow to fix: edit the config and rerun."
            ),
        };
    }

    if let Some(ce) = err.downcast_ref::<CliError>() {
        return match ce {
            CliError::RendererFailed(detail) => format!(
                "What happened: the report renderer exited with an error.\nDetail: {detail}\nHow to fix: check the template path and renderer installation, then rerun report-only."
            ),
        };
    }

    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: re-run with --log-level=debug for details. Original: {err}"
    )
}

/// Map an error to a stable exit code: `pt_core::CoreError` variants get
/// distinct codes 2-8, `CliError::RendererFailed` gets 9, anything else 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    use pt_core::CoreError;

    if let Some(ce) = err.downcast_ref::<CoreError>() {
        return match ce {
            CoreError::MissingColumn(_) => 2,
            CoreError::NegativeUncertainty(_) => 3,
            CoreError::EmptyId(_) => 4,
            CoreError::EmptyDataset => 5,
            CoreError::NonFiniteResult(_) => 6,
            CoreError::MissingMethodInput(_) => 7,
            CoreError::InvalidParameter(_) => 8,
        };
    }
    if err.downcast_ref::<CliError>().is_some() {
        return 9;
    }
    1
}

/// Structured JSON for errors when `--json` is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    json!({ "error": humanize(err), "exit_code": exit_code_for_error(err) }).to_string()
}
