//! Invokes the external report renderer as an opaque subprocess.
//!
//! The renderer is a collaborator, not part of the statistical core: it
//! receives `(template_path, results_record_path, output_format, output_path)`
//! and either produces the document or fails, surfaced as
//! [`crate::error::CliError::RendererFailed`].

use std::path::Path;
use std::process::Command;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    renderer: &Path,
    template_path: &Path,
    results_record_path: &Path,
    format: OutputFormat,
    output_path: &Path,
) -> Result<(), CliError> {
    let output = Command::new(renderer)
        .arg(template_path)
        .arg(results_record_path)
        .arg(format.to_string())
        .arg(output_path)
        .output()
        .map_err(|e| CliError::RendererFailed(format!("failed to spawn {renderer:?}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::RendererFailed(stderr.trim().to_string()));
    }

    Ok(())
}
