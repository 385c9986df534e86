//! CLI-only error kinds — things that are collaborator concerns, not part
//! of `pt_core`'s stable taxonomy.
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum CliError {
    #[error("renderer failed: {0}")]
    RendererFailed(String),
}
