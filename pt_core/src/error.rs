//! Stable error taxonomy for the statistical core.
use thiserror::Error;

use crate::types::Method;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("negative uncertainty at row {0}")]
    NegativeUncertainty(usize),
    #[error("empty id at row {0}")]
    EmptyId(usize),
    #[error("empty dataset")]
    EmptyDataset,
    #[error("non-finite result at row {0}")]
    NonFiniteResult(usize),
    #[error("missing supplied value/uncertainty for method {0}")]
    MissingMethodInput(Method),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
