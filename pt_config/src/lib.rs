#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema and dataset ingestion for the PT statistics core.
//!
//! - `Settings` is deserialized from TOML and validated before any row is read.
//! - `dataset` implements the input validation kernel: a caller-named
//!   column mapping plus a raw CSV table becomes a validated
//!   `pt_core::Dataset`, with per-row drops reported rather than silently
//!   discarded.

pub mod convert;
pub mod dataset;
pub mod settings;

pub use dataset::{load_csv, validate_table, ColumnMapping, ValidationReport};
pub use settings::{
    load_toml, AlgorithmACfg, CalculationCfg, InputDataCfg, MethodCfg, MethodValueCfg, Settings,
};
