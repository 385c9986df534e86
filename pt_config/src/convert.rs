//! `From` implementations bridging `pt_config`'s TOML-deserialized types to
//! `pt_core`'s runtime types.

use pt_core::{AlgorithmAParams, Method, MethodInputs};

use crate::settings::{AlgorithmACfg, CalculationCfg, MethodCfg};

impl From<MethodCfg> for Method {
    fn from(m: MethodCfg) -> Self {
        match m {
            MethodCfg::A => Method::A,
            MethodCfg::Crm => Method::Crm,
            MethodCfg::Formulation => Method::Formulation,
            MethodCfg::Expert => Method::Expert,
        }
    }
}

impl From<&AlgorithmACfg> for AlgorithmAParams {
    fn from(c: &AlgorithmACfg) -> Self {
        AlgorithmAParams {
            tolerance: c.tolerance,
            max_iterations: c.max_iterations,
        }
    }
}

impl From<&CalculationCfg> for MethodInputs {
    fn from(c: &CalculationCfg) -> Self {
        let (supplied_value, supplied_uncertainty) = match c.method {
            MethodCfg::A => (None, None),
            MethodCfg::Crm => (c.crm.value, c.crm.uncertainty),
            MethodCfg::Formulation => (c.formulation.value, c.formulation.uncertainty),
            MethodCfg::Expert => (c.expert.value, c.expert.uncertainty),
        };
        MethodInputs {
            method: c.method.into(),
            algorithm_a: (&c.algorithm_a).into(),
            supplied_value,
            supplied_uncertainty,
        }
    }
}
