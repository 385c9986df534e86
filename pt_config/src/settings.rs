//! TOML configuration schema: column mapping, method selection, and the
//! numeric parameters each assigned-value path needs.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct InputDataCfg {
    pub id_col: String,
    pub result_col: String,
    #[serde(default)]
    pub uncertainty_col: Option<String>,
}

/// Mirrors `pt_core::Method` but lives in the TOML-facing schema so the
/// wire spelling ("A" | "CRM" | "Formulation" | "Expert") is independent of
/// the core's own `Display`/`Serialize` choices.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MethodCfg {
    A,
    #[serde(rename = "CRM")]
    Crm,
    Formulation,
    Expert,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct AlgorithmACfg {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for AlgorithmACfg {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct MethodValueCfg {
    pub value: Option<f64>,
    pub uncertainty: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalculationCfg {
    pub method: MethodCfg,
    #[serde(default)]
    pub sigma_pt: Option<f64>,
    #[serde(default)]
    pub algorithm_a: AlgorithmACfg,
    #[serde(default)]
    pub crm: MethodValueCfg,
    #[serde(default)]
    pub formulation: MethodValueCfg,
    #[serde(default)]
    pub expert: MethodValueCfg,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub input_data: InputDataCfg,
    pub calculation: CalculationCfg,
}

pub fn load_toml(s: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str::<Settings>(s)
}

impl Settings {
    pub fn validate(&self) -> eyre::Result<()> {
        if self.input_data.id_col.trim().is_empty() {
            eyre::bail!("input_data.id_col must not be empty");
        }
        if self.input_data.result_col.trim().is_empty() {
            eyre::bail!("input_data.result_col must not be empty");
        }
        if let Some(col) = &self.input_data.uncertainty_col {
            if col.trim().is_empty() {
                eyre::bail!("input_data.uncertainty_col must not be empty when present");
            }
        }

        if !(self.calculation.algorithm_a.tolerance > 0.0) {
            eyre::bail!("calculation.algorithm_a.tolerance must be > 0");
        }
        if self.calculation.algorithm_a.max_iterations == 0 {
            eyre::bail!("calculation.algorithm_a.max_iterations must be > 0");
        }
        if let Some(sigma_pt) = self.calculation.sigma_pt {
            if !(sigma_pt > 0.0) {
                eyre::bail!("calculation.sigma_pt must be > 0");
            }
        }

        for (name, cfg) in [
            ("crm", &self.calculation.crm),
            ("formulation", &self.calculation.formulation),
            ("expert", &self.calculation.expert),
        ] {
            if let Some(u) = cfg.uncertainty {
                if u < 0.0 {
                    eyre::bail!("calculation.{name}.uncertainty must be >= 0");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_toml() -> &'static str {
        r#"
[input_data]
id_col = "Lab"
result_col = "Value"

[calculation]
method = "A"
sigma_pt = 0.1
"#
    }

    #[test]
    fn parses_minimal_config() {
        let cfg = load_toml(base_toml()).expect("parse");
        cfg.validate().expect("validate");
        assert_eq!(cfg.calculation.algorithm_a.tolerance, 1e-5);
        assert_eq!(cfg.calculation.algorithm_a.max_iterations, 50);
        assert!(matches!(cfg.calculation.method, MethodCfg::A));
    }

    #[test]
    fn rejects_zero_tolerance() {
        let toml = format!(
            "{base_toml}\n[calculation.algorithm_a]\ntolerance = 0.0\nmax_iterations = 50\n",
            base_toml = base_toml()
        );
        let cfg = load_toml(&toml).expect("parse");
        let err = cfg.validate().expect_err("should reject tolerance=0");
        assert!(err.to_string().contains("tolerance must be > 0"));
    }

    #[test]
    fn rejects_non_positive_sigma_pt() {
        let toml = r#"
[input_data]
id_col = "Lab"
result_col = "Value"

[calculation]
method = "A"
sigma_pt = 0.0
"#;
        let cfg = load_toml(toml).expect("parse");
        let err = cfg.validate().expect_err("should reject sigma_pt=0");
        assert!(err.to_string().contains("sigma_pt must be > 0"));
    }

    #[test]
    fn crm_method_parses_with_crm_rename() {
        let toml = r#"
[input_data]
id_col = "Lab"
result_col = "Value"

[calculation]
method = "CRM"

[calculation.crm]
value = 12.34
uncertainty = 0.05
"#;
        let cfg = load_toml(toml).expect("parse");
        assert!(matches!(cfg.calculation.method, MethodCfg::Crm));
        assert_eq!(cfg.calculation.crm.value, Some(12.34));
    }

    #[test]
    fn rejects_negative_supplied_uncertainty() {
        let toml = r#"
[input_data]
id_col = "Lab"
result_col = "Value"

[calculation]
method = "Expert"

[calculation.expert]
value = 1.0
uncertainty = -0.2
"#;
        let cfg = load_toml(toml).expect("parse");
        let err = cfg.validate().expect_err("should reject negative uncertainty");
        assert!(err.to_string().contains("expert.uncertainty"));
    }
}
