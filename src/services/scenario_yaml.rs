use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::scenario::RunwayScenario;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing required input: {0}")]
    MissingInput(&'static str),
    #[error("{field} must be a non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("growth_rate must be between 0 and 100 percent, got {0}")]
    GrowthRateOutOfRange(f64),
    #[error("invalid start date: {0} (expected YYYY-MM-DD)")]
    InvalidStartDate(String),
}

pub const MAX_GROWTH_RATE_PERCENT: f64 = 100.0;

pub fn deserialize_scenario_from_yaml_str(contents: &str) -> Result<RunwayScenario, ScenarioError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub async fn load_scenario_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<RunwayScenario, ScenarioError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScenarioError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    deserialize_scenario_from_yaml_str(&contents)
}

/// Applies the same bounds the input form enforces: money amounts are
/// non-negative and the growth rate is a percentage between 0 and 100.
///
/// The projection engine itself accepts anything; this is the boundary check.
pub fn validate_scenario(scenario: &RunwayScenario) -> Result<(), ScenarioError> {
    let amounts = [
        ("total_cash", scenario.total_cash),
        ("monthly_burn", scenario.monthly_burn),
        ("additional_funding", scenario.additional_funding),
        ("monthly_revenue", scenario.monthly_revenue),
    ];
    for (field, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            return Err(ScenarioError::Negative { field, value });
        }
    }

    let rate = scenario.growth_rate;
    if !rate.is_finite() || !(0.0..=MAX_GROWTH_RATE_PERCENT).contains(&rate) {
        return Err(ScenarioError::GrowthRateOutOfRange(rate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn deserialize_scenario_reads_all_inputs() {
        let yaml = r#"
total_cash: 1000000
monthly_burn: 200000
additional_funding: 250000
growth_rate: 5
monthly_revenue: 50000
"#;
        let scenario = deserialize_scenario_from_yaml_str(yaml).unwrap();

        assert_eq!(
            scenario,
            RunwayScenario::new(1_000_000.0, 200_000.0)
                .with_additional_funding(250_000.0)
                .with_growth_rate(5.0)
                .with_monthly_revenue(50_000.0)
        );
    }

    #[test]
    fn deserialize_scenario_requires_cash_and_burn() {
        let error = deserialize_scenario_from_yaml_str("total_cash: 1000\n").unwrap_err();
        assert!(matches!(error, ScenarioError::Parse(_)));
        assert!(error.to_string().contains("monthly_burn"));
    }

    #[tokio::test]
    async fn load_scenario_from_yaml_file_reads_file() {
        let file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
        file.write_str("total_cash: 500\nmonthly_burn: 100\n").unwrap();

        let scenario = load_scenario_from_yaml_file(file.path()).await.unwrap();
        assert_eq!(scenario, RunwayScenario::new(500.0, 100.0));
    }

    #[tokio::test]
    async fn load_scenario_from_missing_file_reports_path() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");

        let error = load_scenario_from_yaml_file(&path).await.unwrap_err();
        assert!(matches!(error, ScenarioError::ReadFile { .. }));
        assert!(error.to_string().contains("missing.yaml"));
    }

    #[test]
    fn validate_scenario_accepts_form_defaults() {
        let scenario = RunwayScenario::new(1_000_000.0, 200_000.0)
            .with_growth_rate(5.0)
            .with_monthly_revenue(50_000.0);
        assert!(validate_scenario(&scenario).is_ok());
        assert!(validate_scenario(&RunwayScenario::new(0.0, 0.0)).is_ok());
    }

    #[test]
    fn validate_scenario_rejects_negative_amounts() {
        let scenario = RunwayScenario::new(1_000.0, -5.0);
        let error = validate_scenario(&scenario).unwrap_err();

        assert!(matches!(
            error,
            ScenarioError::Negative { field: "monthly_burn", .. }
        ));
    }

    #[test]
    fn validate_scenario_rejects_non_finite_amounts() {
        let scenario = RunwayScenario::new(f64::NAN, 100.0);
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ScenarioError::Negative { field: "total_cash", .. })
        ));
    }

    #[test]
    fn validate_scenario_bounds_growth_rate() {
        let base = RunwayScenario::new(1_000.0, 100.0);

        assert!(validate_scenario(&base.with_growth_rate(100.0)).is_ok());
        assert!(matches!(
            validate_scenario(&base.with_growth_rate(100.5)),
            Err(ScenarioError::GrowthRateOutOfRange(_))
        ));
        assert!(matches!(
            validate_scenario(&base.with_growth_rate(-1.0)),
            Err(ScenarioError::GrowthRateOutOfRange(_))
        ));
    }
}
