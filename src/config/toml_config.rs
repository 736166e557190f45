use crate::utils::error::{BmiError, Result};
use crate::utils::validation::{validate_positive_finite, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DIET_THRESHOLD: f64 = 25.0;
pub const DEFAULT_SCORE_PRECISION: u32 = 2;
const MAX_SCORE_PRECISION: u32 = 6;

/// Tunables for [`BmiCalculator`](crate::core::bmi::BmiCalculator).
///
/// Every field is optional in TOML; missing ones fall back to the
/// conventional reporting values (BMI above 25.0, two decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub diet_threshold: f64,
    pub score_precision: u32,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            diet_threshold: DEFAULT_DIET_THRESHOLD,
            score_precision: DEFAULT_SCORE_PRECISION,
        }
    }
}

impl CalculatorSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates settings.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(|e| BmiError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        settings.validate()?;
        tracing::debug!("Loaded calculator settings: {:?}", settings);
        Ok(settings)
    }
}

impl Validate for CalculatorSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_finite("diet_threshold", self.diet_threshold)?;
        validate_range("score_precision", self.score_precision, 0, MAX_SCORE_PRECISION)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = CalculatorSettings::from_toml_str("").unwrap();
        assert_eq!(settings, CalculatorSettings::default());
        assert_eq!(settings.diet_threshold, 25.0);
        assert_eq!(settings.score_precision, 2);
    }

    #[test]
    fn test_partial_override() {
        let settings = CalculatorSettings::from_toml_str("diet_threshold = 27.5").unwrap();
        assert_eq!(settings.diet_threshold, 27.5);
        assert_eq!(settings.score_precision, 2);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = CalculatorSettings::from_toml_str("diet_threshold = -3.0").unwrap_err();
        assert!(matches!(
            err,
            BmiError::InvalidConfigValueError { ref field, .. } if field == "diet_threshold"
        ));
    }

    #[test]
    fn test_precision_out_of_range_rejected() {
        let err = CalculatorSettings::from_toml_str("score_precision = 9").unwrap_err();
        assert!(matches!(err, BmiError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = CalculatorSettings::from_toml_str("diet_threshold = \"high\"").unwrap_err();
        assert!(matches!(err, BmiError::ConfigError { .. }));
    }
}
