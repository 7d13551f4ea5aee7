//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the legal
//! constants from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LegalConstants, RegimeMetadata};

/// The file name the loader reads inside a configuration directory.
pub const LEGAL_CONSTANTS_FILE: &str = "legal.yaml";

/// Loads and provides access to the legal constants.
///
/// # Directory Structure
///
/// ```text
/// config/colombia/
/// └── legal.yaml   # Minimum wage, indemnity tiers, fixed-term rules
/// ```
///
/// # Example
///
/// ```no_run
/// use liquidation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/colombia")?;
/// println!("Regime: {}", loader.regime().name);
/// # Ok::<(), liquidation_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    constants: LegalConstants,
}

impl ConfigLoader {
    /// Loads `legal.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or a required field is missing
    ///   (`ConfigParseError`)
    /// - The values cannot drive the formulas, e.g. a non-positive minimum
    ///   wage (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(LEGAL_CONSTANTS_FILE);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses legal constants from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let constants: LegalConstants =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        constants
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: origin.to_string(),
                message,
            })?;

        Ok(Self { constants })
    }

    /// Returns the loaded legal constants.
    pub fn constants(&self) -> &LegalConstants {
        &self.constants
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.constants.regime
    }
}

impl From<LegalConstants> for ConfigLoader {
    fn from(constants: LegalConstants) -> Self {
        Self { constants }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/colombia"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const VALID_YAML: &str = r#"
regime:
  name: "Test regime"
  version: "2024-01-01"
  source_url: "https://example.org/law"
minimum_monthly_wage: "1300000"
transportation_allowance_eligibility_multiple: "2"
fixed_term:
  one_year_term_months: 12
indefinite_term:
  high_earner_threshold_multiple: "10"
  standard:
    first_year_days: "30"
    additional_year_days: "20"
  high_earner:
    first_year_days: "20"
    additional_year_days: "15"
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.regime().version, "2025-01-01");
        assert_eq!(loader.constants(), &LegalConstants::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("legal.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_str_reads_all_sections() {
        let loader = ConfigLoader::from_yaml_str(VALID_YAML, "inline").unwrap();
        let constants = loader.constants();

        assert_eq!(constants.regime.name, "Test regime");
        assert_eq!(constants.minimum_monthly_wage, dec("1300000"));
        assert_eq!(constants.fixed_term.one_year_term_months, 12);
        assert_eq!(constants.indefinite_term.standard.first_year_days, dec("30"));
        assert_eq!(constants.indefinite_term.high_earner.additional_year_days, dec("15"));
    }

    #[test]
    fn test_indemnity_tier_uses_loaded_wage() {
        let loader = ConfigLoader::from_yaml_str(VALID_YAML, "inline").unwrap();
        let constants = loader.constants();
        assert_eq!(constants.indemnity_tier(dec("12999999")).first_year_days, dec("30"));
        assert_eq!(constants.indemnity_tier(dec("13000000")).first_year_days, dec("20"));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        match ConfigLoader::from_yaml_str("regime: [unclosed", "broken.yaml") {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "broken.yaml"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let yaml = VALID_YAML.replace("minimum_monthly_wage: \"1300000\"\n", "");
        match ConfigLoader::from_yaml_str(&yaml, "inline") {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("minimum_monthly_wage"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_wage_is_rejected() {
        let yaml = VALID_YAML.replace("\"1300000\"", "\"0\"");
        match ConfigLoader::from_yaml_str(&yaml, "inline") {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("minimum_monthly_wage"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_uses_builtin_constants() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.constants().minimum_monthly_wage, dec("1423500"));
    }
}
