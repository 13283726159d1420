use crate::config::{CalibrationConfig, DEFAULT_INPUT};
use crate::core::evaluator::MissingDigitPolicy;
use crate::core::extractor::Strategy;
use crate::utils::error::{CalibrationError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One layer of optional settings, from a TOML file or the command line.
///
/// ```toml
/// input = "puzzle.txt"
/// strategy = "literal-digits"
/// on_missing_digit = "skip"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub strategy: Option<Strategy>,
    pub on_missing_digit: Option<MissingDigitPolicy>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| CalibrationError::ConfigError {
                message: format!("cannot read {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalibrationError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Values set in `other` win.
    pub fn overlay(self, other: FileConfig) -> FileConfig {
        FileConfig {
            input: other.input.or(self.input),
            strategy: other.strategy.or(self.strategy),
            on_missing_digit: other.on_missing_digit.or(self.on_missing_digit),
        }
    }

    pub fn into_config(self) -> CalibrationConfig {
        CalibrationConfig {
            input: self.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            strategy: self.strategy.unwrap_or_default(),
            on_missing_digit: self.on_missing_digit.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::from_toml_str(
            r#"
input = "puzzle.txt"
strategy = "literal-digits"
on_missing_digit = "skip"
"#,
        )
        .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("puzzle.txt")));
        assert_eq!(config.strategy, Some(Strategy::LiteralDigits));
        assert_eq!(config.on_missing_digit, Some(MissingDigitPolicy::Skip));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml_str("").unwrap().into_config();
        assert_eq!(config, CalibrationConfig::default());
        assert_eq!(config.strategy, Strategy::WordOrDigit);
        assert_eq!(config.on_missing_digit, MissingDigitPolicy::Fail);
    }

    #[test]
    fn test_rejects_unknown_keys_and_values() {
        assert!(matches!(
            FileConfig::from_toml_str("inptu = \"x\""),
            Err(CalibrationError::ConfigError { .. })
        ));
        assert!(FileConfig::from_toml_str("strategy = \"roman\"").is_err());
    }

    #[test]
    fn test_overlay_prefers_later_layer() {
        let file = FileConfig {
            input: Some(PathBuf::from("file.txt")),
            strategy: Some(Strategy::LiteralDigits),
            on_missing_digit: None,
        };
        let cli = FileConfig {
            input: Some(PathBuf::from("cli.txt")),
            strategy: None,
            on_missing_digit: Some(MissingDigitPolicy::Zero),
        };

        let merged = file.overlay(cli).into_config();
        assert_eq!(merged.input, PathBuf::from("cli.txt"));
        assert_eq!(merged.strategy, Strategy::LiteralDigits);
        assert_eq!(merged.on_missing_digit, MissingDigitPolicy::Zero);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::from_file(dir.path().join("calibration.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
