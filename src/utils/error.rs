use crate::core::extractor::Strategy;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("No digit found on line {line_number} using {strategy}: {line:?}")]
    NoDigitFound {
        line_number: usize,
        line: String,
        strategy: Strategy,
    },

    #[error("Cannot read input {}: {source}", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalibrationError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalibrationError::NoDigitFound { .. } => {
                "Fix the offending line, or rerun with --on-missing-digit skip (or zero)"
            }
            CalibrationError::MissingInput { .. } => {
                "Check that the input file exists and is readable, or pass --input"
            }
            CalibrationError::IoError(_) => "Check that standard output is writable",
            CalibrationError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            CalibrationError::InvalidConfigValueError { .. } => {
                "Correct the value in the config file or on the command line"
            }
        }
    }

    /// 依錯誤類型決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            CalibrationError::NoDigitFound { .. } => 1,
            CalibrationError::ConfigError { .. }
            | CalibrationError::InvalidConfigValueError { .. } => 2,
            CalibrationError::MissingInput { .. } | CalibrationError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalibrationError>;
