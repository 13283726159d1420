#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::core::aggregator::Aggregator;
use crate::core::evaluator::{LineEvaluator, MissingDigitPolicy};
use crate::core::extractor::Strategy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use file::FileConfig;

pub const DEFAULT_INPUT: &str = "./input.txt";

/// Fully resolved settings for one calibration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    pub input: PathBuf,
    pub strategy: Strategy,
    pub on_missing_digit: MissingDigitPolicy,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            strategy: Strategy::default(),
            on_missing_digit: MissingDigitPolicy::default(),
        }
    }
}

impl CalibrationConfig {
    pub fn aggregator(&self) -> Aggregator {
        Aggregator::new(LineEvaluator::new(self.strategy, self.on_missing_digit))
    }
}

impl Validate for CalibrationConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)
    }
}
