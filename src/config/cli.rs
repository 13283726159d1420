use crate::config::{CalibrationConfig, FileConfig};
use crate::core::evaluator::MissingDigitPolicy;
use crate::core::extractor::Strategy;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "trebuchet")]
#[command(about = "Sum the calibration values hidden in a text file")]
pub struct CliConfig {
    /// Input file, one calibration line per line [default: ./input.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Which tokens count as digits [default: word-or-digit]
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// What to do with a line that has no digit [default: fail]
    #[arg(long, value_enum)]
    pub on_missing_digit: Option<MissingDigitPolicy>,

    /// TOML file with defaults for the options above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Flags override the config file, which overrides the defaults.
    pub fn resolve(&self) -> Result<CalibrationConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from: {}", path.display());
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };

        let flags = FileConfig {
            input: self.input.clone(),
            strategy: self.strategy,
            on_missing_digit: self.on_missing_digit,
        };

        let config = file.overlay(flags).into_config();
        config.validate()?;
        Ok(config)
    }
}
