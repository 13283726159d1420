pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{CalibrationConfig, FileConfig};

pub use crate::adapters::{FileLineSource, MemoryLineSource, MemorySink, StdoutSink};
pub use crate::core::{
    aggregator::Aggregator,
    engine::CalibrationEngine,
    evaluator::{LineEvaluator, MissingDigitPolicy},
    extractor::{LiteralDigits, Strategy, WordOrDigit, NUMBER_TABLE},
};
pub use crate::domain::model::{CalibrationReport, DigitToken};
pub use crate::domain::ports::{DigitExtractor, LineSource, OutputSink};
pub use crate::utils::error::{CalibrationError, Result};
