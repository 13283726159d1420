pub mod aggregator;
pub mod engine;
pub mod evaluator;
pub mod extractor;

pub use crate::domain::model::{CalibrationReport, DigitToken};
pub use crate::domain::ports::{DigitExtractor, LineSource, OutputSink};
pub use crate::utils::error::Result;
