use crate::domain::model::DigitToken;
use crate::utils::error::Result;
use async_trait::async_trait;

/// An extraction strategy bound to a single line of text.
pub trait DigitExtractor<'a>: Sized {
    fn new(line: &'a str) -> Self;

    /// Leftmost digit token in the line, if any.
    fn first_token(&self) -> Option<DigitToken>;

    /// Rightmost digit token in the line, if any.
    fn last_token(&self) -> Option<DigitToken>;

    fn first_number(&self) -> Option<u32> {
        self.first_token().map(|token| token.value)
    }

    fn last_number(&self) -> Option<u32> {
        self.last_token().map(|token| token.value)
    }
}

/// Ordered source of calibration lines, read in full before processing.
#[async_trait]
pub trait LineSource: Send + Sync {
    async fn read_lines(&self) -> Result<Vec<String>>;
}

/// Receives the per-line diagnostics and the final total.
pub trait OutputSink {
    fn record(&mut self, line: &str, value: u32) -> Result<()>;
    fn total(&mut self, total: u64) -> Result<()>;
}
