use crate::core::extractor::Strategy;
use crate::domain::ports::OutputSink;
use crate::utils::error::{CalibrationError, Result};
use serde::{Deserialize, Serialize};

/// What to do with a line that has no digit under the active strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum MissingDigitPolicy {
    /// Abort the run with `NoDigitFound`.
    #[default]
    Fail,
    /// Count the missing digit as 0, as the legacy script did.
    Zero,
    /// Drop the line from the sum and report it.
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineEvaluator {
    strategy: Strategy,
    policy: MissingDigitPolicy,
}

impl LineEvaluator {
    pub fn new(strategy: Strategy, policy: MissingDigitPolicy) -> Self {
        Self { strategy, policy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn policy(&self) -> MissingDigitPolicy {
        self.policy
    }

    /// Computes `first * 10 + last` for one line and writes the
    /// `"<line> => <value>"` record to `sink`.
    ///
    /// Returns `Ok(None)` only when the skip policy drops the line.
    /// `line_number` is 1-based and used for error context.
    pub fn evaluate<S>(&self, line_number: usize, line: &str, sink: &mut S) -> Result<Option<u32>>
    where
        S: OutputSink + ?Sized,
    {
        let (first, last) = self.strategy.numbers(line);

        let value = match (first, last) {
            (Some(first), Some(last)) => first * 10 + last,
            _ => match self.policy {
                MissingDigitPolicy::Fail => {
                    return Err(CalibrationError::NoDigitFound {
                        line_number,
                        line: line.to_string(),
                        strategy: self.strategy,
                    });
                }
                MissingDigitPolicy::Zero => {
                    tracing::debug!("Line {} has no digit, counting it as 0", line_number);
                    first.unwrap_or(0) * 10 + last.unwrap_or(0)
                }
                MissingDigitPolicy::Skip => {
                    tracing::warn!("⚠️ Skipping line {} (no digit): {:?}", line_number, line);
                    return Ok(None);
                }
            },
        };

        tracing::debug!(line_number, value, "evaluated line");
        sink.record(line, value)?;
        Ok(Some(value))
    }
}
