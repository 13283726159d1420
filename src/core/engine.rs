use crate::core::aggregator::Aggregator;
use crate::core::{CalibrationReport, LineSource, OutputSink};
use crate::utils::error::Result;

pub struct CalibrationEngine<L: LineSource, S: OutputSink> {
    source: L,
    sink: S,
    aggregator: Aggregator,
}

impl<L: LineSource, S: OutputSink> CalibrationEngine<L, S> {
    pub fn new(source: L, sink: S, aggregator: Aggregator) -> Self {
        Self {
            source,
            sink,
            aggregator,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Reads every line, prints one record per line and then the total.
    /// Nothing is totalled if a line fails.
    pub async fn run(&mut self) -> Result<CalibrationReport> {
        let evaluator = self.aggregator.evaluator();
        tracing::info!(
            "🚀 Starting calibration (strategy: {}, on missing digit: {:?})",
            evaluator.strategy(),
            evaluator.policy()
        );

        // 先完整讀取所有行
        let lines = self.source.read_lines().await?;
        tracing::debug!("Loaded {} lines", lines.len());

        let report = self.aggregator.run(&lines, &mut self.sink)?;
        self.sink.total(report.total)?;

        tracing::info!(
            "✅ Calibration total {} ({} lines evaluated, {} skipped)",
            report.total,
            report.evaluated,
            report.skipped.len()
        );

        Ok(report)
    }
}
