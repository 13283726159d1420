use crate::core::evaluator::LineEvaluator;
use crate::domain::model::CalibrationReport;
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;

/// Sums line values in source order. Holds no state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    evaluator: LineEvaluator,
}

impl Aggregator {
    pub fn new(evaluator: LineEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &LineEvaluator {
        &self.evaluator
    }

    /// Evaluates every line in order and stops at the first error.
    pub fn run<I, S>(&self, lines: I, sink: &mut S) -> Result<CalibrationReport>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: OutputSink + ?Sized,
    {
        let mut report = CalibrationReport::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            match self.evaluator.evaluate(line_number, line.as_ref(), &mut *sink)? {
                Some(value) => {
                    report.total += u64::from(value);
                    report.evaluated += 1;
                }
                None => report.skipped.push(line_number),
            }
        }

        Ok(report)
    }

    pub fn sum<I, S>(&self, lines: I, sink: &mut S) -> Result<u64>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: OutputSink + ?Sized,
    {
        self.run(lines, sink).map(|report| report.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::core::evaluator::MissingDigitPolicy;
    use crate::core::extractor::Strategy;
    use crate::utils::error::CalibrationError;

    fn aggregator(strategy: Strategy, policy: MissingDigitPolicy) -> Aggregator {
        Aggregator::new(LineEvaluator::new(strategy, policy))
    }

    #[test]
    fn test_sum_word_or_digit() {
        let mut sink = MemorySink::default();
        let total = aggregator(Strategy::WordOrDigit, MissingDigitPolicy::Fail)
            .sum(["1abc2", "two1nine", "oneight"], &mut sink)
            .unwrap();

        assert_eq!(total, 59);
        assert_eq!(
            sink.rendered_records(),
            vec!["1abc2 => 12", "two1nine => 29", "oneight => 18"]
        );
    }

    #[test]
    fn test_empty_source_sums_to_zero() {
        let mut sink = MemorySink::default();
        let lines: Vec<String> = Vec::new();
        let report = Aggregator::default().run(lines, &mut sink).unwrap();

        assert_eq!(report, CalibrationReport::default());
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_rerun_gives_same_total() {
        let agg = aggregator(Strategy::WordOrDigit, MissingDigitPolicy::Fail);
        let lines = ["two1nine", "eightwothree", "abcone2threexyz", "xtwone3four"];

        let first = agg.sum(lines, &mut MemorySink::default()).unwrap();
        let second = agg.sum(lines, &mut MemorySink::default()).unwrap();
        assert_eq!(first, 29 + 83 + 13 + 24);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fail_fast_stops_at_bad_line() {
        let mut sink = MemorySink::default();
        let err = aggregator(Strategy::LiteralDigits, MissingDigitPolicy::Fail)
            .run(["1abc2", "nothing", "3x4"], &mut sink)
            .unwrap_err();

        assert!(matches!(
            err,
            CalibrationError::NoDigitFound { line_number: 2, .. }
        ));
        // 錯誤之後的行不會被處理
        assert_eq!(sink.rendered_records(), vec!["1abc2 => 12"]);
    }

    #[test]
    fn test_skip_policy_reports_skipped_lines() {
        let mut sink = MemorySink::default();
        let report = aggregator(Strategy::LiteralDigits, MissingDigitPolicy::Skip)
            .run(["1abc2", "nothing", "3x4", ""], &mut sink)
            .unwrap();

        assert_eq!(report.total, 12 + 34);
        assert_eq!(report.evaluated, 2);
        assert_eq!(report.skipped, vec![2, 4]);
    }

    #[test]
    fn test_zero_policy_counts_line_as_zero() {
        let mut sink = MemorySink::default();
        let report = aggregator(Strategy::LiteralDigits, MissingDigitPolicy::Zero)
            .run(["1abc2", "nothing"], &mut sink)
            .unwrap();

        assert_eq!(report.total, 12);
        assert_eq!(report.evaluated, 2);
        assert!(report.skipped.is_empty());
        assert_eq!(sink.rendered_records(), vec!["1abc2 => 12", "nothing => 0"]);
    }
}
