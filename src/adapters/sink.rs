use crate::core::OutputSink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes `"<line> => <value>"` per line, then the total on its own line.
pub struct StdoutSink<W: Write = io::Stdout> {
    writer: W,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for StdoutSink<W> {
    fn record(&mut self, line: &str, value: u32) -> Result<()> {
        writeln!(self.writer, "{} => {}", line, value)?;
        Ok(())
    }

    fn total(&mut self, total: u64) -> Result<()> {
        writeln!(self.writer, "{}", total)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<(String, u32)>,
    total: Option<u64>,
}

impl MemorySink {
    pub fn records(&self) -> &[(String, u32)] {
        &self.records
    }

    pub fn total_value(&self) -> Option<u64> {
        self.total
    }

    pub fn rendered_records(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|(line, value)| format!("{} => {}", line, value))
            .collect()
    }
}

impl OutputSink for MemorySink {
    fn record(&mut self, line: &str, value: u32) -> Result<()> {
        self.records.push((line.to_string(), value));
        Ok(())
    }

    fn total(&mut self, total: u64) -> Result<()> {
        self.total = Some(total);
        Ok(())
    }
}
