/// A recognised digit and the byte offset where its token starts in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitToken {
    pub value: u32,
    pub position: usize,
}

impl DigitToken {
    pub fn new(value: u32, position: usize) -> Self {
        Self { value, position }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalibrationReport {
    pub total: u64,
    /// Lines that contributed a value (including zero-defaulted ones).
    pub evaluated: usize,
    /// 1-based numbers of lines dropped by the skip policy.
    pub skipped: Vec<usize>,
}
