use crate::domain::model::DigitToken;
use crate::domain::ports::DigitExtractor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every token `WordOrDigit` recognises, in tie-break order.
pub const NUMBER_TABLE: [(&str, u32); 18] = [
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Only ASCII `'0'..='9'` count as digits.
#[derive(Debug, Clone, Copy)]
pub struct LiteralDigits<'a> {
    line: &'a str,
}

impl<'a> LiteralDigits<'a> {
    fn token(position: usize, c: char) -> Option<DigitToken> {
        c.to_digit(10).map(|value| DigitToken::new(value, position))
    }
}

impl<'a> DigitExtractor<'a> for LiteralDigits<'a> {
    fn new(line: &'a str) -> Self {
        Self { line }
    }

    fn first_token(&self) -> Option<DigitToken> {
        self.line
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .and_then(|(position, c)| Self::token(position, c))
    }

    fn last_token(&self) -> Option<DigitToken> {
        self.line
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_ascii_digit())
            .and_then(|(position, c)| Self::token(position, c))
    }
}

/// Digits `1`-`9` or their spelled-out English words.
///
/// Each pattern in [`NUMBER_TABLE`] is searched for independently over the
/// whole line, so overlapping words such as `"oneight"` yield both `one`
/// and `eight`. Ties on position keep the earlier table entry.
#[derive(Debug, Clone, Copy)]
pub struct WordOrDigit<'a> {
    line: &'a str,
}

impl<'a> DigitExtractor<'a> for WordOrDigit<'a> {
    fn new(line: &'a str) -> Self {
        Self { line }
    }

    fn first_token(&self) -> Option<DigitToken> {
        NUMBER_TABLE
            .iter()
            .filter_map(|&(pattern, value)| {
                self.line
                    .find(pattern)
                    .map(|position| DigitToken::new(value, position))
            })
            // min_by_key keeps the first of equal minima
            .min_by_key(|token| token.position)
    }

    fn last_token(&self) -> Option<DigitToken> {
        NUMBER_TABLE
            .iter()
            .filter_map(|&(pattern, value)| {
                self.line
                    .rfind(pattern)
                    .map(|position| DigitToken::new(value, position))
            })
            .fold(None, |best: Option<DigitToken>, token| match best {
                Some(best) if best.position >= token.position => Some(best),
                _ => Some(token),
            })
    }
}

/// Which extractor a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    LiteralDigits,
    #[default]
    WordOrDigit,
}

impl Strategy {
    /// First and last numbers of `line` under this strategy.
    pub fn numbers(self, line: &str) -> (Option<u32>, Option<u32>) {
        match self {
            Strategy::LiteralDigits => first_and_last(&LiteralDigits::new(line)),
            Strategy::WordOrDigit => first_and_last(&WordOrDigit::new(line)),
        }
    }
}

fn first_and_last<'a, E: DigitExtractor<'a>>(extractor: &E) -> (Option<u32>, Option<u32>) {
    (extractor.first_number(), extractor.last_number())
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LiteralDigits => write!(f, "literal-digits"),
            Strategy::WordOrDigit => write!(f, "word-or-digit"),
        }
    }
}
