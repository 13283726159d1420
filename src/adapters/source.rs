use crate::core::LineSource;
use crate::utils::error::{CalibrationError, Result};
use async_trait::async_trait;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Reads a whole text file and splits it into lines.
///
/// Bytes that are not valid UTF-8 become `U+FFFD`.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LineSource for FileLineSource {
    async fn read_lines(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading input from: {}", self.path.display());
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CalibrationError::MissingInput {
                path: self.path.clone(),
                source,
            })?;

        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::warn!("⚠️ {} is not valid UTF-8, invalid bytes replaced", self.path.display());
        }

        Ok(split_lines(&content))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLineSource {
    lines: Vec<String>,
}

impl MemoryLineSource {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `text` the same way a file would be.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }
}

#[async_trait]
impl LineSource for MemoryLineSource {
    async fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// `\n` and `\r\n` terminators are stripped; a trailing terminator adds no empty line.
fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
