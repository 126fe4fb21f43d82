// crates/usecase/src/orchestrator.rs
use std::path::Path;

use file_stats_domain::{NumericSummary, TextSummary, analytics::parse_numbers};
use file_stats_ports::SourceReader;
use file_stats_shared_kernel::Result;
use log::info;

/// Reads a file of newline-delimited numbers and summarizes it.
pub struct AnalyzeNumbers<'a> {
    reader: &'a dyn SourceReader,
}

impl<'a> AnalyzeNumbers<'a> {
    pub fn new(reader: &'a dyn SourceReader) -> Self {
        Self { reader }
    }

    /// Reads `path` and returns the values that parsed, in line order.
    pub fn read_numbers(&self, path: &Path) -> Result<Vec<f64>> {
        let content = self.reader.read_to_string(path)?;
        Ok(parse_numbers(&content))
    }

    pub fn run(&self, path: &Path) -> Result<NumericSummary> {
        let values = self.read_numbers(path)?;
        info!("{}: {} numeric values", path.display(), values.len());
        Ok(NumericSummary::from_values(&values))
    }
}

/// Reads a text file and computes word, longest-word and line statistics.
pub struct AnalyzeText<'a> {
    reader: &'a dyn SourceReader,
}

impl<'a> AnalyzeText<'a> {
    pub fn new(reader: &'a dyn SourceReader) -> Self {
        Self { reader }
    }

    pub fn read_text(&self, path: &Path) -> Result<String> {
        self.reader.read_to_string(path)
    }

    pub fn run(&self, path: &Path) -> Result<TextSummary> {
        let content = self.read_text(path)?;
        let summary = TextSummary::from_text(&content);
        info!("{}: {} words", path.display(), summary.word_count);
        Ok(summary)
    }
}
