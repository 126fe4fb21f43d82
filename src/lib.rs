//! # file_stats
//!
//! One-shot descriptive statistics for small local files.
//!
//! - numeric files (one value per line): count, sum, highest, lowest, average
//! - text files: word count, longest word, line count
//!
//! The free functions below read through the filesystem adapter; the
//! computation itself lives in [`file_stats_domain`] and can be used on
//! in-memory text directly. Nothing here prints or reads at import time.

// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod options;
pub mod presentation;

pub use file_stats_domain::{
    NumericSummary, TextSummary,
    analytics::{average, count_lines, count_words, find_longest_word, highest, lowest, parse_numbers, sum},
    parse::parse_leading_number,
};
pub use file_stats_shared_kernel::{FileStatsError, InfrastructureError, LineCount, Result, ValueCount, WordCount};
use file_stats_infra::FsSourceReader;
use file_stats_usecase::{AnalyzeNumbers, AnalyzeText};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reads `path` and returns every value with a numeric prefix, in line order.
///
/// # Errors
///
/// Returns a file-read error when `path` is missing or unreadable.
pub fn read_numbers(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    AnalyzeNumbers::new(&FsSourceReader).read_numbers(path.as_ref())
}

/// Reads a file of newline-delimited numbers and summarizes it.
///
/// # Errors
///
/// Returns a file-read error when `path` is missing or unreadable.
/// Lines without a numeric prefix are skipped, never reported.
pub fn analyze_number_file(path: impl AsRef<Path>) -> Result<NumericSummary> {
    AnalyzeNumbers::new(&FsSourceReader).run(path.as_ref())
}

/// Reads a text file fully into memory.
///
/// # Errors
///
/// Returns a file-read error when `path` is missing or unreadable.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String> {
    AnalyzeText::new(&FsSourceReader).read_text(path.as_ref())
}

/// Reads a text file and computes word count, longest word and line count.
///
/// # Errors
///
/// Returns a file-read error when `path` is missing or unreadable.
pub fn analyze_text_file(path: impl AsRef<Path>) -> Result<TextSummary> {
    AnalyzeText::new(&FsSourceReader).run(path.as_ref())
}
