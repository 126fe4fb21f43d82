// src/app.rs
use std::path::PathBuf;

use file_stats_infra::FsSourceReader;
use file_stats_ports::SourceReader;
use file_stats_shared_kernel::{ErrorContext, FileStatsError, Result};
use file_stats_usecase::{AnalyzeNumbers, AnalyzeText, FileReport};
use log::debug;

use crate::{
    config::{Config, Target},
    options::AnalysisKind,
};

/// Reports for every target that could be read, plus the failures.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<FileReport>,
    pub errors: Vec<(PathBuf, FileStatsError)>,
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Analyze every configured target against the local filesystem.
///
/// A target that cannot be read does not stop the run; its error is
/// collected in [`RunResult::errors`] and the next target is analyzed.
pub fn run(config: &Config) -> RunResult {
    run_with_reader(config, &FsSourceReader)
}

pub fn run_with_reader(config: &Config, reader: &dyn SourceReader) -> RunResult {
    let mut result = RunResult::default();
    for target in &config.targets {
        match analyze(target, reader) {
            Ok(report) => result.reports.push(report),
            Err(err) => {
                debug!("skipping {}: {err}", target.path.display());
                result.errors.push((target.path.clone(), err));
            }
        }
    }
    result
}

fn analyze(target: &Target, reader: &dyn SourceReader) -> Result<FileReport> {
    let path = target.path.as_path();
    match target.kind {
        AnalysisKind::Numbers => AnalyzeNumbers::new(reader)
            .run(path)
            .map(|summary| FileReport::numbers(path, summary))
            .with_context(|| format!("analyzing numbers in {}", path.display())),
        AnalysisKind::Text => AnalyzeText::new(reader)
            .run(path)
            .map(|summary| FileReport::text(path, summary))
            .with_context(|| format!("analyzing text in {}", path.display())),
    }
}
