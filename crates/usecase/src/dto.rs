// crates/usecase/src/dto.rs
use std::path::PathBuf;

use file_stats_domain::{NumericSummary, TextSummary};
use serde::Serialize;

/// One analyzed input file together with its summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub body: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportBody {
    Numbers(NumericSummary),
    Text(TextSummary),
}

impl FileReport {
    pub fn numbers(path: impl Into<PathBuf>, summary: NumericSummary) -> Self {
        Self { path: path.into(), body: ReportBody::Numbers(summary) }
    }

    pub fn text(path: impl Into<PathBuf>, summary: TextSummary) -> Self {
        Self { path: path.into(), body: ReportBody::Text(summary) }
    }
}
