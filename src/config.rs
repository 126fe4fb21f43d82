// src/config.rs
use std::path::{Path, PathBuf};

use derive_builder::Builder;

use crate::{
    cli::{Args, Command},
    options::{AnalysisKind, OutputFormat},
};

pub const SAMPLE_NUMBERS_FILE: &str = "sample-numbers.txt";
pub const SAMPLE_TEXT_FILES: [&str; 2] = ["quotes.txt", "sample-text.txt"];

/// A single file to analyze and the summarizer to feed it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    pub kind: AnalysisKind,
}

impl Target {
    pub fn numbers(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), kind: AnalysisKind::Numbers }
    }

    pub fn text(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), kind: AnalysisKind::Text }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub targets: Vec<Target>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "2")]
    pub precision: u16,
}

impl Config {
    /// The fixed sample inputs analyzed by the `demo` subcommand.
    pub fn demo_targets(data_dir: &Path) -> Vec<Target> {
        std::iter::once(Target::numbers(data_dir.join(SAMPLE_NUMBERS_FILE)))
            .chain(SAMPLE_TEXT_FILES.iter().map(|name| Target::text(data_dir.join(name))))
            .collect()
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let targets = match args.command {
            Command::Numbers { paths } => paths.into_iter().map(Target::numbers).collect(),
            Command::Text { paths } => paths.into_iter().map(Target::text).collect(),
            Command::Demo { data_dir } => Self::demo_targets(&data_dir),
        };

        ConfigBuilder::default()
            .targets(targets)
            .format(OutputFormat::from(args.format))
            .precision(args.precision)
            .build()
    }
}
