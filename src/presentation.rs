// src/presentation.rs
use std::io::Write;

use file_stats_domain::{NumericSummary, TextSummary};
use file_stats_shared_kernel::Result;
use file_stats_usecase::{FileReport, ReportBody};

use crate::{config::Config, options::OutputFormat};

const MISSING: &str = "n/a";

pub fn print_results(reports: &[FileReport], config: &Config, out: &mut impl Write) -> Result<()> {
    match config.format {
        OutputFormat::Table => print_table(reports, config.precision, out),
        OutputFormat::Json => print_json(reports, out),
        OutputFormat::Jsonl => print_jsonl(reports, out),
        OutputFormat::Yaml => print_yaml(reports, out),
    }
}

fn print_table(reports: &[FileReport], precision: u16, out: &mut impl Write) -> Result<()> {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "--- {} ---", report.path.display())?;
        match &report.body {
            ReportBody::Numbers(summary) => write_numeric(summary, precision, out)?,
            ReportBody::Text(summary) => write_text(summary, out)?,
        }
    }
    Ok(())
}

fn write_numeric(summary: &NumericSummary, precision: u16, out: &mut impl Write) -> Result<()> {
    let precision = usize::from(precision);
    let extreme = |value: Option<f64>| value.map_or_else(|| MISSING.to_string(), |v| v.to_string());
    writeln!(out, "Count: {}", summary.count)?;
    writeln!(out, "Sum: {}", summary.sum)?;
    writeln!(out, "Highest: {}", extreme(summary.highest))?;
    writeln!(out, "Lowest: {}", extreme(summary.lowest))?;
    writeln!(out, "Average: {:.precision$}", summary.average)?;
    Ok(())
}

fn write_text(summary: &TextSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Word Count: {}", summary.word_count)?;
    writeln!(out, "Longest Word: \"{}\"", summary.longest_word)?;
    writeln!(out, "Line Count: {}", summary.line_count)?;
    Ok(())
}

fn print_json(reports: &[FileReport], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

fn print_jsonl(reports: &[FileReport], out: &mut impl Write) -> Result<()> {
    for report in reports {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    }
    Ok(())
}

fn print_yaml(reports: &[FileReport], out: &mut impl Write) -> Result<()> {
    serde_yaml::to_writer(&mut *out, reports)?;
    Ok(())
}
