// crates/domain/src/analytics/numeric.rs
use log::trace;

use crate::parse::parse_leading_number;

/// Splits `content` into lines and keeps every line with a numeric prefix.
///
/// The whole content is trimmed first. Lines without a numeric prefix are
/// dropped silently; the order of the surviving values follows the lines.
pub fn parse_numbers(content: &str) -> Vec<f64> {
    content
        .trim()
        .split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let value = parse_leading_number(line);
            if value.is_none() {
                trace!("skipping non-numeric line {}: {line:?}", index + 1);
            }
            value
        })
        .collect()
}

/// Left-to-right sum starting from `0.0`.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, value| acc + value)
}

/// Largest value, or `None` for empty input.
pub fn highest(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Smallest value, or `None` for empty input.
pub fn lowest(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Arithmetic mean. Empty input yields `0.0` rather than `NaN`.
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}
