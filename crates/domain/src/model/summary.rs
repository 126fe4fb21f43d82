// crates/domain/src/model/summary.rs
use log::debug;
use serde::Serialize;

use crate::{
    analytics::{numeric, text},
    value_objects::{LineCount, ValueCount, WordCount},
};

/// 数値ファイルの集計結果
///
/// `highest`/`lowest` are `None` exactly when `count` is zero; `sum` and
/// `average` are `0.0` in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericSummary {
    pub sum: f64,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    pub average: f64,
    pub count: ValueCount,
}

impl NumericSummary {
    pub fn from_values(values: &[f64]) -> Self {
        let summary = Self {
            sum: numeric::sum(values),
            highest: numeric::highest(values),
            lowest: numeric::lowest(values),
            average: numeric::average(values),
            count: ValueCount::new(values.len()),
        };
        debug!("numeric summary over {} values: sum={}", summary.count, summary.sum);
        summary
    }

    /// Parses `content` line by line and aggregates what survived.
    pub fn from_content(content: &str) -> Self {
        Self::from_values(&numeric::parse_numbers(content))
    }

    pub fn is_empty(&self) -> bool {
        self.count.value() == 0
    }
}

/// テキストファイルの集計結果
///
/// `longest_word` is empty exactly when `word_count` is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSummary {
    pub word_count: WordCount,
    pub longest_word: String,
    pub line_count: LineCount,
}

impl TextSummary {
    pub fn from_text(content: &str) -> Self {
        let summary = Self {
            word_count: text::count_words(content),
            longest_word: text::find_longest_word(content).to_owned(),
            line_count: text::count_lines(content),
        };
        debug!(
            "text summary: {} words, {} lines",
            summary.word_count, summary.line_count
        );
        summary
    }
}
