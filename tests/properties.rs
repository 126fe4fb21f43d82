// tests/properties.rs
use file_stats::{
    NumericSummary, average, count_lines, count_words, find_longest_word, highest, lowest, parse_numbers, sum,
};
use proptest::prelude::*;

fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..64)
}

proptest! {
    #[test]
    fn average_lies_between_extremes(values in finite_values()) {
        let summary = NumericSummary::from_values(&values);
        let (lo, hi) = (summary.lowest.unwrap(), summary.highest.unwrap());
        let tolerance = 1e-9 * hi.abs().max(lo.abs()).max(1.0);
        prop_assert!(lo <= hi);
        prop_assert!(summary.average >= lo - tolerance);
        prop_assert!(summary.average <= hi + tolerance);
    }

    #[test]
    fn average_is_sum_over_count(values in finite_values()) {
        let expected = sum(&values) / values.len() as f64;
        prop_assert!((average(&values) - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn integer_lines_parse_in_order(values in prop::collection::vec(-10_000i32..10_000, 0..32)) {
        let content = values.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
        let parsed = parse_numbers(&content);
        let expected: Vec<f64> = values.iter().map(|v| f64::from(*v)).collect();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn longest_word_is_a_token_and_no_token_is_longer(text in "[a-z \t\n]{0,80}") {
        let longest = find_longest_word(&text);
        let words = count_words(&text).value();
        prop_assert_eq!(longest.is_empty(), words == 0);
        for token in text.split_whitespace() {
            prop_assert!(token.chars().count() <= longest.chars().count());
        }
        if !longest.is_empty() {
            prop_assert!(text.split_whitespace().any(|t| t == longest));
        }
    }

    #[test]
    fn line_count_is_newlines_plus_one(text in "[a-z\n]{1,80}") {
        let newlines = text.matches('\n').count();
        prop_assert_eq!(count_lines(&text).value(), newlines + 1);
    }
}

#[test]
fn empty_input_sentinels() {
    assert_eq!(sum(&[]), 0.0);
    assert_eq!(average(&[]), 0.0);
    assert_eq!(highest(&[]), None);
    assert_eq!(lowest(&[]), None);
    assert_eq!(count_words(""), 0usize);
    assert_eq!(find_longest_word(""), "");
    assert_eq!(count_lines(""), 0usize);
}

#[test]
fn documented_examples() {
    assert_eq!(count_words("a b"), 2usize);
    assert_eq!(count_words("a    b"), 2usize);
    assert_eq!(find_longest_word("cat elephant dog"), "elephant");
    assert_eq!(find_longest_word("abcd wxyz"), "abcd");
    assert_eq!(count_lines("a"), 1usize);
    assert_eq!(count_lines("a\nb"), 2usize);
    assert_eq!(count_lines("a\nb\n"), 3usize);
    assert_eq!(count_lines("\n\n\n"), 4usize);
}
