// crates/domain/src/parse.rs

const INFINITY_LITERAL: &str = "Infinity";

/// Parses the longest numeric prefix of `input`, ignoring whatever follows it.
///
/// Accepted shape, after leading whitespace:
/// `[+-] (Infinity | digits [. digits] | . digits) [(e|E) [+-] digits]`.
/// The exponent is only consumed when at least one digit follows the marker,
/// so `"1e"` yields `1.0` and `"3.14xyz"` yields `3.14`.
///
/// Returns `None` when the input has no numeric prefix at all.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with(INFINITY_LITERAL) {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
