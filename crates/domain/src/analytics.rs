pub mod numeric;
pub mod text;

pub use numeric::{average, highest, lowest, parse_numbers, sum};
pub use text::{count_lines, count_words, find_longest_word};
