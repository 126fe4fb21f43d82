pub mod summary;

pub use summary::{NumericSummary, TextSummary};
