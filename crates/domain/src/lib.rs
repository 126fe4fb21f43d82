//! # Domain
//!
//! Pure statistics over in-memory text. Nothing in this crate touches the
//! filesystem; callers hand in the content and get a summary record back.
//!
//! - [`parse`]: permissive leading-prefix number parsing
//! - [`analytics`]: numeric aggregation and text tokenization
//! - [`model`]: the summary records returned to callers

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod parse;

pub use file_stats_shared_kernel::value_objects;
pub use model::{NumericSummary, TextSummary};
